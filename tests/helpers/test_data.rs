//! Translation fixtures

use serde_json::{json, Value};

/// Small tables with one gap per language for exercising fallback
pub fn fixture_table(code: &str) -> Value {
    match code {
        "en" => json!({
            "nav": {"features": "Features", "download": "Download", "howToUse": "How to Use", "about": "About"},
            "hero": {"title": "Multi⁺LLM", "subtitle": "Compare AI answers", "description": "Ask once"},
            "download": {"chrome": {"button": "Add to Chrome", "store": "Chrome Web Store"}},
            "modal": {
                "download": {"title": "Download for {browser}", "goTo": "Go to {store}", "cancel": "Cancel"},
                "easter": {"title": "Hidden Features", "features": ["Omnibox", "Context menu"]}
            },
            "toast": {"copied": "Copied to clipboard!"}
        }),
        "ja" => json!({
            "nav": {"features": "機能", "download": "ダウンロード", "howToUse": "使い方"},
            "hero": {"title": "Multi⁺LLM", "subtitle": "AIの回答を比較", "description": "一度の質問"},
            "download": {"chrome": {"button": "Chrome に追加", "store": "Chrome ウェブストア"}},
            "modal": {"download": {"title": "{browser} 版をダウンロード", "cancel": "キャンセル"}},
            "toast": {"copied": "コピーしました！"}
        }),
        "zh-CN" => json!({
            "nav": {"features": "功能", "download": "下载", "howToUse": "使用方法", "about": "关于"},
            "hero": {"title": "Multi⁺LLM", "subtitle": "并排比较", "description": "提问一次"}
        }),
        "zh-TW" => json!({
            "nav": {"features": "功能", "download": "下載", "howToUse": "使用方式", "about": "關於"},
            "hero": {"title": "Multi⁺LLM", "subtitle": "並排比較", "description": "提問一次"}
        }),
        _ => json!({}),
    }
}

/// A table shipped under `locales/`
pub fn shipped_table(code: &str) -> Value {
    let path = format!("{}/locales/{}.json", env!("CARGO_MANIFEST_DIR"), code);
    let content = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path, e));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("parsing {}: {}", path, e))
}
