//! Translation table loading
//!
//! Tables live at `locales/<code>.json` relative to a base that is either an
//! HTTP origin or a local directory. Fetchers only fetch; caching and the
//! fallback policy belong to the [`Localizer`](super::Localizer).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;
use url::Url;
use crate::config::SiteConfig;
use crate::utils::errors::{LandingError, Result};

/// One language's translation tree
pub type TranslationTable = Map<String, Value>;

/// Relative location of a language's table
pub fn table_path(code: &str) -> String {
    format!("locales/{}.json", code)
}

/// Source of translation tables
#[async_trait]
pub trait TableFetcher: Send + Sync {
    async fn fetch(&self, code: &str) -> Result<TranslationTable>;
}

/// Accept only a JSON object at the top level
pub fn into_table(code: &str, value: Value) -> Result<TranslationTable> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LandingError::InvalidTable { code: code.to_string() }),
    }
}

/// Fetches `GET <base>/locales/<code>.json`
#[derive(Debug, Clone)]
pub struct HttpTableFetcher {
    client: Client,
    base_url: Url,
}

impl HttpTableFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("MultiLLM-Landing/1.0")
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn table_url(&self, code: &str) -> Result<Url> {
        Ok(self.base_url.join(&table_path(code))?)
    }
}

#[async_trait]
impl TableFetcher for HttpTableFetcher {
    async fn fetch(&self, code: &str) -> Result<TranslationTable> {
        let url = self.table_url(code)?;
        debug!(url = %url, "Loading language file");

        let response = self.client.get(url).send().await?;
        debug!(status = response.status().as_u16(), "Response status");

        if !response.status().is_success() {
            return Err(LandingError::LocaleStatus {
                code: code.to_string(),
                status: response.status().as_u16(),
            });
        }

        let value: Value = response.json().await?;
        into_table(code, value)
    }
}

/// Reads `<root>/locales/<code>.json` from disk
#[derive(Debug, Clone)]
pub struct DirectoryTableFetcher {
    root: PathBuf,
}

impl DirectoryTableFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TableFetcher for DirectoryTableFetcher {
    async fn fetch(&self, code: &str) -> Result<TranslationTable> {
        let file_path = self.root.join(table_path(code));
        debug!(path = %file_path.display(), "Loading language file");

        let content = fs::read_to_string(&file_path).await?;
        let value: Value = serde_json::from_str(&content)?;
        into_table(code, value)
    }
}

/// Serves pre-bundled tables from memory and records every request
#[derive(Debug, Default)]
pub struct MemoryTableFetcher {
    tables: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MemoryTableFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, code: &str, table: Value) -> Self {
        self.tables.insert(code.to_string(), table);
        self
    }

    /// Codes requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TableFetcher for MemoryTableFetcher {
    async fn fetch(&self, code: &str) -> Result<TranslationTable> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(code.to_string());
        }
        match self.tables.get(code) {
            Some(value) => into_table(code, value.clone()),
            None => Err(LandingError::LocaleStatus { code: code.to_string(), status: 404 }),
        }
    }
}

/// Pick the HTTP or directory fetcher for the configured base
pub fn fetcher_for(config: &SiteConfig) -> Result<Box<dyn TableFetcher>> {
    let base = config.locales_base.as_str();
    if base.starts_with("http://") || base.starts_with("https://") {
        let timeout = Duration::from_secs(config.request_timeout_seconds);
        Ok(Box::new(HttpTableFetcher::new(base, timeout)?))
    } else {
        Ok(Box::new(DirectoryTableFetcher::new(base)))
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

/// Recursively count translation leaves
pub fn count_keys(obj: &TranslationTable) -> usize {
    let mut count = 0;
    for value in obj.values() {
        match value {
            Value::Object(nested) => count += count_keys(nested),
            _ => count += 1,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_count_keys_recurses() {
        let table = into_table("en", json!({
            "nav": {"features": "Features", "about": "About"},
            "modal": {"easter": {"features": ["a", "b"]}},
            "title": "Multi"
        }))
        .unwrap();
        assert_eq!(count_keys(&table), 4);
    }

    #[test]
    fn test_non_object_table_rejected() {
        assert_matches!(into_table("ja", json!(["x"])), Err(LandingError::InvalidTable { code }) if code == "ja");
    }

    #[test]
    fn test_table_url_joins_base_path() {
        let fetcher = HttpTableFetcher::new("https://multillm.example/site", Duration::from_secs(1)).unwrap();
        assert_eq!(
            fetcher.table_url("zh-CN").unwrap().as_str(),
            "https://multillm.example/site/locales/zh-CN.json"
        );
    }

    #[tokio::test]
    async fn test_directory_fetcher_reads_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("locales")).unwrap();
        std::fs::write(dir.path().join("locales/ja.json"), r#"{"nav": {"about": "概要"}}"#).unwrap();

        let fetcher = DirectoryTableFetcher::new(dir.path());
        let table = fetcher.fetch("ja").await.unwrap();
        assert_eq!(table["nav"]["about"], "概要");
        assert_matches!(fetcher.fetch("en").await, Err(LandingError::Io(_)));
    }

    #[tokio::test]
    async fn test_memory_fetcher_records_requests() {
        let fetcher = MemoryTableFetcher::new().with_table("en", json!({"a": "b"}));
        assert!(fetcher.fetch("en").await.is_ok());
        assert_matches!(fetcher.fetch("ja").await, Err(LandingError::LocaleStatus { status: 404, .. }));
        assert_eq!(fetcher.requests(), vec!["en".to_string(), "ja".to_string()]);
    }
}
