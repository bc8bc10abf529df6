//! Multi⁺LLM landing page
//!
//! Main application entry point

use tracing::{info, warn};

use MultiLLMLanding::{
    config::Settings,
    i18n::bindings::TEXT_BINDINGS,
    site::Site,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", MultiLLMLanding::info());

    let browser_locale = sys_locale::get_locale().unwrap_or_else(|| {
        warn!("System locale unavailable, assuming en-US");
        "en-US".to_string()
    });
    info!(locale = %browser_locale, page = %settings.site.page_url, "Loading landing page");

    let mut site = Site::from_settings(&settings, &browser_locale)?;
    site.start().await?;

    if let Some(localizer) = site.localizer() {
        let stats = localizer.stats();
        for language in &stats.languages {
            info!(language = %language.code, keys = language.key_count, "Translation table loaded");
        }
        info!(
            active = localizer.current_language(),
            total_keys = stats.total_keys,
            "Localization ready"
        );
    }

    let doc = &site.page().document;
    info!(title = %doc.title, url = %site.page().window.location.url(), "Page rendered");
    for binding in TEXT_BINDINGS {
        for element in doc.query_selector_all(&binding.selector())? {
            info!(key = binding.key, text = %doc.text_content(element), "Bound text");
        }
    }

    info!("{} has finished rendering.", MultiLLMLanding::NAME);

    Ok(())
}
