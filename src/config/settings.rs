//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub site: SiteConfig,
    pub i18n: I18nConfig,
    pub interaction: InteractionConfig,
    pub logging: LoggingConfig,
}

/// Where the page lives and where its locale tables come from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// URL the page is served at; may carry a `?lang=` override
    pub page_url: String,
    /// `http(s)://` base URL or a local directory containing `locales/`
    pub locales_base: String,
    pub request_timeout_seconds: u64,
}

/// A supported display language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageConfig {
    pub code: String,
    pub name: String,
}

impl LanguageConfig {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<LanguageConfig>,
    pub storage_key: String,
    pub query_param: String,
}

/// Page interaction tunables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InteractionConfig {
    pub header_height: f64,
    pub scroll_threshold: f64,
    pub viewport_height: f64,
    pub toast_show_delay_ms: u64,
    pub toast_visible_ms: u64,
    pub exit_transition_ms: u64,
    pub easter_egg_trigger: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("MULTILLM").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit configuration file
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::from(path))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LandingError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            i18n: I18nConfig::default(),
            interaction: InteractionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost:8080/".to_string(),
            locales_base: ".".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            supported_languages: vec![
                LanguageConfig::new("en", "English"),
                LanguageConfig::new("ja", "日本語"),
                LanguageConfig::new("zh-CN", "简体中文"),
                LanguageConfig::new("zh-TW", "繁體中文"),
            ],
            storage_key: "preferred-language".to_string(),
            query_param: "lang".to_string(),
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            header_height: 60.0,
            scroll_threshold: 50.0,
            viewport_height: 800.0,
            toast_show_delay_ms: 100,
            toast_visible_ms: 2000,
            exit_transition_ms: 300,
            easter_egg_trigger: "multillm".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}
