//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;
use crate::interaction::easter_egg::KEY_BUFFER_LEN;
use crate::utils::errors::{LandingError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_site_config(&settings.site)?;
    validate_i18n_config(&settings.i18n)?;
    validate_interaction_config(&settings.interaction)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate site configuration
fn validate_site_config(config: &super::SiteConfig) -> Result<()> {
    url::Url::parse(&config.page_url)?;

    if config.locales_base.is_empty() {
        return Err(LandingError::Config(
            "Locales base is required".to_string()
        ));
    }

    if config.request_timeout_seconds == 0 {
        return Err(LandingError::Config(
            "Request timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(LandingError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(LandingError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for language in &config.supported_languages {
        if language.code.is_empty() || language.name.is_empty() {
            return Err(LandingError::Config(
                "Supported languages need both a code and a display name".to_string()
            ));
        }
        if !seen.insert(language.code.as_str()) {
            return Err(LandingError::Config(
                format!("Duplicate supported language: {}", language.code)
            ));
        }
    }

    if !seen.contains(config.default_language.as_str()) {
        return Err(LandingError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    if config.storage_key.is_empty() || config.query_param.is_empty() {
        return Err(LandingError::Config(
            "Storage key and query parameter are required".to_string()
        ));
    }

    Ok(())
}

/// Validate interaction configuration
fn validate_interaction_config(config: &super::InteractionConfig) -> Result<()> {
    let trigger_len = config.easter_egg_trigger.chars().count();
    if trigger_len == 0 || trigger_len > KEY_BUFFER_LEN {
        return Err(LandingError::Config(
            format!("Easter egg trigger must be 1 to {} characters", KEY_BUFFER_LEN)
        ));
    }

    if config.viewport_height <= 0.0 {
        return Err(LandingError::Config(
            "Viewport height must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LandingError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LandingError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
