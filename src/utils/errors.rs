//! Error handling for the landing page
//!
//! This module defines the main error types used throughout the crate.
//! None of these ever reach the visitor: the localizer and the interaction
//! layer log them and degrade to fallback tables, raw keys or silent skips.

use thiserror::Error;

/// Main error type for the landing page
#[derive(Error, Debug)]
pub enum LandingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Locale table {code} returned status {status}")]
    LocaleStatus { code: String, status: u16 },

    #[error("Invalid translation table for {code}: expected a JSON object")]
    InvalidTable { code: String },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Element {0} is detached from the document")]
    DetachedElement(usize),

    #[error("Invalid document hierarchy: {0}")]
    InvalidHierarchy(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, LandingError>;

impl LandingError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LandingError::Config(_) => false,
            LandingError::Http(_) => true,
            LandingError::Serialization(_) => true,
            LandingError::Io(_) => true,
            LandingError::UrlParse(_) => false,
            LandingError::LocaleStatus { .. } => true,
            LandingError::InvalidTable { .. } => true,
            LandingError::InvalidSelector(_) => false,
            LandingError::DetachedElement(_) => true,
            LandingError::InvalidHierarchy(_) => false,
            LandingError::Clipboard(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LandingError::Config(_) => ErrorSeverity::Critical,
            LandingError::UrlParse(_) => ErrorSeverity::Critical,
            LandingError::InvalidSelector(_) => ErrorSeverity::Error,
            LandingError::DetachedElement(_) => ErrorSeverity::Info,
            LandingError::LocaleStatus { .. } => ErrorSeverity::Warning,
            LandingError::InvalidTable { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
