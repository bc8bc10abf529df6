//! Mock locale server for testing
//!
//! This module provides a mock HTTP server that serves translation tables
//! under `/locales/<code>.json`. It uses wiremock to create configurable
//! mock responses.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::{fixture_table, shipped_table};

/// Mock locale server for testing
pub struct LocaleMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failing(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

impl LocaleMockServer {
    /// Create a new mock locale server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    /// Serve the table for `code`
    pub async fn mock_locale(&self, code: &str, config: MockResponseConfig) {
        let mut response = ResponseTemplate::new(config.status);
        if config.status < 400 {
            let body = config.custom_response.unwrap_or_else(|| fixture_table(code));
            response = response.set_body_json(body);
        } else if let Some(body) = config.custom_response {
            response = response.set_body_json(body);
        }

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("GET"))
            .and(path(format!("/locales/{}.json", code)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Serve a body that is not valid JSON
    pub async fn mock_malformed(&self, code: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/locales/{}.json", code)))
            .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
            .mount(&self.server)
            .await;
    }

    /// Serve the small fixture tables for every supported language
    pub async fn setup_default_mocks(&self) {
        for code in ["en", "ja", "zh-CN", "zh-TW"] {
            self.mock_locale(code, MockResponseConfig::default()).await;
        }
    }

    /// Serve the tables shipped under `locales/`
    pub async fn setup_shipped_mocks(&self) {
        for code in ["en", "ja", "zh-CN", "zh-TW"] {
            let config = MockResponseConfig {
                custom_response: Some(shipped_table(code)),
                ..Default::default()
            };
            self.mock_locale(code, config).await;
        }
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Number of requests received for a language's table
    pub async fn requests_for(&self, code: &str) -> usize {
        let expected = format!("/locales/{}.json", code);
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        received_requests
            .iter()
            .filter(|req| req.url.path() == expected)
            .count()
    }

    /// Verify that a language's table was requested `times` times
    pub async fn verify_locale_requested(&self, code: &str, times: usize) {
        let matching_requests = self.requests_for(code).await;
        assert_eq!(
            matching_requests, times,
            "Expected {} requests for {}, but got {}",
            times, code, matching_requests
        );
    }
}
