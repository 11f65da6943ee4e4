//! Invocation configuration: endpoint, credential, and model resolution.
//!
//! Everything the runner reads from its environment funnels through
//! [`RunnerConfig`]. Resolution goes through an injectable lookup function so
//! the precedence rules can be unit-tested without mutating process-global
//! environment state.
//!
//! Both the endpoint and the credential follow a first-non-empty-wins chain:
//! a variable that is set but empty counts as unset and resolution moves on
//! to the next name in the chain.

use std::env;

/// Default Typhoon OCR endpoint, used when no endpoint variable is set.
pub const DEFAULT_BASE_URL: &str = "https://api.opentyphoon.ai/v1";

/// Default OCR model served by the Typhoon endpoint.
pub const DEFAULT_MODEL: &str = "typhoon-ocr-preview";

/// Endpoint variables, in precedence order.
const BASE_URL_VARS: &[&str] = &["OCR_BASE_URL", "OCR_ENDPOINT"];

/// Credential variables, in precedence order.
const API_KEY_VARS: &[&str] = &["OCR_API_KEY", "TYPHOON_OCR_API_KEY", "OPENAI_API_KEY"];

/// Resolved configuration for one runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Base URL of the OCR endpoint.
    pub base_url: String,

    /// API credential. `None` leaves credential resolution to the HTTP
    /// client's own defaults.
    pub api_key: Option<String>,

    /// Model identifier sent with each request.
    pub model: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Resolve endpoint and credential from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve endpoint and credential through `lookup`.
    ///
    /// `OCR_BASE_URL` → `OCR_ENDPOINT` → [`DEFAULT_BASE_URL`] for the
    /// endpoint; `OCR_API_KEY` → `TYPHOON_OCR_API_KEY` → `OPENAI_API_KEY` →
    /// unset for the credential.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = first_non_empty(&lookup, BASE_URL_VARS)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = first_non_empty(&lookup, API_KEY_VARS);

        Self {
            base_url,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

fn first_non_empty(lookup: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn base_url_prefers_ocr_base_url() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            ("OCR_BASE_URL", "https://a.example/v1"),
            ("OCR_ENDPOINT", "https://b.example/v1"),
        ]));
        assert_eq!(config.base_url, "https://a.example/v1");
    }

    #[test]
    fn base_url_falls_back_to_endpoint() {
        let config =
            RunnerConfig::from_lookup(lookup_from(&[("OCR_ENDPOINT", "https://b.example/v1")]));
        assert_eq!(config.base_url, "https://b.example/v1");
    }

    #[test]
    fn base_url_defaults_when_unset() {
        let config = RunnerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_base_url_counts_as_unset() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            ("OCR_BASE_URL", ""),
            ("OCR_ENDPOINT", "https://b.example/v1"),
        ]));
        assert_eq!(config.base_url, "https://b.example/v1");
    }

    #[test]
    fn api_key_precedence() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            ("OCR_API_KEY", "key-a"),
            ("TYPHOON_OCR_API_KEY", "key-b"),
            ("OPENAI_API_KEY", "key-c"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("key-a"));
    }

    #[test]
    fn api_key_skips_empty_values() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            ("OCR_API_KEY", ""),
            ("TYPHOON_OCR_API_KEY", "key-b"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("key-b"));
    }

    #[test]
    fn api_key_unset_when_no_variable_present() {
        let config = RunnerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn model_override() {
        let config = RunnerConfig::default().with_model("typhoon-ocr-3");
        assert_eq!(config.model, "typhoon-ocr-3");
    }
}
