use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Everything the host page tells the search app at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Prefix for the API paths, empty means same origin.
    pub api_base: String,
    pub autocomplete_path: String,
    pub search_path: String,
    pub debounce_ms: u64,
    /// Anti-forgery token sent as `X-CSRFToken`. Sent as an empty header when missing.
    pub csrf_token: Option<String>,
    /// Only apply the newest response for each panel.
    pub discard_stale_responses: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            autocomplete_path: "/api/autocomplete".to_string(),
            search_path: "/api/search".to_string(),
            debounce_ms: 250,
            csrf_token: None,
            discard_stale_responses: true,
        }
    }
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn autocomplete_url(&self) -> String {
        format!("{}{}", self.api_base, self.autocomplete_path)
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.api_base, self.search_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"csrf_token": "tok", "debounce_ms": 100}"#).unwrap();
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
        assert_eq!(config.debounce_delay(), Duration::from_millis(100));
        assert_eq!(config.autocomplete_url(), "/api/autocomplete");
        assert!(config.discard_stale_responses);
    }

    #[test]
    fn api_base_prefixes_paths() {
        let config = SearchConfig {
            api_base: "http://127.0.0.1:8000".to_string(),
            ..Default::default()
        };
        assert_eq!(config.search_url(), "http://127.0.0.1:8000/api/search");
    }
}
