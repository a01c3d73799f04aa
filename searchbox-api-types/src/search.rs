use serde::{Deserialize, Serialize};

fn untitled() -> String {
    "Untitled".to_string()
}

/// One entry of the autocomplete endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SuggestionItem {
    #[serde(default = "untitled", alias = "name")]
    pub title: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, alias = "excerpt")]
    pub snippet: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of the full search endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SearchResultItem {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default, rename = "resource-name")]
    pub resource_name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "category")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
}

/// `GET /api/autocomplete?q=...`
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestions: Vec<SuggestionItem>,
    /// The backend hands out a fresh anti-forgery token with every response.
    #[serde(default)]
    pub csrf_token: Option<String>,
}

/// `POST /api/search`
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
    #[serde(default)]
    pub csrf_token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchRequest {
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_from_backend() {
        let body = r#"{
            "csrf_token": "abc123",
            "results": [
                {
                    "title": "Search result for rust",
                    "resource-name": "Example Site 1",
                    "favicon": "https://www.example.com/favicon.ico",
                    "description": "Description for search result 1",
                    "url": "https://www.example.com/search1",
                    "category": ["pdf", "video"]
                },
                { "score": 0.5 }
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.csrf_token.as_deref(), Some("abc123"));
        assert_eq!(response.results.len(), 2);
        let first = &response.results[0];
        assert_eq!(first.resource_name.as_deref(), Some("Example Site 1"));
        assert_eq!(first.categories, vec!["pdf".to_string(), "video".to_string()]);
        assert_eq!(first.score, None);
        let second = &response.results[1];
        assert_eq!(second.title, "Untitled");
        assert!(second.categories.is_empty());
        assert_eq!(second.score, Some(0.5));
    }

    #[test]
    fn suggestion_fallback_keys() {
        let body = r#"{"suggestions": [
            {"name": "from name", "excerpt": "an excerpt"},
            {"title": "t", "url": "/suggestion1", "score": 1}
        ]}"#;
        let response: SuggestionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.suggestions[0].title, "from name");
        assert_eq!(response.suggestions[0].snippet.as_deref(), Some("an excerpt"));
        assert_eq!(response.suggestions[1].url.as_deref(), Some("/suggestion1"));
        assert_eq!(response.suggestions[1].score, Some(1.0));
        assert_eq!(response.csrf_token, None);
    }

    #[test]
    fn missing_lists_are_empty() {
        let suggestions: SuggestionResponse = serde_json::from_str("{}").unwrap();
        assert!(suggestions.suggestions.is_empty());
        let results: SearchResponse = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert!(results.results.is_empty());
    }

    #[test]
    fn request_body() {
        let body = serde_json::to_string(&SearchRequest::new("alpha beta")).unwrap();
        assert_eq!(body, r#"{"query":"alpha beta"}"#);
    }
}
