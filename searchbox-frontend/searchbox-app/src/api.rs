use std::sync::Arc;

use async_trait::async_trait;
use searchbox_api_types::{SearchRequest, SearchResponse, SuggestionResponse};
use serde::de::DeserializeOwned;

use crate::{
    config::SearchConfig,
    error::{AppError, AppResult},
    query_string::encode_component,
};

/// The two endpoints the search box talks to.
#[async_trait(?Send)]
pub trait SearchBackend: Send + Sync {
    async fn autocomplete(&self, query: &str) -> AppResult<SuggestionResponse>;

    async fn search(&self, request: &SearchRequest, csrf_token: &str) -> AppResult<SearchResponse>;
}

pub struct HttpBackend {
    config: Arc<SearchConfig>,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: Arc<SearchConfig>) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn autocomplete_url(&self, query: &str) -> String {
        format!("{}?q={}", self.config.autocomplete_url(), encode_component(query))
    }
}

fn parse_body<T>(status: u16, ok: bool, body: &str, path: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    if !ok {
        log::error!("{path} responded with {status}");
        return Err(AppError::Http(status));
    }
    serde_json::from_str(body).map_err(|e| {
        log::error!("{e} {path} returned: json text {body}");
        e.into()
    })
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use gloo_net::http::Request;

        #[async_trait(?Send)]
        impl SearchBackend for HttpBackend {
            async fn autocomplete(&self, query: &str) -> AppResult<SuggestionResponse> {
                let path = self.autocomplete_url(query);
                log::debug!("GET {path}");
                let response = Request::get(&path).send().await?;
                let body = response.text().await?;
                parse_body(response.status(), response.ok(), &body, &path)
            }

            async fn search(&self, request: &SearchRequest, csrf_token: &str) -> AppResult<SearchResponse> {
                let path = self.config.search_url();
                log::debug!("POST {path} {request:?}");
                let response = Request::post(&path)
                    .header("X-CSRFToken", csrf_token)
                    .json(request)?
                    .send()
                    .await?;
                let body = response.text().await?;
                parse_body(response.status(), response.ok(), &body, &path)
            }
        }
    } else {
        #[async_trait(?Send)]
        impl SearchBackend for HttpBackend {
            async fn autocomplete(&self, query: &str) -> AppResult<SuggestionResponse> {
                let path = self.autocomplete_url(query);
                log::debug!("GET {path}");
                let response = self.client.get(&path).send().await?;
                let status = response.status();
                let body = response.text().await?;
                parse_body(status.as_u16(), status.is_success(), &body, &path)
            }

            async fn search(&self, request: &SearchRequest, csrf_token: &str) -> AppResult<SearchResponse> {
                let path = self.config.search_url();
                log::debug!("POST {path} {request:?}");
                let response = self
                    .client
                    .post(&path)
                    .header("X-CSRFToken", csrf_token)
                    .json(request)
                    .send()
                    .await?;
                let status = response.status();
                let body = response.text().await?;
                parse_body(status.as_u16(), status.is_success(), &body, &path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocomplete_url_is_encoded() {
        let backend = HttpBackend::new(Arc::new(SearchConfig::default()));
        assert_eq!(
            backend.autocomplete_url("alpha beta"),
            "/api/autocomplete?q=alpha%20beta"
        );
    }

    #[test]
    fn non_success_is_http_error() {
        let result: AppResult<SuggestionResponse> = parse_body(500, false, "{}", "/api");
        assert!(matches!(result, Err(AppError::Http(500))));
        let result: AppResult<SuggestionResponse> = parse_body(200, true, "<html>", "/api");
        assert!(matches!(result, Err(AppError::Json(_))));
        let result: AppResult<SuggestionResponse> = parse_body(200, true, "{}", "/api");
        assert_eq!(result.unwrap(), SuggestionResponse::default());
    }
}
