use searchbox_api_types::{SearchResponse, SearchResultItem, SuggestionItem, SuggestionResponse};

use crate::query_string::search_url;

pub const NO_RESULTS: &str = "No results found.";
pub const SUGGESTION_ERROR: &str = "Error fetching suggestions.";
pub const SEARCH_ERROR: &str = "Error fetching search results.";
pub const EMPTY_QUERY: &str = "Please enter a search query.";

/// What a panel is currently showing. Exactly one of these is visible at a time.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PanelState<T> {
    #[default]
    Idle,
    Loading,
    Message(String),
    Error(String),
    /// Never empty, an empty response becomes [`PanelState::Message`].
    Results(Vec<T>),
}

impl<T> PanelState<T> {
    pub fn is_hidden(&self) -> bool {
        matches!(self, PanelState::Idle)
    }

    fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            PanelState::Message(NO_RESULTS.to_string())
        } else {
            PanelState::Results(items)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionView {
    pub title: String,
    pub href: String,
    pub score: Option<String>,
    pub snippet: String,
}

impl From<SuggestionItem> for SuggestionView {
    fn from(item: SuggestionItem) -> Self {
        Self {
            href: search_url(&item.title),
            score: item.score.map(|s| format!("{s:.2}")),
            snippet: item.snippet.unwrap_or_default(),
            title: item.title,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub resource_name: Option<String>,
    pub favicon: Option<String>,
    pub score: Option<String>,
    pub description: String,
    pub categories: Vec<String>,
}

impl From<SearchResultItem> for ResultView {
    fn from(item: SearchResultItem) -> Self {
        Self {
            title: item.title,
            resource_name: item.resource_name,
            favicon: item.favicon,
            score: item.score.map(|s| format!("Score: {s:.2}")),
            description: item.description.unwrap_or_default(),
            categories: item.categories,
        }
    }
}

pub fn suggestion_state(response: SuggestionResponse) -> PanelState<SuggestionView> {
    PanelState::from_items(
        response
            .suggestions
            .into_iter()
            .map(SuggestionView::from)
            .collect(),
    )
}

pub fn result_state(response: SearchResponse) -> PanelState<ResultView> {
    PanelState::from_items(response.results.into_iter().map(ResultView::from).collect())
}
