pub mod search;

pub use search::{SearchRequest, SearchResponse, SearchResultItem, SuggestionItem, SuggestionResponse};
