pub mod loading;
pub mod search_box;
pub mod search_results;
pub mod suggestion_panel;
