use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use leptos::prelude::*;
use searchbox_api_types::SearchRequest;

use crate::{
    api::SearchBackend,
    config::SearchConfig,
    debounce::{DebounceTicket, Debouncer},
    location::PageEnv,
    query_string::search_url,
    view_model::{
        result_state, suggestion_state, PanelState, ResultView, SuggestionView, EMPTY_QUERY,
        SEARCH_ERROR, SUGGESTION_ERROR,
    },
};

/// What the page hands to every controller it builds.
#[derive(Clone)]
pub struct SearchServices {
    pub config: Arc<SearchConfig>,
    pub backend: Arc<dyn SearchBackend>,
    pub env: Arc<dyn PageEnv>,
}

impl SearchServices {
    pub fn new(
        config: SearchConfig,
        backend: Arc<dyn SearchBackend>,
        env: Arc<dyn PageEnv>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            backend,
            env,
        }
    }

    pub fn browser(config: SearchConfig) -> Self {
        let config = Arc::new(config);
        Self {
            backend: Arc::new(crate::api::HttpBackend::new(config.clone())),
            env: Arc::new(crate::location::BrowserEnv),
            config,
        }
    }

    pub fn controller(&self, mode: SubmitMode) -> SearchController {
        SearchController::new(self.clone(), mode)
    }
}

/// What Enter and the search button do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    /// Leave the page for the results page.
    Navigate,
    /// Run the search here and rewrite the address bar.
    InPlace,
}

/// A display surface plus the number of the newest request that may write to it.
#[derive(Clone)]
pub struct Panel<T: 'static> {
    state: ArcRwSignal<PanelState<T>>,
    sequence: Arc<AtomicU64>,
}

impl<T> Panel<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            state: ArcRwSignal::new(PanelState::Idle),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn state(&self) -> ArcRwSignal<PanelState<T>> {
        self.state.clone()
    }

    pub fn current(&self) -> PanelState<T> {
        self.state.get_untracked()
    }

    /// Overwrites the panel and orphans any request still in flight.
    fn show(&self, state: PanelState<T>) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
        self.state.set(state);
    }

    fn begin(&self) -> u64 {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.set(PanelState::Loading);
        sequence
    }

    fn finish(&self, sequence: u64, state: PanelState<T>, discard_stale: bool) {
        if discard_stale && self.sequence.load(Ordering::SeqCst) != sequence {
            log::debug!("dropping response {sequence}, panel has moved on");
            return;
        }
        self.state.set(state);
    }
}

/// Mediates between the search input, the two panels and the backend. One per page.
#[derive(Clone)]
pub struct SearchController {
    config: Arc<SearchConfig>,
    backend: Arc<dyn SearchBackend>,
    env: Arc<dyn PageEnv>,
    mode: SubmitMode,
    debouncer: Arc<Debouncer>,
    csrf_token: ArcRwSignal<String>,
    input: ArcRwSignal<String>,
    suggestions: Panel<SuggestionView>,
    results: Panel<ResultView>,
}

impl SearchController {
    pub fn new(services: SearchServices, mode: SubmitMode) -> Self {
        let SearchServices {
            config,
            backend,
            env,
        } = services;
        Self {
            debouncer: Arc::new(Debouncer::new(config.debounce_delay())),
            csrf_token: ArcRwSignal::new(config.csrf_token.clone().unwrap_or_default()),
            input: ArcRwSignal::new(String::new()),
            suggestions: Panel::new(),
            results: Panel::new(),
            config,
            backend,
            env,
            mode,
        }
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    pub fn input(&self) -> ArcRwSignal<String> {
        self.input.clone()
    }

    pub fn suggestions(&self) -> &Panel<SuggestionView> {
        &self.suggestions
    }

    pub fn results(&self) -> &Panel<ResultView> {
        &self.results
    }

    /// Called on every input event. Returns the ticket to [`SearchController::settle`] when a
    /// suggestion request should follow; an empty field hides the panel right away.
    pub fn input_changed(&self, raw: &str) -> Option<DebounceTicket> {
        self.input.set(raw.to_string());
        self.debouncer.cancel();
        let query = raw.trim();
        if query.is_empty() {
            self.suggestions.show(PanelState::Idle);
            return None;
        }
        Some(self.debouncer.arm(query))
    }

    /// Waits out the debounce delay and fetches suggestions if no newer keystroke came in.
    pub async fn settle(&self, ticket: DebounceTicket) {
        if !self.debouncer.is_current(&ticket) {
            return;
        }
        let sleep = self.env.sleep(self.debouncer.delay());
        if !self.debouncer.wait(&ticket, sleep).await {
            return;
        }
        self.fetch_suggestions(&ticket.query).await;
    }

    pub async fn fetch_suggestions(&self, query: &str) {
        let sequence = self.suggestions.begin();
        let state = match self.backend.autocomplete(query).await {
            Ok(response) => {
                self.remember_token(response.csrf_token.clone());
                suggestion_state(response)
            }
            Err(e) => {
                log::error!("Error fetching suggestions for {query:?}: {e}");
                PanelState::Error(SUGGESTION_ERROR.to_string())
            }
        };
        self.suggestions
            .finish(sequence, state, self.config.discard_stale_responses);
    }

    /// Enter key or the search button.
    pub async fn submit(&self, raw: &str) {
        match self.mode {
            SubmitMode::Navigate => self.navigate_to_results(raw),
            SubmitMode::InPlace => self.search(raw).await,
        }
    }

    /// A suggestion link was clicked. Runs like a submit of its title so the results page searches
    /// even when the router already sits on the same `?q=`.
    pub async fn select_suggestion(&self, title: &str) {
        self.submit(title).await;
    }

    /// A result title was clicked, search for it instead.
    pub async fn select_result(&self, title: &str) {
        self.search(title).await;
    }

    /// Reruns the search carried in the address bar so shared links show their results.
    pub async fn restore(&self) {
        if let Some(query) = self.env.current_query() {
            log::debug!("restoring search {query:?} from the address bar");
            self.search(&query).await;
        }
    }

    /// Click landed outside the search box.
    pub fn dismiss_suggestions(&self) {
        self.suggestions.show(PanelState::Idle);
    }

    fn navigate_to_results(&self, raw: &str) {
        self.debouncer.cancel();
        self.suggestions.show(PanelState::Idle);
        let query = raw.trim();
        if query.is_empty() {
            return;
        }
        self.env.navigate(&search_url(query));
    }

    async fn search(&self, raw: &str) {
        self.debouncer.cancel();
        self.suggestions.show(PanelState::Idle);
        let query = raw.trim();
        if query.is_empty() {
            self.results.show(PanelState::Message(EMPTY_QUERY.to_string()));
            return;
        }
        self.env.replace_query(query);
        self.input.set(query.to_string());
        let sequence = self.results.begin();
        let request = SearchRequest::new(query);
        let token = self.csrf_token.get_untracked();
        let state = match self.backend.search(&request, &token).await {
            Ok(response) => {
                self.remember_token(response.csrf_token.clone());
                result_state(response)
            }
            Err(e) => {
                log::error!("Error fetching search results for {query:?}: {e}");
                PanelState::Error(SEARCH_ERROR.to_string())
            }
        };
        self.results
            .finish(sequence, state, self.config.discard_stale_responses);
    }

    fn remember_token(&self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.csrf_token.set(token);
        }
    }
}
