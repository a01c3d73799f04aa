use leptos::{prelude::*, task::spawn_local};
use web_sys::MouseEvent;

use crate::{
    components::loading::*,
    controller::SearchController,
    view_model::{PanelState, SuggestionView},
};

#[component]
fn SuggestionRow(item: SuggestionView, controller: SearchController) -> impl IntoView {
    let SuggestionView {
        title,
        href,
        score,
        snippet,
    } = item;
    let selected = title.clone();
    // modified clicks keep the plain link so new tabs still work
    let on_click = move |ev: MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let controller = controller.clone();
        let title = selected.clone();
        spawn_local(async move {
            controller.select_suggestion(&title).await;
        });
    };
    view! {
        <a
            class="list-group-item list-group-item-action flex-column align-items-start"
            href=href
            on:click=on_click
        >
            <div class="d-flex w-100 justify-content-between">
                <h6 class="mb-1">{title}</h6>
                {score.map(|score| view! { <small class="text-muted">{score}</small> })}
            </div>
            <p class="mb-1 text-muted small text-truncate">{snippet}</p>
        </a>
    }
}

/// Dropdown under the search input, hidden while the panel is idle.
#[component]
pub fn SuggestionPanel(controller: SearchController) -> impl IntoView {
    let state = controller.suggestions().state();
    let hidden = {
        let state = state.clone();
        move || state.with(|s| s.is_hidden())
    };
    view! {
        <div id="search-suggestions" class="search-suggestions w-100" class=("d-none", hidden)>
            {move || match state.get() {
                PanelState::Idle => ().into_any(),
                PanelState::Loading => view! { <Loading /> }.into_any(),
                PanelState::Message(text) => {
                    view! { <div class="text-muted text-center mt-2">{text}</div> }.into_any()
                }
                PanelState::Error(text) => {
                    view! { <div class="alert alert-danger">{text}</div> }.into_any()
                }
                PanelState::Results(items) => {
                    view! {
                        <div class="list-group w-100">
                            {items
                                .into_iter()
                                .map(|item| {
                                    view! { <SuggestionRow item controller=controller.clone() /> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
