use leptos::{prelude::*, task::spawn_local};
use web_sys::MouseEvent;

use crate::{
    components::loading::*,
    controller::SearchController,
    view_model::{PanelState, ResultView},
};

#[component]
fn ResultRow(item: ResultView, controller: SearchController) -> impl IntoView {
    let ResultView {
        title,
        resource_name,
        favicon,
        score,
        description,
        categories,
    } = item;
    let query = title.clone();
    let on_click = move |e: MouseEvent| {
        e.prevent_default();
        let controller = controller.clone();
        let query = query.clone();
        spawn_local(async move {
            controller.select_result(&query).await;
        });
    };
    view! {
        <div class="list-group-item">
            <a class="result-title" href="#" on:click=on_click>
                {title}
            </a>
            <div class="result-meta">
                {favicon
                    .map(|src| {
                        view! { <img class="result-favicon" src=src alt="" width="16" height="16" /> }
                    })}
                {resource_name.map(|name| view! { <span>{name}</span> })}
                {score.map(|score| view! { <span class="float-end">{score}</span> })}
            </div>
            <p class="result-description">{description}</p>
            <div>
                {categories
                    .into_iter()
                    .map(|category| view! { <span class="result-category">{category}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Full results of the last submitted query. Clicking a title searches for that title.
#[component]
pub fn SearchResults(controller: SearchController) -> impl IntoView {
    let state = controller.results().state();
    view! {
        <div id="search-results" class="search-results mt-3">
            {move || {
                let controller = controller.clone();
                match state.get() {
                    PanelState::Idle => ().into_any(),
                    PanelState::Loading => view! { <Loading /> }.into_any(),
                    PanelState::Message(text) => {
                        view! { <div class="text-muted text-center mt-5">{text}</div> }.into_any()
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
                                        view! { <ResultRow item controller=controller.clone() /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
