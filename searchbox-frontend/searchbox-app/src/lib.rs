pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod location;
pub mod query_string;
pub mod routes;
pub mod view_model;

pub use controller::{SearchController, SearchServices, SubmitMode};

use crate::routes::{home_page::*, not_found::*, search_page::*};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

#[component]
pub fn App(services: SearchServices) -> impl IntoView {
    provide_meta_context();
    provide_context(services);

    view! {
        <Title text="Search" />
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}
