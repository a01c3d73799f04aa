use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::{
    components::{search_box::*, search_results::*},
    controller::{SearchServices, SubmitMode},
};

#[component]
pub fn SearchPage() -> impl IntoView {
    let controller = expect_context::<SearchServices>().controller(SubmitMode::InPlace);
    let query = use_query_map();

    // runs once for the address the page was loaded with, then again whenever the router
    // moves to another ?q= (back/forward). Suggestion clicks search through the controller.
    let restore = controller.clone();
    Effect::new(move |_| {
        query.track();
        let controller = restore.clone();
        spawn_local(async move {
            controller.restore().await;
        });
    });

    view! {
        <Title text="Search results" />
        <div class="container my-4">
            <SearchBox controller=controller.clone() />
            <SearchResults controller />
        </div>
    }
}
