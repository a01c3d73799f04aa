use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    components::search_box::*,
    controller::{SearchServices, SubmitMode},
};

/// Landing page. Suggestions drop down while typing, Enter goes to the results page.
#[component]
pub fn HomePage() -> impl IntoView {
    let controller = expect_context::<SearchServices>().controller(SubmitMode::Navigate);
    view! {
        <Title text="Search" />
        <div class="container my-5">
            <h1 class="text-center mb-4">"Search"</h1>
            <SearchBox controller />
        </div>
    }
}
