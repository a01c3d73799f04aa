use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <div class="container my-5 text-center">
            <h1>"Page not found"</h1>
            <a href="/">"Back to search"</a>
        </div>
    }
}
