use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="text-center my-3">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}
