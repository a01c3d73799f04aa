use crate::{
    components::suggestion_panel::*,
    controller::SearchController,
};
use icondata as i;
use leptos::{html::Div, prelude::*, task::spawn_local};
use leptos_icons::*;
use leptos_use::on_click_outside;
use web_sys::KeyboardEvent;

#[component]
pub fn SearchBox(controller: SearchController) -> impl IntoView {
    let wrapper = NodeRef::<Div>::new();
    let input = controller.input();

    let dismiss = controller.clone();
    let _ = on_click_outside(wrapper, move |_| dismiss.dismiss_suggestions());

    let panel = controller.clone();
    let typing = controller.clone();
    let on_input = move |ev| {
        if let Some(ticket) = typing.input_changed(&event_target_value(&ev)) {
            let controller = typing.clone();
            spawn_local(async move {
                controller.settle(ticket).await;
            });
        }
    };

    let submit = {
        let input = input.clone();
        move || {
            let controller = controller.clone();
            let query = input.get_untracked();
            spawn_local(async move {
                controller.submit(&query).await;
            });
        }
    };
    let submit_on_enter = submit.clone();
    let keydown = move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit_on_enter();
        }
    };

    view! {
        <div node_ref=wrapper class="search-box position-relative">
            <div class="input-group">
                <input
                    id="search-input"
                    class="form-control"
                    type="text"
                    placeholder="Search..."
                    autocomplete="off"
                    on:input=on_input
                    on:keydown=keydown
                    prop:value=move || input.get()
                />
                <button id="search" class="btn btn-primary" type="button" on:click=move |_| submit()>
                    <Icon icon=i::AiSearchOutlined />
                </button>
            </div>
            <SuggestionPanel controller=panel />
        </div>
    }
}
