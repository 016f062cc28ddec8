//! New Item Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_app_store;

/// Form for adding an item to the selected list. The store computes the
/// order value that sorts the new item last.
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let state = store.state;

    let on_submit = {
        let store = store.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let store = store.clone();
            spawn_local(async move {
                let _ = store.items.create().await;
            });
        }
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add an item..."
                prop:value=move || state.item_draft.get().name
                on:input=move |ev| {
                    state.item_draft.update(|draft| draft.name = event_target_value(&ev))
                }
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || state.item_draft.get().description
                on:input=move |ev| {
                    state.item_draft.update(|draft| draft.description = event_target_value(&ev))
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
