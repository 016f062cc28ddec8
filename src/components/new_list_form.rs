//! New List Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_app_store;

/// Form for creating new lists. The draft lives in the store so a
/// successful create can clear it.
#[component]
pub fn NewListForm() -> impl IntoView {
    let store = use_app_store();
    let state = store.state;

    let on_submit = {
        let store = store.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let store = store.clone();
            spawn_local(async move {
                let _ = store.lists.create().await;
            });
        }
    };

    view! {
        <form class="new-list-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="New list..."
                prop:value=move || state.list_draft.get().name
                on:input=move |ev| {
                    state.list_draft.update(|draft| draft.name = event_target_value(&ev))
                }
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || state.list_draft.get().description
                on:input=move |ev| {
                    state.list_draft.update(|draft| draft.description = event_target_value(&ev))
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
