//! Inline Edit Component
//!
//! Shows a value as text until double-clicked, then swaps to an input
//! bound to the shared edit buffer. Enter or blur commits, Escape
//! cancels. A blur right after Enter or Escape is harmless: committing
//! with no active session is a no-op.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, EditTarget};

#[component]
pub fn InlineEdit(
    target: EditTarget,
    #[prop(into)] display: Signal<String>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let store = use_app_store();
    let state = store.state;

    let commit = {
        let store = store.clone();
        move || {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.commit_edit().await;
            });
        }
    };
    let commit_on_blur = commit.clone();

    view! {
        <Show
            when=move || state.is_editing(target)
            fallback=move || {
                view! {
                    <span class=class on:dblclick=move |_| state.start_edit(target)>
                        {move || display.get()}
                    </span>
                }
            }
        >
            <input
                type="text"
                class="inline-edit"
                prop:value=move || state.edit_buffer.get()
                on:input=move |ev| state.edit_buffer.set(event_target_value(&ev))
                on:keydown={
                    let commit = commit.clone();
                    move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit(),
                        "Escape" => state.cancel_edit(),
                        _ => {}
                    }
                }
                on:blur={
                    let commit = commit_on_blur.clone();
                    move |_| commit()
                }
            />
        </Show>
    }
}
