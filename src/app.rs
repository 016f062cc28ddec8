//! Listified Frontend App
//!
//! Top-level component: sidebar of lists plus the selected list's detail.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::api::FetchTransport;
use crate::components::{ListDetail, Sidebar};
use crate::prefs::Prefs;
use crate::store::AppStore;

/// Backend dev server; the fetch transport resolves paths against it.
const API_BASE: &str = "http://localhost:8000";

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(Rc::new(FetchTransport::new(API_BASE)));
    let prefs = Prefs::load();
    provide_context(store.clone());
    provide_context(prefs);

    // Load the collection on mount
    {
        let store = store.clone();
        Effect::new(move |_| {
            let store = store.clone();
            spawn_local(async move {
                web_sys::console::log_1(&"[APP] loading lists".into());
                let _ = store.lists.load_all().await;
            });
        });
    }

    // Load items whenever the selection moves. The load tags itself with
    // the selection epoch, so a slow response for an old selection is
    // dropped instead of overwriting the new one.
    {
        let store = store.clone();
        Effect::new(move |_| {
            let _ = store.state.selection_epoch.get();
            if store.state.current_list_id.get_untracked().is_none() {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                let _ = store.items.load_all().await;
            });
        });
    }

    let state = store.state;
    view! {
        <div class=move || if prefs.dark.get() { "app-layout dark" } else { "app-layout" }>
            <header class="top-bar">
                <h1>"Listified"</h1>
                <button class="pref-btn" on:click=move |_| prefs.toggle_sidebar()>"☰"</button>
                <button class="pref-btn" on:click=move |_| prefs.toggle_dark()>
                    {move || if prefs.dark.get() { "☀" } else { "☾" }}
                </button>
                <Show when=move || state.loading.get()>
                    <span class="loading-hint">"Working..."</span>
                </Show>
            </header>

            {move || {
                state.last_error.get().map(|message| {
                    view! {
                        <div class="error-banner">
                            <span>{message}</span>
                            <button on:click=move |_| state.clear_error()>"×"</button>
                        </div>
                    }
                })
            }}

            <div class="columns">
                <Sidebar />
                <ListDetail />
            </div>
        </div>
    }
}
