//! Sidebar Component
//!
//! The list collection: creation form plus one draggable row per list.
//! Row order can be rearranged by drag, but only locally; the backend has
//! no order column for lists.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use leptos_sortable::{
    apply_reorder, bind_global_mouseup, create_sort_signals, end_drag, make_on_mousedown,
    make_on_slot_mouseenter, SortSignals,
};

use crate::components::{DeleteConfirmButton, NewListForm, REBIND_DELAY_MS};
use crate::models::List;
use crate::prefs::Prefs;
use crate::store::use_app_store;

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let state = store.state;
    let prefs = expect_context::<Prefs>();
    let sort = create_sort_signals();

    {
        let store = store.clone();
        bind_global_mouseup(sort, move |dragged, slot| {
            let ids: Vec<String> = state
                .lists
                .get_untracked()
                .iter()
                .map(|l| l.id.to_string())
                .collect();
            let sequence = apply_reorder(&ids, &dragged, slot);
            let ordered: Vec<Uuid> = sequence
                .iter()
                .filter_map(|s| Uuid::parse_str(s).ok())
                .collect();
            store.lists.reorder(&ordered);
        });
    }

    // a settled load re-rendered the rows; reset the gesture once the new
    // rows are in place
    Effect::new(move |_| {
        let _ = state.lists_rebind.get();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REBIND_DELAY_MS).await;
            end_drag(&sort);
        });
    });

    view! {
        <aside class=move || {
            if prefs.sidebar_collapsed.get() { "sidebar collapsed" } else { "sidebar" }
        }>
            <NewListForm />
            <ul class="list-rows">
                {move || {
                    state
                        .lists
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(slot, list)| view! { <ListRow list=list slot_index=slot sort=sort /> })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

/// A single list row: select on click, completion checkbox, inline
/// delete confirmation, draggable by its body.
#[component]
fn ListRow(list: List, slot_index: usize, sort: SortSignals) -> impl IntoView {
    let store = use_app_store();
    let state = store.state;
    let id = list.id;
    let completed = list.completed_at.is_some();
    let name = list.name.clone();

    let on_select = {
        let store = store.clone();
        move |_| {
            // a drop that just finished also fires a click; ignore it
            if sort.drag_just_ended.get_untracked() {
                return;
            }
            store.lists.select(id);
        }
    };
    let on_toggle = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.lists.toggle_completion(id).await;
            });
        }
    };
    let on_delete = {
        let store = store.clone();
        Callback::new(move |_| {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.lists.delete(id).await;
            });
        })
    };

    view! {
        <li
            class=move || {
                match (state.current_list_id.get() == Some(id), completed) {
                    (true, true) => "list-row selected completed",
                    (true, false) => "list-row selected",
                    (false, true) => "list-row completed",
                    (false, false) => "list-row",
                }
            }
            on:mousedown=make_on_mousedown(sort, id.to_string())
            on:mouseenter=make_on_slot_mouseenter(sort, slot_index)
            on:click=on_select
        >
            <input type="checkbox" checked=completed on:change=on_toggle />
            <span class="list-name">{name}</span>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </li>
    }
}
