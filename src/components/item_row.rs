//! Item Row Component
//!
//! One item of the selected list: completion checkbox, inline-editable
//! name and description, inline delete confirmation, draggable row body.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_sortable::{make_on_mousedown, make_on_slot_mouseenter, SortSignals};

use crate::components::{DeleteConfirmButton, InlineEdit};
use crate::models::Item;
use crate::store::{use_app_store, EditTarget, ItemField};

#[component]
pub fn ItemRow(item: Item, slot_index: usize, sort: SortSignals) -> impl IntoView {
    let store = use_app_store();
    let state = store.state;
    let id = item.id;
    let completed = item.completed_at.is_some();

    let name_target = EditTarget::Item {
        id,
        field: ItemField::Name,
    };
    let description_target = EditTarget::Item {
        id,
        field: ItemField::Description,
    };

    let on_toggle = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.items.toggle_completion(id).await;
            });
        }
    };
    let on_delete = {
        let store = store.clone();
        Callback::new(move |_| {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.items.delete(id).await;
            });
        })
    };

    view! {
        <li
            class=move || if completed { "item-row completed" } else { "item-row" }
            on:mousedown=make_on_mousedown(sort, id.to_string())
            on:mouseenter=make_on_slot_mouseenter(sort, slot_index)
        >
            <input type="checkbox" checked=completed on:change=on_toggle />
            <div class="item-fields">
                <InlineEdit
                    target=name_target
                    display=Signal::derive(move || state.field_value(name_target))
                    class="item-name"
                />
                <InlineEdit
                    target=description_target
                    display=Signal::derive(move || {
                        let description = state.field_value(description_target);
                        if description.is_empty() {
                            "Add a description...".to_string()
                        } else {
                            description
                        }
                    })
                    class="item-description"
                />
            </div>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </li>
    }
}
