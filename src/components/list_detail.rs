//! List Detail Component
//!
//! The selected list: inline-editable header, the new-item form, and the
//! draggable item rows. Item drops are persisted through the store's
//! reorder batch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use leptos_sortable::{apply_reorder, bind_global_mouseup, create_sort_signals, end_drag};

use crate::components::{InlineEdit, ItemRow, NewItemForm, REBIND_DELAY_MS};
use crate::store::{use_app_store, EditTarget};

#[component]
pub fn ListDetail() -> impl IntoView {
    let store = use_app_store();
    let state = store.state;
    let sort = create_sort_signals();

    {
        let store = store.clone();
        bind_global_mouseup(sort, move |dragged, slot| {
            let ids: Vec<String> = state
                .current_items
                .get_untracked()
                .unwrap_or_default()
                .iter()
                .map(|i| i.id.to_string())
                .collect();
            let sequence = apply_reorder(&ids, &dragged, slot);
            let ordered: Vec<Uuid> = sequence
                .iter()
                .filter_map(|s| Uuid::parse_str(s).ok())
                .collect();
            let store = store.clone();
            spawn_local(async move {
                let _ = store.items.reorder(&ordered).await;
            });
        });
    }

    // an item reload re-rendered the rows; reset the gesture once the new
    // rows are in place
    Effect::new(move |_| {
        let _ = state.items_rebind.get();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REBIND_DELAY_MS).await;
            end_drag(&sort);
        });
    });

    view! {
        <section class="list-detail">
            <Show
                when=move || state.current_list_id.get().is_some()
                fallback=|| view! { <p class="empty-hint">"Select a list"</p> }
            >
                <div class="detail-header">
                    <InlineEdit
                        target=EditTarget::ListName
                        display=Signal::derive(move || state.field_value(EditTarget::ListName))
                        class="detail-title"
                    />
                    <InlineEdit
                        target=EditTarget::ListDescription
                        display=Signal::derive(move || {
                            let description = state.field_value(EditTarget::ListDescription);
                            if description.is_empty() {
                                "Add a description...".to_string()
                            } else {
                                description
                            }
                        })
                        class="detail-description"
                    />
                </div>
                <NewItemForm />
                <ul class="item-rows">
                    {move || {
                        state
                            .visible_items()
                            .into_iter()
                            .enumerate()
                            .map(|(slot, item)| view! { <ItemRow item=item slot_index=slot sort=sort /> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
