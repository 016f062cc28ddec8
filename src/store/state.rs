//! Shared Store State
//!
//! Every reactive cell lives in one `Copy` bundle of signals so the two
//! stores and the components can all hold it by value (same shape as the
//! sortable crate's `SortSignals`).
//!
//! The list collection is the single source of truth: the sidebar rows and
//! the selected list's detail header are both derived from `lists` plus
//! `current_list_id`, so there is no duplicated summary to patch in sync.

use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{Item, ItemDraft, List, ListDraft};
use crate::store::edit::{EditSession, EditTarget, ItemField};

#[derive(Clone, Copy)]
pub struct StoreState {
    /// The list collection, replaced wholesale on every load
    pub lists: RwSignal<Vec<List>>,
    /// Selected list, if any
    pub current_list_id: RwSignal<Option<Uuid>>,
    /// Items of the selected list. None until a load has succeeded;
    /// readers treat None as empty.
    pub current_items: RwSignal<Option<Vec<Item>>>,
    /// Busy hint for the UI. Advisory only, not a mutex: interleaved
    /// operations leave it at whatever the last finisher wrote.
    pub loading: RwSignal<bool>,
    /// Process-wide error display slot
    pub last_error: RwSignal<Option<String>>,
    /// The single inline-edit slot
    pub edit: RwSignal<Option<EditSession>>,
    /// Text being typed in the active inline edit
    pub edit_buffer: RwSignal<String>,
    /// New-list form state
    pub list_draft: RwSignal<ListDraft>,
    /// New-item form state
    pub item_draft: RwSignal<ItemDraft>,
    /// Bumped when a list load settles (success or failure); the sidebar
    /// resets its drag state shortly afterwards
    pub lists_rebind: RwSignal<u32>,
    /// Bumped when an item reload lands; the item view resets its drag
    /// state shortly afterwards since the row set changed
    pub items_rebind: RwSignal<u32>,
    /// Monotonic selection counter. An in-flight item load captures it and
    /// discards its result if the selection moved on meanwhile.
    pub selection_epoch: RwSignal<u64>,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            lists: RwSignal::new(Vec::new()),
            current_list_id: RwSignal::new(None),
            current_items: RwSignal::new(None),
            loading: RwSignal::new(false),
            last_error: RwSignal::new(None),
            edit: RwSignal::new(None),
            edit_buffer: RwSignal::new(String::new()),
            list_draft: RwSignal::new(ListDraft::default()),
            item_draft: RwSignal::new(ItemDraft::default()),
            lists_rebind: RwSignal::new(0),
            items_rebind: RwSignal::new(0),
            selection_epoch: RwSignal::new(0),
        }
    }

    /// The selected list, resolved from the collection
    pub fn current_list(&self) -> Option<List> {
        let id = self.current_list_id.get()?;
        self.lists.get().into_iter().find(|l| l.id == id)
    }

    /// Items of the selected list; empty before the first successful load
    pub fn visible_items(&self) -> Vec<Item> {
        self.current_items.get().unwrap_or_default()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.last_error.set(Some(message.into()));
    }

    pub fn clear_error(&self) {
        self.last_error.set(None);
    }

    // ========================
    // Edit slot
    // ========================

    /// Begin editing `target`, snapshotting its current value.
    /// Any previous edit is abandoned without warning (last writer wins).
    pub fn start_edit(&self, target: EditTarget) {
        let snapshot = self.field_value(target);
        self.edit_buffer.set(snapshot.clone());
        self.edit.set(Some(EditSession { target, snapshot }));
    }

    /// Abandon the active edit. The entity keeps its pre-edit value and no
    /// network call is made.
    pub fn cancel_edit(&self) {
        self.edit.set(None);
    }

    pub fn is_editing(&self, target: EditTarget) -> bool {
        self.edit
            .get()
            .map(|session| session.target == target)
            .unwrap_or(false)
    }

    /// Current persisted-view value of an editable field
    pub fn field_value(&self, target: EditTarget) -> String {
        match target {
            EditTarget::ListName => self.current_list().map(|l| l.name).unwrap_or_default(),
            EditTarget::ListDescription => self
                .current_list()
                .and_then(|l| l.description)
                .unwrap_or_default(),
            EditTarget::Item { id, field } => self
                .visible_items()
                .into_iter()
                .find(|i| i.id == id)
                .map(|i| match field {
                    ItemField::Name => i.name,
                    ItemField::Description => i.description.unwrap_or_default(),
                })
                .unwrap_or_default(),
        }
    }

    /// Write `value` into the field `target` points at (optimistic apply
    /// before the server acknowledges, or rollback after it refuses)
    pub(crate) fn apply_field(&self, target: EditTarget, value: &str) {
        match target {
            EditTarget::ListName | EditTarget::ListDescription => {
                let Some(id) = self.current_list_id.get_untracked() else {
                    return;
                };
                self.lists.update(|lists| {
                    if let Some(list) = lists.iter_mut().find(|l| l.id == id) {
                        match target {
                            EditTarget::ListName => list.name = value.to_string(),
                            _ => list.description = Some(value.to_string()),
                        }
                    }
                });
            }
            EditTarget::Item { id, field } => {
                self.current_items.update(|items| {
                    let Some(items) = items else { return };
                    if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                        match field {
                            ItemField::Name => item.name = value.to_string(),
                            ItemField::Description => item.description = Some(value.to_string()),
                        }
                    }
                });
            }
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}
