//! Item Store
//!
//! Owns the items of the selected list. Structurally mirrors the list
//! store, with one difference: completion toggles are applied in place
//! after the server acknowledges instead of re-fetching the collection.

use chrono::Utc;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::StoreError;
use crate::models::{ItemDraft, ItemPatch, NewItem};
use crate::store::edit::{EditTarget, ItemField};
use crate::store::state::StoreState;

pub(crate) const EMPTY_ITEM_NAME: &str = "Item name is required";
const LOAD_ITEMS_FAILED: &str = "Could not load items";
const CREATE_ITEM_FAILED: &str = "Could not create item";
const TOGGLE_ITEM_FAILED: &str = "Could not update item";
const DELETE_ITEM_FAILED: &str = "Could not delete item";
const SAVE_ITEM_FAILED: &str = "Could not save item changes";

/// Fetch the selected list's items and replace local state wholesale.
///
/// The load is tagged with the selection epoch captured at entry; if the
/// selection moved on while the request was in flight, the result is
/// discarded so a stale response cannot clobber the newer selection.
pub(crate) async fn load_items(api: &ApiClient, state: StoreState) -> Result<(), StoreError> {
    let Some(list_id) = state.current_list_id.get_untracked() else {
        return Ok(());
    };
    let epoch = state.selection_epoch.get_untracked();

    state.loading.set(true);
    let result = api.fetch_items(list_id).await;
    state.loading.set(false);

    if state.selection_epoch.get_untracked() != epoch {
        return Ok(());
    }
    state.items_rebind.update(|v| *v += 1);

    match result {
        Ok(items) => {
            state.current_items.set(Some(items));
            Ok(())
        }
        Err(_) => {
            state.set_error(LOAD_ITEMS_FAILED);
            Err(StoreError::Request(LOAD_ITEMS_FAILED))
        }
    }
}

#[derive(Clone)]
pub struct ItemStore {
    api: ApiClient,
    state: StoreState,
}

impl ItemStore {
    pub(crate) fn new(api: ApiClient, state: StoreState) -> Self {
        Self { api, state }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    pub(crate) fn state(&self) -> StoreState {
        self.state
    }

    pub async fn load_all(&self) -> Result<(), StoreError> {
        load_items(&self.api, self.state).await
    }

    /// Order value that sorts a new item last: one past the highest
    /// existing order, or 0 for an empty list. No server-side counter
    /// needed.
    pub fn next_order(&self) -> i32 {
        self.state
            .current_items
            .read_untracked()
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|i| i.order)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Create an item in the selected list from the draft form, then
    /// re-fetch the list's items.
    pub async fn create(&self) -> Result<(), StoreError> {
        let Some(list_id) = self.state.current_list_id.get_untracked() else {
            return Ok(());
        };
        let draft = self.state.item_draft.get_untracked();
        if draft.name.trim().is_empty() {
            self.state.set_error(EMPTY_ITEM_NAME);
            return Err(StoreError::Validation(EMPTY_ITEM_NAME));
        }

        let body = NewItem {
            name: draft.name.trim().to_string(),
            description: if draft.description.trim().is_empty() {
                None
            } else {
                Some(draft.description.clone())
            },
            order: self.next_order(),
        };

        self.state.loading.set(true);
        let result = self.api.create_item(list_id, &body).await;
        self.state.loading.set(false);

        match result {
            Ok(()) => {
                self.state.item_draft.set(ItemDraft::default());
                self.load_all().await
            }
            Err(_) => {
                self.state.set_error(CREATE_ITEM_FAILED);
                Err(StoreError::Request(CREATE_ITEM_FAILED))
            }
        }
    }

    /// Flip `completed_at` between null and now. Applied in place once the
    /// server acknowledges; no reload.
    pub async fn toggle_completion(&self, id: Uuid) -> Result<(), StoreError> {
        let Some(list_id) = self.state.current_list_id.get_untracked() else {
            return Ok(());
        };
        let flipped = {
            let items = self.state.current_items.read_untracked();
            let Some(item) = items.as_deref().unwrap_or_default().iter().find(|i| i.id == id)
            else {
                return Ok(());
            };
            match item.completed_at {
                Some(_) => None,
                None => Some(Utc::now()),
            }
        };

        let patch = ItemPatch {
            completed_at: Some(flipped),
            ..Default::default()
        };
        match self.api.patch_item(list_id, id, &patch).await {
            Ok(()) => {
                self.state.current_items.update(|items| {
                    let Some(items) = items else { return };
                    if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                        item.completed_at = flipped;
                    }
                });
                Ok(())
            }
            Err(_) => {
                self.state.set_error(TOGGLE_ITEM_FAILED);
                Err(StoreError::Request(TOGGLE_ITEM_FAILED))
            }
        }
    }

    /// Delete an item (the caller has already confirmed), then re-fetch
    /// the list's items.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let Some(list_id) = self.state.current_list_id.get_untracked() else {
            return Ok(());
        };

        self.state.loading.set(true);
        let result = self.api.delete_item(list_id, id).await;
        self.state.loading.set(false);

        match result {
            Ok(()) => self.load_all().await,
            Err(_) => {
                self.state.set_error(DELETE_ITEM_FAILED);
                Err(StoreError::Request(DELETE_ITEM_FAILED))
            }
        }
    }

    /// Commit the active item-field edit. Edit mode exits on every path:
    /// success, request failure, and validation rejection.
    pub async fn save_edit(&self) -> Result<(), StoreError> {
        let Some(session) = self.state.edit.get_untracked() else {
            return Ok(());
        };
        let EditTarget::Item { id, field } = session.target else {
            return Ok(());
        };
        let Some(list_id) = self.state.current_list_id.get_untracked() else {
            self.state.edit.set(None);
            return Ok(());
        };

        let value = self.state.edit_buffer.get_untracked();
        self.state.edit.set(None);

        let patch = match field {
            ItemField::Name => {
                if value.trim().is_empty() {
                    self.state.set_error(EMPTY_ITEM_NAME);
                    return Err(StoreError::Validation(EMPTY_ITEM_NAME));
                }
                ItemPatch {
                    name: Some(value.clone()),
                    ..Default::default()
                }
            }
            ItemField::Description => ItemPatch {
                description: Some(value.clone()),
                ..Default::default()
            },
        };

        self.state.apply_field(session.target, &value);
        match self.api.patch_item(list_id, id, &patch).await {
            Ok(()) => Ok(()),
            Err(_) => {
                self.state.apply_field(session.target, &session.snapshot);
                self.state.set_error(SAVE_ITEM_FAILED);
                Err(StoreError::Request(SAVE_ITEM_FAILED))
            }
        }
    }
}
