//! List Store
//!
//! Owns the list collection and the current selection. Every mutation is
//! confirmed against the server: creates and deletes re-fetch the whole
//! collection instead of merging locally.

use chrono::Utc;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::StoreError;
use crate::models::{ListDraft, ListPatch, NewList};
use crate::store::edit::EditTarget;
use crate::store::items::load_items;
use crate::store::state::StoreState;

pub(crate) const EMPTY_LIST_NAME: &str = "List name is required";
const LOAD_LISTS_FAILED: &str = "Could not load lists";
const CREATE_LIST_FAILED: &str = "Could not create list";
const TOGGLE_LIST_FAILED: &str = "Could not update list";
const DELETE_LIST_FAILED: &str = "Could not delete list";
const SAVE_LIST_FAILED: &str = "Could not save list changes";

#[derive(Clone)]
pub struct ListStore {
    api: ApiClient,
    state: StoreState,
}

impl ListStore {
    pub(crate) fn new(api: ApiClient, state: StoreState) -> Self {
        Self { api, state }
    }

    pub(crate) fn state(&self) -> StoreState {
        self.state
    }

    /// Fetch the full collection and replace local state wholesale.
    /// On failure the previous collection stays untouched, but the sidebar
    /// drag state is still refreshed (the rows may have re-rendered).
    pub async fn load_all(&self) -> Result<(), StoreError> {
        self.state.loading.set(true);
        let result = self.api.fetch_lists().await;
        self.state.loading.set(false);
        self.state.lists_rebind.update(|v| *v += 1);

        match result {
            Ok(lists) => {
                self.state.lists.set(lists);
                Ok(())
            }
            Err(_) => {
                self.state.set_error(LOAD_LISTS_FAILED);
                Err(StoreError::Request(LOAD_LISTS_FAILED))
            }
        }
    }

    /// Create a list from the draft form, then re-fetch the collection so
    /// local state reflects the server's view (read-after-write).
    pub async fn create(&self) -> Result<(), StoreError> {
        let draft = self.state.list_draft.get_untracked();
        if draft.name.trim().is_empty() {
            self.state.set_error(EMPTY_LIST_NAME);
            return Err(StoreError::Validation(EMPTY_LIST_NAME));
        }

        let body = NewList {
            name: draft.name.trim().to_string(),
            description: if draft.description.trim().is_empty() {
                None
            } else {
                Some(draft.description.clone())
            },
        };

        self.state.loading.set(true);
        let result = self.api.create_list(&body).await;
        self.state.loading.set(false);

        match result {
            Ok(()) => {
                self.state.list_draft.set(ListDraft::default());
                self.load_all().await
            }
            Err(_) => {
                self.state.set_error(CREATE_LIST_FAILED);
                Err(StoreError::Request(CREATE_LIST_FAILED))
            }
        }
    }

    /// Flip `completed_at` between null and now. The collection is
    /// reloaded whether or not the patch succeeded, and the selected
    /// list's items are reloaded too: completing a list changes the
    /// context its item view renders in.
    pub async fn toggle_completion(&self, id: Uuid) -> Result<(), StoreError> {
        let flipped = {
            let lists = self.state.lists.read_untracked();
            let Some(list) = lists.iter().find(|l| l.id == id) else {
                return Ok(());
            };
            match list.completed_at {
                Some(_) => None,
                None => Some(Utc::now()),
            }
        };

        let patch = ListPatch {
            completed_at: Some(flipped),
            ..Default::default()
        };
        let result = self.api.patch_list(id, &patch).await;
        if result.is_err() {
            self.state.set_error(TOGGLE_LIST_FAILED);
        }

        let reload = self.load_all().await;
        if self.state.current_list_id.get_untracked().is_some() {
            let _ = load_items(&self.api, self.state).await;
        }

        match result {
            Ok(()) => reload,
            Err(_) => Err(StoreError::Request(TOGGLE_LIST_FAILED)),
        }
    }

    /// Delete a list (the caller has already confirmed). If it was the
    /// selected list, selection is cleared immediately, before the
    /// collection reload lands.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.state.loading.set(true);
        let result = self.api.delete_list(id).await;
        self.state.loading.set(false);

        match result {
            Ok(()) => {
                if self.state.current_list_id.get_untracked() == Some(id) {
                    self.state.current_list_id.set(None);
                    self.state.current_items.set(None);
                    self.state.edit.set(None);
                    self.state.selection_epoch.update(|e| *e += 1);
                }
                self.load_all().await
            }
            Err(_) => {
                self.state.set_error(DELETE_LIST_FAILED);
                Err(StoreError::Request(DELETE_LIST_FAILED))
            }
        }
    }

    /// Select a list. Selection itself is synchronous; the item load runs
    /// afterwards (the app effect watches `selection_epoch`) and tags
    /// itself with the epoch so a slow response for an old selection is
    /// discarded instead of overwriting the new one.
    pub fn select(&self, id: Uuid) {
        // leaving a list abandons any in-progress item edit
        if matches!(
            self.state.edit.get_untracked(),
            Some(session) if matches!(session.target, EditTarget::Item { .. })
        ) {
            self.state.edit.set(None);
        }
        self.state.current_list_id.set(Some(id));
        self.state.current_items.set(None);
        self.state.selection_epoch.update(|e| *e += 1);
    }

    /// Commit the active list-field edit. Edit mode exits on every path:
    /// success, request failure, and validation rejection.
    pub async fn save_edit(&self) -> Result<(), StoreError> {
        let Some(session) = self.state.edit.get_untracked() else {
            return Ok(());
        };
        if matches!(session.target, EditTarget::Item { .. }) {
            return Ok(());
        }
        let Some(id) = self.state.current_list_id.get_untracked() else {
            self.state.edit.set(None);
            return Ok(());
        };

        let value = self.state.edit_buffer.get_untracked();
        self.state.edit.set(None);

        let patch = match session.target {
            EditTarget::ListName => {
                if value.trim().is_empty() {
                    self.state.set_error(EMPTY_LIST_NAME);
                    return Err(StoreError::Validation(EMPTY_LIST_NAME));
                }
                ListPatch {
                    name: Some(value.clone()),
                    ..Default::default()
                }
            }
            EditTarget::ListDescription => ListPatch {
                description: Some(value.clone()),
                ..Default::default()
            },
            EditTarget::Item { .. } => unreachable!(),
        };

        self.state.apply_field(session.target, &value);
        match self.api.patch_list(id, &patch).await {
            Ok(()) => Ok(()),
            Err(_) => {
                self.state.apply_field(session.target, &session.snapshot);
                self.state.set_error(SAVE_LIST_FAILED);
                Err(StoreError::Request(SAVE_LIST_FAILED))
            }
        }
    }
}
