//! Application Store
//!
//! Two cooperating stores (lists, items) over one shared signal bundle,
//! plus the edit session slot and the reorder coordinator.

mod edit;
mod items;
mod lists;
mod reorder;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use edit::{EditSession, EditTarget, ItemField};
pub use items::ItemStore;
pub use lists::ListStore;
pub use state::StoreState;

use leptos::prelude::*;
use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::error::StoreError;

#[derive(Clone)]
pub struct AppStore {
    pub state: StoreState,
    pub lists: ListStore,
    pub items: ItemStore,
}

impl AppStore {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        let api = ApiClient::new(transport);
        let state = StoreState::new();
        Self {
            lists: ListStore::new(api.clone(), state),
            items: ItemStore::new(api, state),
            state,
        }
    }

    /// Commit whichever inline edit is active
    pub async fn commit_edit(&self) -> Result<(), StoreError> {
        match self.state.edit.get_untracked().map(|session| session.target) {
            Some(EditTarget::Item { .. }) => self.items.save_edit().await,
            Some(_) => self.lists.save_edit().await,
            None => Ok(()),
        }
    }
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
