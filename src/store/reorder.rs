//! Reorder Coordinator
//!
//! Turns the final row sequence produced by a drag gesture into
//! order-index updates. Item updates are persisted as a concurrent batch
//! of per-item patches; list order is local-only because the backend has
//! no order column for lists (known half-finished feature, left as-is).

use futures::future::join_all;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::StoreError;
use crate::models::ItemPatch;
use crate::store::items::ItemStore;
use crate::store::lists::ListStore;

/// Updates needed to realize `ids` as the new sequence: `(id, new_order)`
/// for every entry whose position changed. Ids missing from the current
/// set (deleted mid-gesture) are skipped.
pub(crate) fn order_changes(current: &[(Uuid, i32)], ids: &[Uuid]) -> Vec<(Uuid, i32)> {
    ids.iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let new_order = index as i32;
            match current.iter().find(|(cur_id, _)| cur_id == id) {
                Some((_, old)) if *old == new_order => None,
                Some(_) => Some((*id, new_order)),
                None => None,
            }
        })
        .collect()
}

impl ListStore {
    /// Reassign list order from the dropped row sequence. Local state
    /// only; a reload resets it.
    pub fn reorder(&self, ids: &[Uuid]) {
        self.state().lists.update(|lists| {
            for (index, id) in ids.iter().enumerate() {
                if let Some(list) = lists.iter_mut().find(|l| l.id == *id) {
                    list.order = Some(index as i32);
                }
            }
            lists.sort_by_key(|l| l.order.unwrap_or(i32::MAX));
        });
    }
}

impl ItemStore {
    /// Persist the dropped row sequence. New orders are applied locally
    /// first, then every changed entry is patched concurrently. A failed
    /// subset is retried once; if anything still fails, the whole item
    /// collection is re-fetched so local state converges on server truth.
    pub async fn reorder(&self, ids: &[Uuid]) -> Result<(), StoreError> {
        let Some(list_id) = self.state().current_list_id.get_untracked() else {
            return Ok(());
        };
        let current: Vec<(Uuid, i32)> = self
            .state()
            .visible_items()
            .iter()
            .map(|i| (i.id, i.order))
            .collect();
        let changes = order_changes(&current, ids);
        if changes.is_empty() {
            return Ok(());
        }

        self.state().current_items.update(|items| {
            let Some(items) = items else { return };
            for (id, order) in &changes {
                if let Some(item) = items.iter_mut().find(|i| i.id == *id) {
                    item.order = *order;
                }
            }
            items.sort_by_key(|i| i.order);
        });

        self.state().loading.set(true);
        let mut failed = push_orders(self.api(), list_id, &changes).await;
        if !failed.is_empty() {
            failed = push_orders(self.api(), list_id, &failed).await;
        }
        self.state().loading.set(false);

        if failed.is_empty() {
            return Ok(());
        }

        let error = StoreError::PartialBatch {
            failed: failed.len(),
            total: changes.len(),
        };
        self.state().set_error(error.to_string());
        let _ = self.load_all().await;
        Err(error)
    }
}

/// Patch every `(id, order)` pair concurrently; returns the pairs whose
/// patch failed. Success is all-or-nothing: one failure fails the batch.
async fn push_orders(
    api: &ApiClient,
    list_id: Uuid,
    changes: &[(Uuid, i32)],
) -> Vec<(Uuid, i32)> {
    let results = join_all(changes.iter().map(|(id, order)| async move {
        let patch = ItemPatch {
            order: Some(*order),
            ..Default::default()
        };
        api.patch_item(list_id, *id, &patch).await.map_err(|_| (*id, *order))
    }))
    .await;
    results.into_iter().filter_map(Result::err).collect()
}
