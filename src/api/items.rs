//! Item Endpoints
//!
//! All item routes are scoped under their parent list.

use uuid::Uuid;

use super::{ApiClient, Method, TransportError};
use crate::models::{Item, ItemPatch, NewItem};

impl ApiClient {
    pub async fn fetch_items(&self, list_id: Uuid) -> Result<Vec<Item>, TransportError> {
        self.get(&format!("/lists/{list_id}/items")).await
    }

    pub async fn create_item(&self, list_id: Uuid, body: &NewItem) -> Result<(), TransportError> {
        self.send(Method::Post, &format!("/lists/{list_id}/items"), body)
            .await
    }

    pub async fn patch_item(
        &self,
        list_id: Uuid,
        id: Uuid,
        patch: &ItemPatch,
    ) -> Result<(), TransportError> {
        self.send(Method::Patch, &format!("/lists/{list_id}/items/{id}"), patch)
            .await
    }

    pub async fn delete_item(&self, list_id: Uuid, id: Uuid) -> Result<(), TransportError> {
        self.delete(&format!("/lists/{list_id}/items/{id}")).await
    }
}
