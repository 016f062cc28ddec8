//! List Endpoints

use uuid::Uuid;

use super::{ApiClient, Method, TransportError};
use crate::models::{List, ListPatch, NewList};

impl ApiClient {
    pub async fn fetch_lists(&self) -> Result<Vec<List>, TransportError> {
        self.get("/lists").await
    }

    pub async fn create_list(&self, body: &NewList) -> Result<(), TransportError> {
        self.send(Method::Post, "/lists", body).await
    }

    pub async fn patch_list(&self, id: Uuid, patch: &ListPatch) -> Result<(), TransportError> {
        self.send(Method::Patch, &format!("/lists/{id}"), patch).await
    }

    pub async fn delete_list(&self, id: Uuid) -> Result<(), TransportError> {
        self.delete(&format!("/lists/{id}")).await
    }
}
