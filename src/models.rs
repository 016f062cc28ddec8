//! Frontend Models
//!
//! Data structures matching the Listified backend, plus the request
//! payloads the stores send to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// List data structure (matches backend; extra response fields like
/// `created_at` are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Display order. Local only: the backend has no order column for
    /// lists, so this is never sent and resets on reload.
    #[serde(default, skip_serializing)]
    pub order: Option<i32>,
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub order: i32,
}

/// New-list form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDraft {
    pub name: String,
    pub description: String,
}

/// New-item form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

/// POST /lists body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewList {
    pub name: String,
    pub description: Option<String>,
}

/// POST /lists/{listId}/items body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
}

/// PATCH /lists/{id} body. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Some(None)` serializes as an explicit null (mark as not completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

/// PATCH /lists/{listId}/items/{id} body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    /// `Some(None)` serializes as an explicit null (mark as not completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
}
