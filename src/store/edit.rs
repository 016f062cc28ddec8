//! Edit Session
//!
//! The single inline-edit slot shared by list fields and item fields.
//! Entering edit mode overwrites whatever was in the slot: starting a
//! second edit silently abandons the first. That is a deliberate
//! single-concurrent-edit policy, not an accident.

use uuid::Uuid;

/// Which field of an item an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Description,
}

/// What is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// The selected list's name
    ListName,
    /// The selected list's description
    ListDescription,
    /// One field of one item in the selected list
    Item { id: Uuid, field: ItemField },
}

/// The active edit plus the pre-edit value used for rollback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: EditTarget,
    pub snapshot: String,
}
