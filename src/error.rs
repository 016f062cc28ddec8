//! Store Error Taxonomy
//!
//! Every operation failure ends up as a message in the store's single
//! error display slot; none of these are fatal to the UI.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Client-side rejection; no network call was made.
    #[error("{0}")]
    Validation(&'static str),
    /// Non-2xx response or network failure, reported with a fixed
    /// per-operation message rather than server-provided detail.
    #[error("{0}")]
    Request(&'static str),
    /// One or more updates in a reorder batch failed, even after retry.
    #[error("{failed} of {total} order updates failed, reloading items")]
    PartialBatch { failed: usize, total: usize },
}
