//! Draft persistence port
//!
//! This port defines the contract for persisting the in-progress draft.
//! Implementations are provided by the infrastructure layer (file-based or
//! in-memory storage).

use async_trait::async_trait;
use thiserror::Error;

use crate::draft::Draft;

/// Fixed key the draft is stored under.
pub const DRAFT_STORAGE_KEY: &str = "formData";

#[derive(Debug, Error)]
pub enum DraftStoreError {
    /// A value exists but is not a valid draft.
    #[error("stored draft is corrupt: {0}")]
    Corrupt(String),

    #[error("storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait DraftStorePort: Send + Sync {
    /// Load the stored draft, `None` when nothing has been saved.
    async fn load(&self) -> Result<Option<Draft>, DraftStoreError>;

    /// Overwrite the stored draft.
    async fn save(&self, draft: &Draft) -> Result<(), DraftStoreError>;

    /// Remove the stored draft so that `load` reports `None`.
    async fn clear(&self) -> Result<(), DraftStoreError>;
}
