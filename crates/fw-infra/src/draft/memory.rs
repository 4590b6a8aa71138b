//! In-memory draft store.
//!
//! Keeps the serialized JSON rather than the `Draft` value so that a `load`
//! after `save` goes through the same encoding as the file repository.

use std::sync::Mutex;

use async_trait::async_trait;
use fw_core::draft::Draft;
use fw_core::ports::{DraftStoreError, DraftStorePort};

use super::{decode_draft, encode_draft};

#[derive(Default)]
pub struct InMemoryDraftStore {
    raw: Mutex<Option<String>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with arbitrary content, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Currently stored JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // Writers replace the whole string, so a poisoned value is still usable.
        self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DraftStorePort for InMemoryDraftStore {
    async fn load(&self) -> Result<Option<Draft>, DraftStoreError> {
        match self.lock().as_deref() {
            Some(content) => decode_draft(content),
            None => Ok(None),
        }
    }

    async fn save(&self, draft: &Draft) -> Result<(), DraftStoreError> {
        let json = encode_draft(draft)?;
        *self.lock() = Some(json);
        Ok(())
    }

    async fn clear(&self) -> Result<(), DraftStoreError> {
        *self.lock() = None;
        Ok(())
    }
}
