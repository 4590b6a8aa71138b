mod file_repo;
mod memory;

pub use file_repo::{FileDraftRepository, DEFAULT_DRAFT_FILE};
pub use memory::InMemoryDraftStore;

use fw_core::draft::Draft;
use fw_core::ports::DraftStoreError;

/// Parse a stored draft. Blank content counts as nothing stored.
fn decode_draft(content: &str) -> Result<Option<Draft>, DraftStoreError> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(content)
        .map(Some)
        .map_err(|e| DraftStoreError::Corrupt(format!("Failed to parse stored draft: {e}")))
}

fn encode_draft(draft: &Draft) -> Result<String, DraftStoreError> {
    serde_json::to_string(draft)
        .map_err(|e| DraftStoreError::Storage(format!("Failed to serialize draft: {e}")))
}
