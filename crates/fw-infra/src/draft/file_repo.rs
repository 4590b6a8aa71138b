//! File-based draft repository
//!
//! This module provides a file-based implementation of the DraftStorePort,
//! persisting the draft as a single JSON object in the application data
//! directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fw_core::draft::Draft;
use fw_core::ports::{DraftStoreError, DraftStorePort};
use tokio::fs;
use tracing::debug;

use super::{decode_draft, encode_draft};

/// File name derived from the fixed storage key.
pub const DEFAULT_DRAFT_FILE: &str = "formData.json";

pub struct FileDraftRepository {
    draft_file_path: PathBuf,
}

impl FileDraftRepository {
    /// Create repository with custom file path
    pub fn new(draft_file_path: PathBuf) -> Self {
        Self { draft_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            draft_file_path: base_dir.join(DEFAULT_DRAFT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.draft_file_path
    }

    async fn ensure_parent_dir(&self) -> Result<(), DraftStoreError> {
        if let Some(parent) = self.draft_file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                DraftStoreError::Storage(format!(
                    "Failed to create draft dir {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target so a crash
    /// never leaves a half-written draft behind.
    async fn atomic_write(&self, content: &str) -> Result<(), DraftStoreError> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.draft_file_path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            DraftStoreError::Storage(format!(
                "Failed to write temp draft {}: {e}",
                tmp_path.display()
            ))
        })?;

        fs::rename(&tmp_path, &self.draft_file_path)
            .await
            .map_err(|e| {
                DraftStoreError::Storage(format!(
                    "Failed to rename temp draft {} -> {}: {e}",
                    tmp_path.display(),
                    self.draft_file_path.display()
                ))
            })
    }
}

#[async_trait]
impl DraftStorePort for FileDraftRepository {
    async fn load(&self) -> Result<Option<Draft>, DraftStoreError> {
        let content = match fs::read_to_string(&self.draft_file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DraftStoreError::Storage(format!(
                    "Failed to read draft file {}: {e}",
                    self.draft_file_path.display()
                )))
            }
        };

        decode_draft(&content)
    }

    async fn save(&self, draft: &Draft) -> Result<(), DraftStoreError> {
        let json = encode_draft(draft)?;
        self.atomic_write(&json).await?;
        debug!(path = %self.draft_file_path.display(), "draft saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), DraftStoreError> {
        match fs::remove_file(&self.draft_file_path).await {
            Ok(()) => {
                debug!(path = %self.draft_file_path.display(), "draft cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DraftStoreError::Storage(format!(
                "Failed to remove draft file {}: {e}",
                self.draft_file_path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_core::draft::DraftField;
    use fw_core::ports::DRAFT_STORAGE_KEY;
    use tempfile::TempDir;

    fn sample_draft() -> Draft {
        Draft::default()
            .with(DraftField::Name, "Ann")
            .with(DraftField::Email, "a@b.co")
            .with(DraftField::City, "Springfield")
    }

    #[tokio::test]
    async fn load_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::new(temp_dir.path().join("missing.json"));

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_equal_draft() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::new(temp_dir.path().join("draft.json"));

        repo.save(&sample_draft()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(sample_draft()));
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::new(temp_dir.path().join("draft.json"));

        repo.save(&sample_draft()).await.unwrap();
        let updated = sample_draft().with(DraftField::Name, "");
        repo.save(&updated).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(updated));
        assert!(!temp_dir.path().join("draft.json.tmp").exists());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("draft.json");
        let repo = FileDraftRepository::new(path.clone());

        repo.save(&sample_draft()).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn stored_file_is_a_plain_json_object() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::new(temp_dir.path().join("draft.json"));

        repo.save(&sample_draft()).await.unwrap();

        let raw = fs::read_to_string(repo.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_object().map(|o| o.len()), Some(8));
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["address2"], "");
    }

    #[tokio::test]
    async fn clear_removes_the_draft() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::new(temp_dir.path().join("draft.json"));

        repo.save(&sample_draft()).await.unwrap();
        repo.clear().await.unwrap();

        assert!(repo.load().await.unwrap().is_none());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn clear_without_stored_draft_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::new(temp_dir.path().join("draft.json"));

        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn empty_file_counts_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let draft_file = temp_dir.path().join("empty.json");
        fs::write(&draft_file, "").await.unwrap();

        let repo = FileDraftRepository::new(draft_file);

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_json_is_reported_as_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let draft_file = temp_dir.path().join("invalid.json");
        fs::write(&draft_file, "{invalid json").await.unwrap();

        let repo = FileDraftRepository::new(draft_file);
        let result = repo.load().await;

        match result {
            Err(DraftStoreError::Corrupt(reason)) => {
                assert!(reason.contains("Failed to parse"))
            }
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn object_with_wrong_shape_is_reported_as_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let draft_file = temp_dir.path().join("shape.json");
        fs::write(&draft_file, r#"{"name":"Ann"}"#).await.unwrap();

        let repo = FileDraftRepository::new(draft_file);

        assert!(matches!(
            repo.load().await,
            Err(DraftStoreError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn with_defaults_uses_storage_key_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDraftRepository::with_defaults(temp_dir.path().to_path_buf());

        let expected_path = temp_dir.path().join(DEFAULT_DRAFT_FILE);
        assert_eq!(repo.path(), expected_path.as_path());
        assert!(DEFAULT_DRAFT_FILE.starts_with(DRAFT_STORAGE_KEY));
    }
}
