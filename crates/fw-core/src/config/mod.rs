//! # Configuration DTO
//!
//! Plain data mapped from the TOML configuration file. Paths are carried as
//! given; resolving an empty `data_dir` to a platform directory is the job
//! of the bootstrap layer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What `initialize` does when the stored draft cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptDraftPolicy {
    /// Log, clear the stored value and start with an empty draft.
    #[default]
    Discard,
    /// Return the store error to the caller.
    Fail,
}

impl CorruptDraftPolicy {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "discard" => Ok(Self::Discard),
            "fail" => Ok(Self::Fail),
            other => Err(anyhow::anyhow!(
                "unknown draft.on_corrupt value: {other} (expected \"discard\" or \"fail\")"
            )),
        }
    }
}

/// Wizard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Directory holding the persisted draft (may be empty).
    pub data_dir: PathBuf,
    pub on_corrupt: CorruptDraftPolicy,
}

impl WizardConfig {
    /// Create WizardConfig from a parsed TOML document.
    ///
    /// Missing keys map to empty or default values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let data_dir = PathBuf::from(
            toml_value
                .get("storage")
                .and_then(|s| s.get("data_dir"))
                .and_then(|v| v.as_str())
                .unwrap_or(""),
        );
        let on_corrupt = match toml_value
            .get("draft")
            .and_then(|d| d.get("on_corrupt"))
            .and_then(|v| v.as_str())
        {
            Some(value) => CorruptDraftPolicy::parse(value)?,
            None => CorruptDraftPolicy::default(),
        };

        Ok(Self {
            data_dir,
            on_corrupt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_all_keys() {
        let value: toml::Value = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/wizard"

            [draft]
            on_corrupt = "fail"
        "#,
        )
        .unwrap();

        let config = WizardConfig::from_toml(&value).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/wizard"));
        assert_eq!(config.on_corrupt, CorruptDraftPolicy::Fail);
    }

    #[test]
    fn missing_sections_map_to_empty_values() {
        let value: toml::Value = toml::from_str("").unwrap();
        let config = WizardConfig::from_toml(&value).unwrap();

        assert_eq!(config, WizardConfig::default());
        assert_eq!(config.data_dir, PathBuf::new());
        assert_eq!(config.on_corrupt, CorruptDraftPolicy::Discard);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let value: toml::Value = toml::from_str(
            r#"
            [draft]
            on_corrupt = "ignore"
        "#,
        )
        .unwrap();

        let err = WizardConfig::from_toml(&value).unwrap_err();
        assert!(err.to_string().contains("on_corrupt"));
    }
}
