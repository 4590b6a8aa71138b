//! # fw-core
//!
//! Core domain models and wizard logic for formwizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod draft;
pub mod ids;
pub mod ports;
pub mod submission;
pub mod validation;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::{CorruptDraftPolicy, WizardConfig};
pub use draft::{Draft, DraftField, UnknownFieldError};
pub use ids::SubmissionId;
pub use submission::{SubmissionReceipt, ACKNOWLEDGEMENT_DELAY, ACKNOWLEDGEMENT_MESSAGE};
pub use validation::{validate, FieldIssue, IssueReason, ValidationErrors};
pub use wizard::{WizardState, WizardStep};
