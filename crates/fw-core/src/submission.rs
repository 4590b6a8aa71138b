//! Submission receipt handed to the acknowledgment path.

use serde::{Deserialize, Serialize};

use crate::draft::Draft;
use crate::ids::SubmissionId;

/// Fixed delay between a successful submit and its acknowledgment.
pub const ACKNOWLEDGEMENT_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

/// Message shown once a submission has been acknowledged.
pub const ACKNOWLEDGEMENT_MESSAGE: &str = "Form submitted successfully!";

/// Record of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub submitted_at_ms: i64,
    /// Draft exactly as it was submitted.
    pub draft: Draft,
}
