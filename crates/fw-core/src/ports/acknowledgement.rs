use std::time::Duration;

use async_trait::async_trait;

use crate::ids::SubmissionId;
use crate::submission::SubmissionReceipt;

/// Presentation-side sink for the success acknowledgment.
#[async_trait]
pub trait SubmissionNotifierPort: Send + Sync {
    async fn acknowledge(&self, receipt: &SubmissionReceipt) -> anyhow::Result<()>;
}

/// Schedules the deferred acknowledgment of a submission.
///
/// Contract: each scheduled receipt is acknowledged at most once, after
/// `delay`, unless cancelled first.
#[async_trait]
pub trait AcknowledgementSchedulerPort: Send + Sync {
    async fn schedule(&self, receipt: SubmissionReceipt, delay: Duration) -> anyhow::Result<()>;

    /// Cancel a pending acknowledgment. Returns whether one was pending.
    async fn cancel(&self, submission_id: &SubmissionId) -> anyhow::Result<bool>;
}
