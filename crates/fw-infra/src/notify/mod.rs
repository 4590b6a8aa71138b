//! Acknowledgment sinks.

use async_trait::async_trait;
use fw_core::ports::SubmissionNotifierPort;
use fw_core::submission::{SubmissionReceipt, ACKNOWLEDGEMENT_MESSAGE};
use tracing::info;

/// Reports acknowledgments through the log. Used when no renderer sink is
/// wired in.
#[derive(Debug, Default)]
pub struct LoggingSubmissionNotifier;

#[async_trait]
impl SubmissionNotifierPort for LoggingSubmissionNotifier {
    async fn acknowledge(&self, receipt: &SubmissionReceipt) -> anyhow::Result<()> {
        info!(
            submission_id = %receipt.submission_id,
            submitted_at_ms = receipt.submitted_at_ms,
            "{}",
            ACKNOWLEDGEMENT_MESSAGE
        );
        Ok(())
    }
}
