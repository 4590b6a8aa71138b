use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use fw_core::ids::SubmissionId;
use fw_core::ports::{AcknowledgementSchedulerPort, SubmissionNotifierPort};
use fw_core::submission::SubmissionReceipt;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

/// Fires one acknowledgment per scheduled submission on the tokio runtime.
///
/// A pending entry is removed before the notifier runs, so a submission is
/// acknowledged at most once and a late `cancel` reports `false`.
pub struct TokioAcknowledgementScheduler {
    notifier: Arc<dyn SubmissionNotifierPort>,
    pending: Arc<Mutex<HashMap<SubmissionId, tokio::task::AbortHandle>>>,
}

impl TokioAcknowledgementScheduler {
    pub fn new(notifier: Arc<dyn SubmissionNotifierPort>) -> Self {
        Self {
            notifier,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[async_trait::async_trait]
impl AcknowledgementSchedulerPort for TokioAcknowledgementScheduler {
    async fn schedule(&self, receipt: SubmissionReceipt, delay: Duration) -> anyhow::Result<()> {
        let pending = Arc::clone(&self.pending);
        let notifier = Arc::clone(&self.notifier);
        let submission_id = receipt.submission_id.clone();
        // Measured from now, not from when the task first gets polled.
        let deadline = Instant::now() + delay;

        let mut pending_guard = self.pending.lock().await;
        if let Some(existing) = pending_guard.remove(&submission_id) {
            existing.abort();
        }

        let task_submission_id = submission_id.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            if pending.lock().await.remove(&task_submission_id).is_none() {
                return;
            }
            match notifier.acknowledge(&receipt).await {
                Ok(()) => debug!(submission_id = %task_submission_id, "acknowledgement delivered"),
                Err(err) => warn!(
                    submission_id = %task_submission_id,
                    error = %err,
                    "acknowledgement delivery failed"
                ),
            }
        });

        pending_guard.insert(submission_id.clone(), handle.abort_handle());
        debug!(submission_id = %submission_id, delay_ms = delay.as_millis() as u64, "acknowledgement scheduled");
        Ok(())
    }

    async fn cancel(&self, submission_id: &SubmissionId) -> anyhow::Result<bool> {
        let mut pending_guard = self.pending.lock().await;
        match pending_guard.remove(submission_id) {
            Some(handle) => {
                handle.abort();
                debug!(submission_id = %submission_id, "acknowledgement cancelled");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
