//! # Dependency wiring
//!
//! The only place that depends on `fw-app` and `fw-infra` at the same time.
//! It assembles adapters into a [`WizardController`] and makes no decisions
//! of its own.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use fw_app::{WizardController, WizardControllerDeps};
use fw_core::config::WizardConfig;
use fw_core::ports::SubmissionNotifierPort;
use fw_infra::{
    FileDraftRepository, LoggingSubmissionNotifier, SystemClock, TokioAcknowledgementScheduler,
    WatchWizardEvents,
};
use tracing::info;

use super::config::resolve_data_dir;

/// A wired controller plus the handles a renderer needs next to it.
pub struct WizardRuntime {
    pub controller: Arc<WizardController>,
    /// Latest committed state; subscribe for change notifications.
    pub events: Arc<WatchWizardEvents>,
    pub draft_path: PathBuf,
}

/// Build the controller from configuration with the given acknowledgment sink.
///
/// The controller is not initialized yet.
pub fn wire_dependencies(
    config: &WizardConfig,
    notifier: Arc<dyn SubmissionNotifierPort>,
) -> anyhow::Result<WizardRuntime> {
    let data_dir = resolve_data_dir(config)?;
    let draft_store = Arc::new(FileDraftRepository::with_defaults(data_dir));
    let draft_path = draft_store.path().to_path_buf();
    let events = Arc::new(WatchWizardEvents::new());

    let controller = WizardController::new(WizardControllerDeps {
        draft_store,
        acknowledgement_scheduler: Arc::new(TokioAcknowledgementScheduler::new(notifier)),
        event_port: events.clone(),
        clock: Arc::new(SystemClock),
        on_corrupt: config.on_corrupt,
    });

    Ok(WizardRuntime {
        controller: Arc::new(controller),
        events,
        draft_path,
    })
}

/// Wire with the logging notifier and initialize the controller.
///
/// Must run inside a tokio runtime.
pub async fn start_wizard(config: &WizardConfig) -> anyhow::Result<WizardRuntime> {
    let runtime = wire_dependencies(config, Arc::new(LoggingSubmissionNotifier))?;
    runtime
        .controller
        .initialize()
        .await
        .with_context(|| format!("Failed to restore draft from {}", runtime.draft_path.display()))?;
    info!(draft_path = %runtime.draft_path.display(), "wizard ready");
    Ok(runtime)
}
