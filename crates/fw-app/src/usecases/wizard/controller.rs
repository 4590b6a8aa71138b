//! Wizard controller.
//!
//! This module coordinates the wizard state machine and its side effects:
//! draft persistence, draft clearing and the deferred acknowledgment.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use fw_core::{
    config::CorruptDraftPolicy,
    draft::{Draft, DraftField, UnknownFieldError},
    ids::SubmissionId,
    ports::{
        AcknowledgementSchedulerPort, ClockPort, DraftStoreError, DraftStorePort, WizardEventPort,
    },
    submission::{SubmissionReceipt, ACKNOWLEDGEMENT_DELAY},
    wizard::{
        InvalidStepError, TransitionRejected, WizardAction, WizardEvent, WizardState,
        WizardStateMachine, WizardStep,
    },
};

use crate::usecases::wizard::context::WizardContext;

/// Errors produced by the wizard controller.
///
/// Validation failures are not errors: they are reported through
/// [`WizardState::errors`].
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("wizard has not been initialized")]
    NotInitialized,
    #[error("wizard is already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    #[error(transparent)]
    InvalidStep(#[from] InvalidStepError),
    #[error(transparent)]
    Rejected(#[from] TransitionRejected),
    #[error("draft store failed: {0}")]
    DraftStore(#[from] DraftStoreError),
    #[error("acknowledgement scheduling failed: {0}")]
    Scheduler(#[source] anyhow::Error),
}

/// Ports the controller depends on.
pub struct WizardControllerDeps {
    pub draft_store: Arc<dyn DraftStorePort>,
    pub acknowledgement_scheduler: Arc<dyn AcknowledgementSchedulerPort>,
    pub event_port: Arc<dyn WizardEventPort>,
    pub clock: Arc<dyn ClockPort>,
    pub on_corrupt: CorruptDraftPolicy,
}

/// Outcome of one committed dispatch.
struct Dispatched {
    previous_step: WizardStep,
    state: WizardState,
    receipt: Option<SubmissionReceipt>,
}

/// Controller that drives wizard state and side effects.
pub struct WizardController {
    context: Arc<WizardContext>,
    draft_store: Arc<dyn DraftStorePort>,
    acknowledgement_scheduler: Arc<dyn AcknowledgementSchedulerPort>,
    event_port: Arc<dyn WizardEventPort>,
    clock: Arc<dyn ClockPort>,
    on_corrupt: CorruptDraftPolicy,
}

impl WizardController {
    pub fn new(deps: WizardControllerDeps) -> Self {
        Self {
            context: WizardContext::new().arc(),
            draft_store: deps.draft_store,
            acknowledgement_scheduler: deps.acknowledgement_scheduler,
            event_port: deps.event_port,
            clock: deps.clock,
            on_corrupt: deps.on_corrupt,
        }
    }

    /// Restore the persisted draft (or start empty) and enter step 1.
    ///
    /// Must be called exactly once, before any other operation.
    pub async fn initialize(&self) -> Result<WizardState, WizardError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        async {
            if self.context.get_state().await.is_some() {
                return Err(WizardError::AlreadyInitialized);
            }

            let draft = self.load_draft().await?;
            let state = WizardState::new(draft);
            info!(restored = !state.draft.is_empty(), "wizard initialized");

            self.context.set_state(state.clone()).await;
            self.event_port.emit_wizard_state_changed(state.clone()).await;
            Ok(state)
        }
        .instrument(info_span!("usecase.wizard.initialize"))
        .await
    }

    /// Replace one field of the draft and persist the full draft.
    pub async fn set_field(
        &self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::SetField {
            field,
            value: value.into(),
        })
        .await?;
        Ok(())
    }

    /// [`set_field`](Self::set_field) addressed by the renderer's string key.
    pub async fn set_field_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        let field = name.parse::<DraftField>()?;
        self.set_field(field, value).await
    }

    /// Validate the current step and advance on success.
    ///
    /// Returns whether the step changed.
    pub async fn next(&self) -> Result<bool, WizardError> {
        let dispatched = self.dispatch(WizardEvent::Next).await?;
        Ok(dispatched.state.step != dispatched.previous_step)
    }

    /// Go one step back without validating. Errors are left as they are.
    ///
    /// Returns whether the step changed.
    pub async fn back(&self) -> Result<bool, WizardError> {
        let dispatched = self.dispatch(WizardEvent::Back).await?;
        Ok(dispatched.state.step != dispatched.previous_step)
    }

    /// Tab jump to step `target` (1-based). Only the current step and the
    /// ones before it are reachable.
    pub async fn go_to_step(&self, target: u8) -> Result<WizardStep, WizardError> {
        let target = WizardStep::try_from(target)?;
        let dispatched = self.dispatch(WizardEvent::GoToStep { target }).await?;
        Ok(dispatched.state.step)
    }

    /// Submit the reviewed draft.
    ///
    /// Returns the receipt on success, `None` when validation failed.
    pub async fn submit(&self) -> Result<Option<SubmissionReceipt>, WizardError> {
        let dispatched = self.dispatch(WizardEvent::Submit).await?;
        Ok(dispatched.receipt)
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> Result<WizardState, WizardError> {
        self.context
            .get_state()
            .await
            .ok_or(WizardError::NotInitialized)
    }

    /// Cancel a pending acknowledgment. Returns whether one was pending.
    pub async fn cancel_acknowledgement(
        &self,
        submission_id: &SubmissionId,
    ) -> Result<bool, WizardError> {
        self.acknowledgement_scheduler
            .cancel(submission_id)
            .await
            .map_err(WizardError::Scheduler)
    }

    async fn load_draft(&self) -> Result<Draft, WizardError> {
        match self.draft_store.load().await {
            Ok(Some(draft)) => Ok(draft),
            Ok(None) => Ok(Draft::default()),
            Err(DraftStoreError::Corrupt(reason)) => match self.on_corrupt {
                CorruptDraftPolicy::Discard => {
                    warn!(%reason, "discarding corrupt stored draft");
                    self.draft_store.clear().await?;
                    Ok(Draft::default())
                }
                CorruptDraftPolicy::Fail => Err(DraftStoreError::Corrupt(reason).into()),
            },
            Err(err) => Err(err.into()),
        }
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<Dispatched, WizardError> {
        // Held for the whole operation so that transition, side effects and
        // commit run without interleaving.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.wizard.dispatch", event = event.kind());
        async {
            let current = self
                .context
                .get_state()
                .await
                .ok_or(WizardError::NotInitialized)?;
            let previous_step = current.step;
            let event_name = event.kind();

            let (next, actions) = WizardStateMachine::transition(current, event).map_err(|err| {
                debug!(error = %err, "wizard transition rejected");
                err
            })?;
            info!(
                from = %previous_step,
                to = %next.step,
                event = event_name,
                errors = next.errors.len(),
                "wizard state transition"
            );

            // Nothing is committed unless every action succeeded.
            let receipt = self.execute_actions(&next, actions).await?;
            self.context.set_state(next.clone()).await;
            self.event_port.emit_wizard_state_changed(next.clone()).await;

            Ok(Dispatched {
                previous_step,
                state: next,
                receipt,
            })
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        state: &WizardState,
        actions: Vec<WizardAction>,
    ) -> Result<Option<SubmissionReceipt>, WizardError> {
        let mut receipt = None;
        let mut draft_cleared = false;
        for action in actions {
            debug!(?action, "wizard executing action");
            let clears_draft = action == WizardAction::ClearPersistedDraft;
            match self.execute_action(state, action).await {
                Ok(Some(submitted)) => receipt = Some(submitted),
                Ok(None) => {}
                Err(err) => {
                    // The uncommitted state still owns the draft.
                    if draft_cleared {
                        self.restore_draft(&state.draft).await;
                    }
                    return Err(err);
                }
            }
            draft_cleared |= clears_draft;
        }
        Ok(receipt)
    }

    async fn execute_action(
        &self,
        state: &WizardState,
        action: WizardAction,
    ) -> Result<Option<SubmissionReceipt>, WizardError> {
        match action {
            WizardAction::PersistDraft => {
                self.draft_store.save(&state.draft).await?;
                Ok(None)
            }
            WizardAction::ClearPersistedDraft => {
                self.draft_store.clear().await?;
                Ok(None)
            }
            WizardAction::ScheduleAcknowledgement => {
                let submitted = SubmissionReceipt {
                    submission_id: SubmissionId::new(),
                    submitted_at_ms: self.clock.now_ms(),
                    draft: state.draft.clone(),
                };
                self.acknowledgement_scheduler
                    .schedule(submitted.clone(), ACKNOWLEDGEMENT_DELAY)
                    .await
                    .map_err(WizardError::Scheduler)?;
                info!(submission_id = %submitted.submission_id, "wizard submission accepted");
                Ok(Some(submitted))
            }
        }
    }

    async fn restore_draft(&self, draft: &Draft) {
        match self.draft_store.save(draft).await {
            Ok(()) => warn!("submission rolled back, stored draft restored"),
            Err(err) => warn!(error = %err, "submission rolled back, failed to restore stored draft"),
        }
    }
}
