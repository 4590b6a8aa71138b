//! Wizard state machine.
//!
//! Defines a pure state transition function for the data-collection wizard.
//! Side effects (persisting, clearing, scheduling the acknowledgment) are
//! returned as [`WizardAction`]s and executed by the caller.

use serde::{Deserialize, Serialize};

use crate::draft::DraftField;
use crate::validation::{validate, ValidationErrors};
use crate::wizard::{WizardState, WizardStep};

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// User edited one input.
    SetField { field: DraftField, value: String },
    /// Validate the current step and move forward.
    Next,
    /// Move one step back without validating.
    Back,
    /// Tab jump to an already unlocked step.
    GoToStep { target: WizardStep },
    /// Confirm the reviewed draft.
    Submit,
}

impl WizardEvent {
    /// Short name for logs. Field values are not included.
    pub fn kind(&self) -> &'static str {
        match self {
            WizardEvent::SetField { .. } => "set_field",
            WizardEvent::Next => "next",
            WizardEvent::Back => "back",
            WizardEvent::GoToStep { .. } => "go_to_step",
            WizardEvent::Submit => "submit",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Overwrite the durable draft with the full in-memory draft.
    PersistDraft,
    /// Remove the durable draft.
    ClearPersistedDraft,
    /// Schedule the deferred success acknowledgment.
    ScheduleAcknowledgement,
}

/// Events refused by the state machine. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionRejected {
    #[error("step {target} is locked while on step {current}")]
    StepLocked {
        target: WizardStep,
        current: WizardStep,
    },
    #[error("submit is only allowed on the review step, current step is {current}")]
    NotOnReviewStep { current: WizardStep },
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        mut state: WizardState,
        event: WizardEvent,
    ) -> Result<(WizardState, Vec<WizardAction>), TransitionRejected> {
        match event {
            WizardEvent::SetField { field, value } => {
                state.draft.set(field, value);
                Ok((state, vec![WizardAction::PersistDraft]))
            }
            WizardEvent::Next => {
                let errors = validate(state.step, &state.draft);
                if errors.is_empty() {
                    if let Some(next) = state.step.next() {
                        state.step = next;
                    }
                    state.errors = ValidationErrors::new();
                } else {
                    state.errors = errors;
                }
                Ok((state, Vec::new()))
            }
            WizardEvent::Back => {
                if let Some(previous) = state.step.previous() {
                    state.step = previous;
                }
                Ok((state, Vec::new()))
            }
            WizardEvent::GoToStep { target } => {
                if target > state.step {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%target, current = %state.step, "tab jump to locked step refused");
                    return Err(TransitionRejected::StepLocked {
                        target,
                        current: state.step,
                    });
                }
                state.step = target;
                Ok((state, Vec::new()))
            }
            WizardEvent::Submit => {
                if state.step != WizardStep::LAST {
                    return Err(TransitionRejected::NotOnReviewStep {
                        current: state.step,
                    });
                }
                let errors = validate(state.step, &state.draft);
                if !errors.is_empty() {
                    state.errors = errors;
                    return Ok((state, Vec::new()));
                }
                state.errors = ValidationErrors::new();
                state.submitted = true;
                Ok((
                    state,
                    vec![
                        WizardAction::ClearPersistedDraft,
                        WizardAction::ScheduleAcknowledgement,
                    ],
                ))
            }
        }
    }
}
