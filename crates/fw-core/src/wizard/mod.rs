//! Wizard domain module.
//!
//! This module defines the step model, the wizard state and the pure state
//! machine that drives it.

pub mod state;
pub mod state_machine;
pub mod step;

pub use state::WizardState;
pub use state_machine::{TransitionRejected, WizardAction, WizardEvent, WizardStateMachine};
pub use step::{InvalidStepError, WizardStep};
