//! formwizard application orchestration layer
//!
//! This crate contains the wizard controller and the context it shares with
//! its callers.

pub mod usecases;

pub use usecases::wizard::{WizardController, WizardControllerDeps, WizardError};
