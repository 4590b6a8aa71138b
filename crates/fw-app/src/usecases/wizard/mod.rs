//! Wizard use cases.
//!
//! This module exposes the wizard controller.

mod context;
pub mod controller;

pub use controller::{WizardController, WizardControllerDeps, WizardError};
