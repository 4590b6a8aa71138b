//! formwizard
//!
//! Multi-step data-collection wizard. The domain lives in `fw-core`, the
//! controller in `fw-app` and the adapters in `fw-infra`; this crate loads
//! configuration, installs tracing and wires them together.

pub mod bootstrap;

pub use fw_app::{WizardController, WizardError};
pub use fw_core::{Draft, DraftField, WizardConfig, WizardState, WizardStep};
