pub mod wizard;

pub use wizard::{WizardController, WizardControllerDeps, WizardError};
