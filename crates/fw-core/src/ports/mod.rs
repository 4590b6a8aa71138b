//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard controller and the
//! infrastructure that stores drafts, schedules acknowledgments and
//! publishes state to the renderer.

mod acknowledgement;
mod clock;
mod draft_store;
mod wizard_event;

pub use acknowledgement::{AcknowledgementSchedulerPort, SubmissionNotifierPort};
pub use clock::ClockPort;
pub use draft_store::{DraftStoreError, DraftStorePort, DRAFT_STORAGE_KEY};
pub use wizard_event::WizardEventPort;
