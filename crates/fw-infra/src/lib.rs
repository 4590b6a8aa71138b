pub mod draft;
pub mod events;
pub mod notify;
pub mod time;

pub use draft::{FileDraftRepository, InMemoryDraftStore};
pub use events::WatchWizardEvents;
pub use notify::LoggingSubmissionNotifier;
pub use time::{SystemClock, TokioAcknowledgementScheduler};
