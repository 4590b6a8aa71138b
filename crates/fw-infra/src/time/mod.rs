mod acknowledgement_scheduler;
mod system_clock;

pub use acknowledgement_scheduler::TokioAcknowledgementScheduler;
pub use system_clock::SystemClock;
