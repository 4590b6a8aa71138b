use std::sync::Arc;

use fw_core::wizard::WizardState;
use tokio::sync::Mutex;

/// Shared wizard context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole controller operation so operations
///   never interleave.
/// - `state`: `None` until the controller has been initialized.
#[derive(Clone, Default)]
pub struct WizardContext {
    state: Arc<Mutex<Option<WizardState>>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Snapshot of the committed state. Does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> Option<WizardState> {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Commit a new state. Only call while holding `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        let mut guard = self.state.lock().await;
        *guard = Some(state);
    }
}
