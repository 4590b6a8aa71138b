//! Renderer subscription over a `tokio::sync::watch` channel.

use async_trait::async_trait;
use fw_core::ports::WizardEventPort;
use fw_core::wizard::WizardState;
use tokio::sync::watch;

/// Keeps the latest committed wizard state for any number of subscribers.
///
/// Holds `None` until the controller has been initialized.
pub struct WatchWizardEvents {
    sender: watch::Sender<Option<WizardState>>,
}

impl WatchWizardEvents {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<WizardState>> {
        self.sender.subscribe()
    }

    pub fn latest(&self) -> Option<WizardState> {
        self.sender.borrow().clone()
    }
}

impl Default for WatchWizardEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WizardEventPort for WatchWizardEvents {
    async fn emit_wizard_state_changed(&self, state: WizardState) {
        // send_replace keeps the value even when nobody is subscribed yet.
        self.sender.send_replace(Some(state));
    }
}
