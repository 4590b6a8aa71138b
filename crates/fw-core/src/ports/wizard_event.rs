use crate::wizard::WizardState;

/// Publishes committed wizard state to the renderer.
#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, state: WizardState);
}
