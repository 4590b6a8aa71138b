use serde::{Deserialize, Serialize};

use crate::draft::{Draft, DraftField};
use crate::validation::ValidationErrors;
use crate::wizard::WizardStep;

/// Complete wizard state observed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: Draft,
    /// Errors of the most recently validated step.
    pub errors: ValidationErrors,
    /// Monotonic: once true it is never reset.
    pub submitted: bool,
}

impl WizardState {
    /// Fresh session state on the first step.
    pub fn new(draft: Draft) -> Self {
        Self {
            step: WizardStep::FIRST,
            draft,
            errors: ValidationErrors::new(),
            submitted: false,
        }
    }

    /// Whether the renderer may show the tab for `step`.
    ///
    /// Only the current step and the ones before it are reachable.
    pub fn is_step_unlocked(&self, step: WizardStep) -> bool {
        step <= self.step
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.step.next().is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::LAST
    }

    pub fn error_for(&self, field: DraftField) -> Option<&str> {
        self.errors.message(field)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(Draft::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldIssue;

    #[test]
    fn new_state_starts_on_first_step_without_errors() {
        let draft = Draft::default().with(DraftField::Name, "Ann");
        let state = WizardState::new(draft.clone());

        assert_eq!(state.step, WizardStep::Contact);
        assert_eq!(state.draft, draft);
        assert!(state.errors.is_empty());
        assert!(!state.submitted);
    }

    #[test]
    fn navigation_affordances_follow_the_step() {
        let mut state = WizardState::default();
        assert!(!state.can_go_back());
        assert!(state.can_go_next());
        assert!(!state.can_submit());
        assert!(state.is_step_unlocked(WizardStep::Contact));
        assert!(!state.is_step_unlocked(WizardStep::Address));

        state.step = WizardStep::Review;
        assert!(state.can_go_back());
        assert!(!state.can_go_next());
        assert!(state.can_submit());
        assert!(state.is_step_unlocked(WizardStep::Address));
    }

    #[test]
    fn error_for_reads_the_field_message() {
        let mut state = WizardState::default();
        state
            .errors
            .insert(DraftField::City, FieldIssue::required(DraftField::City));

        assert_eq!(state.error_for(DraftField::City), Some("City is required"));
        assert_eq!(state.error_for(DraftField::Zip), None);
    }
}
