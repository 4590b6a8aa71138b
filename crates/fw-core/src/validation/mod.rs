//! Validation engine.
//!
//! [`validate`] is a pure function of `(step, draft)`. Every rule owned by the
//! step runs on every call, so the returned map always reflects the complete
//! set of failing fields for that step.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::draft::{Draft, DraftField};
use crate::wizard::WizardStep;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern must compile"));

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueReason {
    Required,
    InvalidFormat,
}

/// A single field failure with its fixed user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub reason: IssueReason,
    pub message: String,
}

impl FieldIssue {
    pub fn required(field: DraftField) -> Self {
        Self {
            reason: IssueReason::Required,
            message: format!("{} is required", field.label()),
        }
    }

    pub fn invalid_format(field: DraftField) -> Self {
        Self {
            reason: IssueReason::InvalidFormat,
            message: format!("{} is invalid", field.label()),
        }
    }
}

/// Field errors for the most recently validated step.
///
/// A key is present only while its field fails. An empty map means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<DraftField, FieldIssue>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, issue: FieldIssue) {
        self.0.insert(field, issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<&FieldIssue> {
        self.0.get(&field)
    }

    pub fn message(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(|issue| issue.message.as_str())
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &FieldIssue)> + '_ {
        self.0.iter().map(|(field, issue)| (*field, issue))
    }
}

fn require(errors: &mut ValidationErrors, draft: &Draft, field: DraftField) {
    if draft.get(field).is_empty() {
        errors.insert(field, FieldIssue::required(field));
    }
}

/// Whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Compute the field errors of `step` for `draft`.
pub fn validate(step: WizardStep, draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        WizardStep::Contact => {
            require(&mut errors, draft, DraftField::Name);
            if draft.email.is_empty() {
                errors.insert(DraftField::Email, FieldIssue::required(DraftField::Email));
            } else if !is_valid_email(&draft.email) {
                errors.insert(
                    DraftField::Email,
                    FieldIssue::invalid_format(DraftField::Email),
                );
            }
            require(&mut errors, draft, DraftField::Phone);
        }
        WizardStep::Address => {
            require(&mut errors, draft, DraftField::Address1);
            require(&mut errors, draft, DraftField::City);
            require(&mut errors, draft, DraftField::State);
            require(&mut errors, draft, DraftField::Zip);
        }
        // Review only.
        WizardStep::Review => {}
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_draft() -> Draft {
        Draft::default()
            .with(DraftField::Name, "Ann")
            .with(DraftField::Email, "a@b.co")
            .with(DraftField::Phone, "555-0100")
    }

    fn address_draft() -> Draft {
        contact_draft()
            .with(DraftField::Address1, "1 Main St")
            .with(DraftField::City, "Springfield")
            .with(DraftField::State, "IL")
            .with(DraftField::Zip, "62701")
    }

    #[test]
    fn empty_draft_fails_every_contact_field_as_required() {
        let errors = validate(WizardStep::Contact, &Draft::default());

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(DraftField::Name), Some("Name is required"));
        assert_eq!(errors.message(DraftField::Email), Some("Email is required"));
        assert_eq!(errors.message(DraftField::Phone), Some("Phone is required"));
        assert_eq!(
            errors.get(DraftField::Email).map(|i| i.reason),
            Some(IssueReason::Required)
        );
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let draft = contact_draft().with(DraftField::Email, "not-an-email");
        let errors = validate(WizardStep::Contact, &draft);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(DraftField::Email), Some("Email is invalid"));
        assert_eq!(
            errors.get(DraftField::Email).map(|i| i.reason),
            Some(IssueReason::InvalidFormat)
        );
    }

    #[test]
    fn complete_contact_step_is_valid() {
        assert!(validate(WizardStep::Contact, &contact_draft()).is_empty());
    }

    #[test]
    fn name_is_not_trimmed() {
        let draft = contact_draft().with(DraftField::Name, "  ");
        assert!(validate(WizardStep::Contact, &draft).is_empty());
    }

    #[test]
    fn email_pattern_needs_segments_around_at_and_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a @b.co"));
    }

    #[test]
    fn address_step_requires_all_but_second_line() {
        let errors = validate(WizardStep::Address, &contact_draft());
        let fields: Vec<_> = errors.fields().collect();

        assert_eq!(
            fields,
            vec![
                DraftField::Address1,
                DraftField::City,
                DraftField::State,
                DraftField::Zip
            ]
        );
        assert_eq!(
            errors.message(DraftField::Address1),
            Some("Address Line 1 is required")
        );
        assert_eq!(errors.message(DraftField::Zip), Some("Zip Code is required"));
        assert!(!errors.contains(DraftField::Address2));
    }

    #[test]
    fn address_step_ignores_contact_fields() {
        let draft = Draft::default()
            .with(DraftField::Address1, "1 Main St")
            .with(DraftField::City, "Springfield")
            .with(DraftField::State, "IL")
            .with(DraftField::Zip, "62701");
        assert!(validate(WizardStep::Address, &draft).is_empty());
    }

    #[test]
    fn review_step_never_fails() {
        assert!(validate(WizardStep::Review, &Draft::default()).is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let draft = contact_draft().with(DraftField::Email, "nope");
        for step in WizardStep::ALL {
            assert_eq!(validate(step, &draft), validate(step, &draft));
        }
    }

    #[test]
    fn errors_serialize_keyed_by_field_name() {
        let errors = validate(WizardStep::Contact, &contact_draft().with(DraftField::Phone, ""));
        let value = serde_json::to_value(&errors).unwrap();

        assert_eq!(value["phone"]["reason"], "required");
        assert_eq!(value["phone"]["message"], "Phone is required");
    }
}
