//! Draft domain model.
//!
//! The draft is the single record collected by the wizard. Its field set is
//! fixed: fields are only ever overwritten, never added or removed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::WizardStep;

/// Identifier of one draft field.
///
/// The string form is the exact key used by the renderer and by the
/// persisted JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Email,
    Phone,
    Address1,
    Address2,
    City,
    State,
    Zip,
}

impl DraftField {
    /// All fields in display order.
    pub const ALL: [DraftField; 8] = [
        DraftField::Name,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Address1,
        DraftField::Address2,
        DraftField::City,
        DraftField::State,
        DraftField::Zip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Address1 => "address1",
            DraftField::Address2 => "address2",
            DraftField::City => "city",
            DraftField::State => "state",
            DraftField::Zip => "zip",
        }
    }

    /// Human readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone",
            DraftField::Address1 => "Address Line 1",
            DraftField::Address2 => "Address Line 2",
            DraftField::City => "City",
            DraftField::State => "State",
            DraftField::Zip => "Zip Code",
        }
    }

    /// Step whose form owns this field.
    pub fn step(&self) -> WizardStep {
        match self {
            DraftField::Name | DraftField::Email | DraftField::Phone => WizardStep::Contact,
            _ => WizardStep::Address,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, DraftField::Address2)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the eight field identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown draft field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for DraftField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// In-progress record of collected values.
///
/// Serializes to a JSON object with exactly the eight field keys. Missing or
/// extra keys are rejected on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Draft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Address1 => &self.address1,
            DraftField::Address2 => &self.address2,
            DraftField::City => &self.city,
            DraftField::State => &self.state,
            DraftField::Zip => &self.zip,
        }
    }

    /// Replace the value of a single field, leaving every other field as is.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Address1 => &mut self.address1,
            DraftField::Address2 => &mut self.address2,
            DraftField::City => &mut self.city,
            DraftField::State => &mut self.state,
            DraftField::Zip => &mut self.zip,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`Draft::set`].
    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// `(label, value)` pairs for the review step, in field order.
    pub fn review_lines(&self) -> Vec<(&'static str, &str)> {
        DraftField::ALL
            .iter()
            .map(|field| (field.label(), self.get(*field)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in DraftField::ALL {
            assert_eq!(field.as_str().parse::<DraftField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "country".parse::<DraftField>().unwrap_err();
        assert_eq!(err, UnknownFieldError("country".to_string()));
        assert!("Name".parse::<DraftField>().is_err());
    }

    #[test]
    fn set_only_touches_the_target_field() {
        let mut draft = Draft::default().with(DraftField::City, "Oslo");
        draft.set(DraftField::Name, "Ann");

        assert_eq!(draft.get(DraftField::Name), "Ann");
        assert_eq!(draft.get(DraftField::City), "Oslo");
        assert_eq!(draft.get(DraftField::Email), "");
    }

    #[test]
    fn set_can_overwrite_with_empty_string() {
        let mut draft = Draft::default().with(DraftField::Zip, "0150");
        draft.set(DraftField::Zip, "");
        assert!(draft.is_empty());
    }

    #[test]
    fn serializes_to_object_with_exact_keys() {
        let draft = Draft::default().with(DraftField::Address1, "Main St 1");
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 8);
        for field in DraftField::ALL {
            assert!(object.contains_key(field.as_str()), "missing key {field}");
        }
        assert_eq!(object["address1"], "Main St 1");
    }

    #[test]
    fn rejects_unknown_and_missing_keys() {
        let extra = r#"{"name":"","email":"","phone":"","address1":"","address2":"",
            "city":"","state":"","zip":"","country":""}"#;
        assert!(serde_json::from_str::<Draft>(extra).is_err());

        let missing = r#"{"name":"Ann"}"#;
        assert!(serde_json::from_str::<Draft>(missing).is_err());
    }

    #[test]
    fn review_lines_follow_field_order_with_labels() {
        let draft = Draft::default()
            .with(DraftField::Name, "Ann")
            .with(DraftField::Zip, "0150");
        let lines = draft.review_lines();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ("Name", "Ann"));
        assert_eq!(lines[3], ("Address Line 1", ""));
        assert_eq!(lines[7], ("Zip Code", "0150"));
    }

    #[test]
    fn fields_belong_to_their_form_step() {
        assert_eq!(DraftField::Phone.step(), WizardStep::Contact);
        assert_eq!(DraftField::Address2.step(), WizardStep::Address);
        assert!(DraftField::Address2.is_optional());
        assert!(!DraftField::Zip.is_optional());
    }
}
