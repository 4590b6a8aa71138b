use std::fmt;

use serde::{Deserialize, Serialize};

use crate::draft::DraftField;

/// One of the three ordered wizard stages.
///
/// Serialized as its 1-based number so the renderer sees `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    /// Name, email and phone.
    Contact = 1,
    /// Postal address.
    Address = 2,
    /// Read-only review before submission.
    Review = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("step {0} is outside 1..=3")]
pub struct InvalidStepError(pub u8);

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Contact;
    pub const LAST: WizardStep = WizardStep::Review;
    pub const ALL: [WizardStep; 3] = [WizardStep::Contact, WizardStep::Address, WizardStep::Review];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Following step, `None` on the last one.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Contact => Some(WizardStep::Address),
            WizardStep::Address => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// Preceding step, `None` on the first one.
    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Contact => None,
            WizardStep::Address => Some(WizardStep::Contact),
            WizardStep::Review => Some(WizardStep::Address),
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Contact => "Step 1",
            WizardStep::Address => "Step 2",
            WizardStep::Review => "Step 3",
        }
    }

    /// Fields edited on this step. The review step edits nothing.
    pub fn fields(self) -> Vec<DraftField> {
        match self {
            WizardStep::Review => Vec::new(),
            step => DraftField::ALL
                .iter()
                .copied()
                .filter(|field| field.step() == step)
                .collect(),
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = InvalidStepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WizardStep::Contact),
            2 => Ok(WizardStep::Address),
            3 => Ok(WizardStep::Review),
            other => Err(InvalidStepError(other)),
        }
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
