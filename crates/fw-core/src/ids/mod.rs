mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl_id!(SubmissionId);
