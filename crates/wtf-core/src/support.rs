//! The user's support relationship to the project.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snapshot of whether the user contributes to or sponsors the project.
///
/// Resolved by an external provider before any exit message is chosen and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(description = "Support relationship of the current user to the project")]
pub struct SupportStatus {
    /// The user has contributed to the source code.
    #[serde(rename = "contributor")]
    pub is_contributor: bool,

    /// The user sponsors the project.
    #[serde(rename = "sponsor")]
    pub is_sponsor: bool,
}

impl SupportStatus {
    /// Build a status from the two flags.
    #[must_use]
    pub const fn new(is_contributor: bool, is_sponsor: bool) -> Self {
        Self {
            is_contributor,
            is_sponsor,
        }
    }

    /// Combine two snapshots, keeping any relationship either one reports.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            is_contributor: self.is_contributor || other.is_contributor,
            is_sponsor: self.is_sponsor || other.is_sponsor,
        }
    }
}
