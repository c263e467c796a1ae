// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Arrangement publication lifecycle.
//!
//! An arrangement starts as a draft, is shared with the choir for review,
//! and is finally confirmed. A confirmed arrangement is frozen: its seats
//! may no longer be changed.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Publication state of an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrangementStatus {
    /// Being edited; visible to administrators only.
    #[default]
    Draft,
    /// Visible to members; still editable.
    Shared,
    /// Final. No further seat changes.
    Confirmed,
}

impl ArrangementStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Shared => "SHARED",
            Self::Confirmed => "CONFIRMED",
        }
    }

    /// Returns true if seats may be changed in this status.
    #[must_use]
    pub const fn allows_mutation(&self) -> bool {
        !matches!(self, Self::Confirmed)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Shared
    /// - Shared → Draft
    /// - Shared → Confirmed
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Shared)
                | (Self::Shared, Self::Draft)
                | (Self::Shared, Self::Confirmed)
        )
    }

    /// Validates a transition to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is not allowed.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        }
    }
}

impl FromStr for ArrangementStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SHARED" => Ok(Self::Shared),
            "CONFIRMED" => Ok(Self::Confirmed),
            _ => Err(DomainError::InvalidArrangementStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ArrangementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
