// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use choir_seat_domain::DomainError;

/// Errors that can occur while committing editor changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The editor has no grid layout to operate on.
    NoGridLayout,
    /// The preview was computed against a state that is no longer current.
    StalePreview,
    /// The preview does not change anything.
    NothingToApply,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NoGridLayout => write!(f, "No grid layout has been set"),
            Self::StalePreview => {
                write!(f, "Preview is out of date: the grid changed after it was computed")
            }
            Self::NothingToApply => write!(f, "Preview contains no changes to apply"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
