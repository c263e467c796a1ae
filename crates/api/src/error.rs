// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use choir_seat::CoreError;
use choir_seat_domain::{ArrangementStatus, DomainError};
use thiserror::Error;

/// Reasons a recommender response cannot be imported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// A seat coordinate is not 1-based.
    #[error("Seat {index} has coordinates ({row}, {col}); rows and columns start at 1")]
    NonPositiveCoordinate { index: usize, row: i32, col: i32 },
    /// A seat names a voice part we do not know.
    #[error("Seat {index} has unknown voice part '{part}'")]
    UnknownVoicePart { index: usize, part: String },
    /// A seat has a blank member id.
    #[error("Seat {index} has an empty member id")]
    EmptyMemberId { index: usize },
    /// The seats do not fit the chosen layout.
    #[error("Recommended seats do not fit the layout: {0}")]
    Placement(DomainError),
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The arrangement no longer accepts seat changes.
    ArrangementLocked {
        /// The arrangement that rejected the change.
        arrangement_id: String,
        /// Its current status.
        status: ArrangementStatus,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ArrangementLocked {
                arrangement_id,
                status,
            } => {
                write!(
                    f,
                    "Arrangement '{arrangement_id}' is {status} and cannot be changed"
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        Self::InvalidInput {
            field: String::from("recommendation"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidRowCount { .. }
        | DomainError::RowCapacityCountMismatch { .. }
        | DomainError::InvalidRowCapacity { .. } => ApiError::InvalidInput {
            field: String::from("grid_layout"),
            message,
        },
        DomainError::SeatOutOfGrid { .. } => ApiError::DomainRuleViolation {
            rule: String::from("seat_within_grid"),
            message,
        },
        DomainError::DuplicateSeat { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_seat"),
            message,
        },
        DomainError::DuplicateMember { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_member"),
            message,
        },
        DomainError::InvalidMemberId(_) => ApiError::InvalidInput {
            field: String::from("member_id"),
            message,
        },
        DomainError::InvalidVoicePart(_) => ApiError::InvalidInput {
            field: String::from("part"),
            message,
        },
        DomainError::InvalidWorkflowStep(_) => ApiError::InvalidInput {
            field: String::from("workflow_step"),
            message,
        },
        DomainError::InvalidArrangementStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::NoGridLayout => ApiError::InvalidInput {
            field: String::from("grid_layout"),
            message: err.to_string(),
        },
        CoreError::StalePreview | CoreError::NothingToApply => ApiError::DomainRuleViolation {
            rule: String::from("emergency_preview"),
            message: err.to_string(),
        },
    }
}
