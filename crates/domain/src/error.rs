// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during seat grid validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The number of rows is outside the permitted bounds.
    InvalidRowCount {
        /// The rejected row count.
        rows: u32,
    },
    /// The capacity list does not have one entry per row.
    RowCapacityCountMismatch {
        /// The declared row count.
        rows: u32,
        /// The number of capacities supplied.
        capacities: usize,
    },
    /// A row capacity is outside the permitted bounds.
    InvalidRowCapacity {
        /// The 0-based row index.
        row: u32,
        /// The rejected capacity.
        capacity: u32,
    },
    /// An assignment points at a seat the layout does not contain.
    SeatOutOfGrid {
        /// The member occupying the seat.
        member_id: String,
        /// The 0-based row.
        row: i32,
        /// The 0-based column.
        col: i32,
    },
    /// Two assignments occupy the same seat.
    DuplicateSeat {
        /// The 0-based row.
        row: i32,
        /// The 0-based column.
        col: i32,
    },
    /// A member is seated more than once.
    DuplicateMember {
        /// The repeated member id.
        member_id: String,
    },
    /// A member id is empty.
    InvalidMemberId(String),
    /// A voice part string was not recognized.
    InvalidVoicePart(String),
    /// A workflow step number was not recognized.
    InvalidWorkflowStep(u8),
    /// An arrangement status string was not recognized.
    InvalidArrangementStatus(String),
    /// An arrangement status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRowCount { rows } => {
                write!(
                    f,
                    "Invalid row count: {rows}. Must be between {} and {}",
                    crate::MIN_ROWS,
                    crate::MAX_ROWS
                )
            }
            Self::RowCapacityCountMismatch { rows, capacities } => {
                write!(
                    f,
                    "Layout declares {rows} rows but supplies {capacities} row capacities"
                )
            }
            Self::InvalidRowCapacity { row, capacity } => {
                write!(
                    f,
                    "Invalid capacity {capacity} for row {row}. Must be between {} and {}",
                    crate::MIN_CAPACITY_PER_ROW,
                    crate::MAX_CAPACITY_PER_ROW
                )
            }
            Self::SeatOutOfGrid { member_id, row, col } => {
                write!(
                    f,
                    "Member '{member_id}' is assigned to seat ({row}, {col}) outside the grid"
                )
            }
            Self::DuplicateSeat { row, col } => {
                write!(f, "Seat ({row}, {col}) is assigned more than once")
            }
            Self::DuplicateMember { member_id } => {
                write!(f, "Member '{member_id}' is seated more than once")
            }
            Self::InvalidMemberId(msg) => write!(f, "Invalid member id: {msg}"),
            Self::InvalidVoicePart(part) => write!(f, "Unknown voice part: {part}"),
            Self::InvalidWorkflowStep(step) => {
                write!(f, "Invalid workflow step: {step}. Must be between 1 and 4")
            }
            Self::InvalidArrangementStatus(status) => {
                write!(f, "Unknown arrangement status: {status}")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot transition arrangement from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
