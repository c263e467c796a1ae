// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and layout rules for choir seat grids.
//!
//! Everything in this crate is pure: no I/O, no logging, no hidden state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod arrangement_status;
mod coordinate;
mod error;
mod grid_layout;
mod seat_position;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use arrangement_status::ArrangementStatus;
pub use coordinate::{
    HasSeatCoordinate, SeatCoordinate, coordinate_to_index, index_to_coordinate, to_one_based,
    to_one_based_all, to_zero_based, to_zero_based_all,
};
pub use error::DomainError;
pub use grid_layout::{
    GridLayout, MAX_CAPACITY_PER_ROW, MAX_ROWS, MIN_CAPACITY_PER_ROW, MIN_ROWS, RowOffsets,
    ZigzagPattern, auto_distribute_seats, calculate_grid_layout_from_seats, validate_grid_layout,
};
pub use seat_position::{
    RowSeats, SeatPosition, calculate_all_seat_positions, calculate_seat_position,
    calculate_seats_by_row, get_zigzag_offset,
};
pub use types::{LayoutSource, MemberId, SeatAssignment, VoicePart, WorkflowStep};
pub use validation::{is_layout_consistent, validate_assignments};
