// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between the 1-based and 0-based seat coordinate conventions.
//!
//! The recommender and the wire format count rows and columns from 1; the
//! editor indexes arrays from 0. Conversion happens exactly at those two
//! boundaries and nowhere else.
//!
//! These functions never fail. Range checks belong to the caller: a
//! coordinate of `(0, 0)` converted to 0-based yields `(-1, -1)`, and the
//! arithmetic wraps at the `i32` limits so both round-trip laws hold for
//! every input.

use serde::{Deserialize, Serialize};

/// A `(row, col)` pair in either convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatCoordinate {
    /// Row number.
    pub row: i32,
    /// Column number.
    pub col: i32,
}

impl SeatCoordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for SeatCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A record that carries a seat coordinate.
///
/// Implemented by every type the batch converters operate on.
pub trait HasSeatCoordinate {
    /// Returns the record's coordinate.
    fn coordinate(&self) -> SeatCoordinate;

    /// Returns a copy of the record moved to `coordinate`.
    #[must_use]
    fn with_coordinate(&self, coordinate: SeatCoordinate) -> Self;
}

impl HasSeatCoordinate for SeatCoordinate {
    fn coordinate(&self) -> SeatCoordinate {
        *self
    }

    fn with_coordinate(&self, coordinate: SeatCoordinate) -> Self {
        coordinate
    }
}

/// Converts a 1-based coordinate to 0-based.
#[must_use]
pub const fn to_zero_based(coordinate: SeatCoordinate) -> SeatCoordinate {
    SeatCoordinate {
        row: coordinate.row.wrapping_sub(1),
        col: coordinate.col.wrapping_sub(1),
    }
}

/// Converts a 0-based coordinate to 1-based.
#[must_use]
pub const fn to_one_based(coordinate: SeatCoordinate) -> SeatCoordinate {
    SeatCoordinate {
        row: coordinate.row.wrapping_add(1),
        col: coordinate.col.wrapping_add(1),
    }
}

/// Converts every record in `records` from 1-based to 0-based.
#[must_use]
pub fn to_zero_based_all<T: HasSeatCoordinate>(records: &[T]) -> Vec<T> {
    records
        .iter()
        .map(|record| record.with_coordinate(to_zero_based(record.coordinate())))
        .collect()
}

/// Converts every record in `records` from 0-based to 1-based.
#[must_use]
pub fn to_one_based_all<T: HasSeatCoordinate>(records: &[T]) -> Vec<T> {
    records
        .iter()
        .map(|record| record.with_coordinate(to_one_based(record.coordinate())))
        .collect()
}

/// Flattens a 0-based coordinate into a row-major index.
#[must_use]
pub const fn coordinate_to_index(coordinate: SeatCoordinate, row_width: u32) -> i64 {
    coordinate.row as i64 * row_width as i64 + coordinate.col as i64
}

/// Expands a row-major index back into a 0-based coordinate.
///
/// A zero `row_width` places every index in row 0. Indices that do not fit
/// in an `i32` component wrap, mirroring the other conversions.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn index_to_coordinate(index: i64, row_width: u32) -> SeatCoordinate {
    if row_width == 0 {
        return SeatCoordinate {
            row: 0,
            col: index as i32,
        };
    }
    let width: i64 = row_width as i64;
    SeatCoordinate {
        row: index.div_euclid(width) as i32,
        col: index.rem_euclid(width) as i32,
    }
}
