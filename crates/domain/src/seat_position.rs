// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Render-time seat positions for the zigzag stagger.
//!
//! ## Grid A and Grid B
//!
//! Every row takes one of two phases. A "Grid A" row centers a seat on the
//! grid's center line; a "Grid B" row centers the gap between two seats.
//! Which rows are Grid A is set by the [`ZigzagPattern`]:
//!
//! - `even`: rows 0, 2, 4, ... are Grid A
//! - `odd`: rows 1, 3, 5, ... are Grid A
//! - `none`: no stagger, every offset is 0
//!
//! A row with an even number of seats already centers on a gap, so the
//! offset compensates for the row's own parity rather than applying a fixed
//! half-seat shift. Adjacent rows therefore interlock like bricks whatever
//! their capacities are.
//!
//! Offsets never affect seat identity; `visual_col` exists only for drawing.

use crate::coordinate::{HasSeatCoordinate, SeatCoordinate};
use crate::grid_layout::{GridLayout, RowOffsets, ZigzagPattern};
use serde::{Deserialize, Serialize};

/// A 1-based seat with its horizontal render position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPosition {
    /// 1-based row.
    pub row: i32,
    /// 1-based column.
    pub col: i32,
    /// `col + offset`; used only for rendering.
    pub visual_col: f64,
}

impl HasSeatCoordinate for SeatPosition {
    fn coordinate(&self) -> SeatCoordinate {
        SeatCoordinate::new(self.row, self.col)
    }

    fn with_coordinate(&self, coordinate: SeatCoordinate) -> Self {
        let offset: f64 = self.visual_col - f64::from(self.col);
        Self {
            row: coordinate.row,
            col: coordinate.col,
            visual_col: f64::from(coordinate.col) + offset,
        }
    }
}

/// One row's seats, laid out as an independently centered group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSeats {
    /// 0-based row index.
    pub row_index: u32,
    /// The row's seats, left to right.
    pub seats: Vec<SeatPosition>,
    /// Declared seat count.
    pub capacity: u32,
    /// Horizontal offset applied to every seat in the row.
    pub offset: f64,
}

const HALF_SEAT: f64 = 0.5;

/// Returns the horizontal offset for a 0-based row.
///
/// A non-null entry in `row_offsets` is returned verbatim. Otherwise the
/// offset follows the pattern and the parity of `capacity`.
#[must_use]
pub fn get_zigzag_offset(
    row_index: u32,
    pattern: ZigzagPattern,
    capacity: u32,
    row_offsets: Option<&RowOffsets>,
) -> f64 {
    if let Some(offset) = row_offsets.and_then(|offsets| offsets.get(&row_index).copied().flatten())
    {
        return offset;
    }

    let is_grid_a: bool = match pattern {
        ZigzagPattern::None => return 0.0,
        ZigzagPattern::Even => row_index % 2 == 0,
        ZigzagPattern::Odd => row_index % 2 == 1,
    };
    let even_capacity: bool = capacity % 2 == 0;

    if is_grid_a == even_capacity {
        HALF_SEAT
    } else {
        0.0
    }
}

fn row_offset(layout: &GridLayout, row_index: u32, capacity: u32) -> f64 {
    get_zigzag_offset(
        row_index,
        layout.zigzag_pattern,
        capacity,
        Some(&layout.row_offsets),
    )
}

fn row_positions(row_index: u32, capacity: u32, offset: f64) -> Vec<SeatPosition> {
    let row: i32 = i32::try_from(row_index).map_or(i32::MAX, |r| r.saturating_add(1));
    (1..=i32::try_from(capacity).unwrap_or(i32::MAX))
        .map(|col| SeatPosition {
            row,
            col,
            visual_col: f64::from(col) + offset,
        })
        .collect()
}

/// Computes the position of every seat in the layout, row by row.
#[must_use]
pub fn calculate_all_seat_positions(layout: &GridLayout) -> Vec<SeatPosition> {
    calculate_seats_by_row(layout)
        .into_iter()
        .flat_map(|row| row.seats)
        .collect()
}

/// Computes the position of a single 1-based seat.
///
/// Returns `None` if the row or column lies outside the layout.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn calculate_seat_position(row: i32, col: i32, layout: &GridLayout) -> Option<SeatPosition> {
    if row < 1 || col < 1 {
        return None;
    }
    let row_index: u32 = (row - 1) as u32;
    let capacity: u32 = layout.capacity_of(row_index)?;
    if col as u32 > capacity {
        return None;
    }

    let offset: f64 = row_offset(layout, row_index, capacity);
    Some(SeatPosition {
        row,
        col,
        visual_col: f64::from(col) + offset,
    })
}

/// Groups seat positions by row.
#[must_use]
pub fn calculate_seats_by_row(layout: &GridLayout) -> Vec<RowSeats> {
    (0u32..)
        .zip(layout.row_capacities.iter().take(layout.rows as usize))
        .map(|(row_index, &capacity)| {
            let offset: f64 = row_offset(layout, row_index, capacity);
            RowSeats {
                row_index,
                seats: row_positions(row_index, capacity, offset),
                capacity,
                offset,
            }
        })
        .collect()
}
