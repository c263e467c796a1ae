// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seating grid shape and balanced seat distribution.
//!
//! Rows are indexed from 0 at the back of the choir. The last row sits
//! nearest the audience, so leftover seats are handed to the front first.

use crate::coordinate::HasSeatCoordinate;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fewest rows a layout may declare.
pub const MIN_ROWS: u32 = 1;
/// Most rows a layout may declare.
pub const MAX_ROWS: u32 = 15;
/// Fewest seats a row may declare.
pub const MIN_CAPACITY_PER_ROW: u32 = 1;
/// Most seats a row may declare.
pub const MAX_CAPACITY_PER_ROW: u32 = 40;

/// Which rows are staggered against their neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZigzagPattern {
    /// No stagger; seats line up in columns.
    None,
    /// Even-indexed rows center on a seat.
    #[default]
    Even,
    /// Odd-indexed rows center on a seat.
    Odd,
}

/// Per-row horizontal offset overrides. `None` falls back to the pattern.
pub type RowOffsets = BTreeMap<u32, Option<f64>>;

/// The shape of a seating grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Number of rows.
    pub rows: u32,
    /// Seats per row, indexed by 0-based row.
    pub row_capacities: Vec<u32>,
    /// Stagger rule.
    pub zigzag_pattern: ZigzagPattern,
    /// Explicit offsets that take precedence over the stagger rule.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub row_offsets: RowOffsets,
}

impl GridLayout {
    /// Creates a layout with one row per capacity and no offset overrides.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(row_capacities: Vec<u32>, zigzag_pattern: ZigzagPattern) -> Self {
        Self {
            rows: row_capacities.len() as u32,
            row_capacities,
            zigzag_pattern,
            row_offsets: RowOffsets::new(),
        }
    }

    /// The layout used when nothing better is known.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(vec![10, 10, 10, 10], ZigzagPattern::Even)
    }

    /// Creates a layout whose rows share `total_members` as evenly as possible.
    #[must_use]
    pub fn with_auto_distribution(
        total_members: i32,
        num_rows: i32,
        zigzag_pattern: ZigzagPattern,
    ) -> Self {
        Self::new(auto_distribute_seats(total_members, num_rows), zigzag_pattern)
    }

    /// Returns the capacity of a 0-based row, if the row exists.
    #[must_use]
    pub fn capacity_of(&self, row: u32) -> Option<u32> {
        if row >= self.rows {
            return None;
        }
        self.row_capacities.get(row as usize).copied()
    }

    /// Returns whether the 0-based `(row, col)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let (Ok(row), Ok(col)) = (u32::try_from(row), u32::try_from(col)) else {
            return false;
        };
        self.capacity_of(row).is_some_and(|capacity| col < capacity)
    }

    /// Returns the total number of seats.
    #[must_use]
    pub fn total_capacity(&self) -> u64 {
        self.row_capacities.iter().map(|&c| u64::from(c)).sum()
    }

    /// Checks the layout against the row and capacity bounds.
    ///
    /// # Errors
    ///
    /// Returns the first violation found:
    /// - `DomainError::InvalidRowCount` if `rows` is out of bounds
    /// - `DomainError::RowCapacityCountMismatch` if the capacity list length differs from `rows`
    /// - `DomainError::InvalidRowCapacity` if any capacity is out of bounds
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(DomainError::InvalidRowCount { rows: self.rows });
        }
        if self.row_capacities.len() != self.rows as usize {
            return Err(DomainError::RowCapacityCountMismatch {
                rows: self.rows,
                capacities: self.row_capacities.len(),
            });
        }
        for (row, &capacity) in (0u32..).zip(&self.row_capacities) {
            if !(MIN_CAPACITY_PER_ROW..=MAX_CAPACITY_PER_ROW).contains(&capacity) {
                return Err(DomainError::InvalidRowCapacity { row, capacity });
            }
        }
        Ok(())
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Splits `total_members` across `num_rows` rows.
///
/// Every row receives the floor share; the remainder goes one seat at a
/// time to the last row, then the one before it, and so on. Non-positive
/// inputs produce `max(num_rows, 0)` zeros.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn auto_distribute_seats(total_members: i32, num_rows: i32) -> Vec<u32> {
    let row_count: usize = usize::try_from(num_rows).unwrap_or(0);
    if total_members <= 0 || num_rows <= 0 {
        return vec![0; row_count];
    }

    let base: u32 = (total_members / num_rows) as u32;
    let remainder: usize = (total_members % num_rows) as usize;

    let mut capacities: Vec<u32> = vec![base; row_count];
    for capacity in capacities.iter_mut().rev().take(remainder) {
        *capacity += 1;
    }
    capacities
}

/// Returns whether `layout` satisfies the row and capacity bounds.
#[must_use]
pub fn validate_grid_layout(layout: &GridLayout) -> bool {
    layout.validate().is_ok()
}

/// Recovers a layout from 1-based seat records alone.
///
/// Each row's capacity is the highest column seen in it, so sparse rows keep
/// their width. Rows between 1 and the highest row seen that hold no seats
/// get capacity 0. Records with a row or column below 1 are ignored. With no
/// usable records the fallback layout is returned.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn calculate_grid_layout_from_seats<T: HasSeatCoordinate>(seats: &[T]) -> GridLayout {
    let mut widest: BTreeMap<u32, u32> = BTreeMap::new();
    for seat in seats {
        let coordinate = seat.coordinate();
        if coordinate.row < 1 || coordinate.col < 1 {
            continue;
        }
        let entry: &mut u32 = widest.entry(coordinate.row as u32).or_insert(0);
        *entry = (*entry).max(coordinate.col as u32);
    }

    let Some(&max_row) = widest.keys().next_back() else {
        return GridLayout::fallback();
    };

    let row_capacities: Vec<u32> = (1..=max_row)
        .map(|row| widest.get(&row).copied().unwrap_or(0))
        .collect();

    GridLayout {
        rows: max_row,
        row_capacities,
        zigzag_pattern: ZigzagPattern::Even,
        row_offsets: RowOffsets::new(),
    }
}
