// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::grid_layout::GridLayout;
use crate::types::{MemberId, SeatAssignment};
use std::collections::HashSet;

/// Validates a set of 0-based assignments against a layout.
///
/// # Arguments
///
/// * `layout` - The grid the assignments belong to
/// * `assignments` - The assignments to check
///
/// # Errors
///
/// Returns an error if:
/// - An assignment lies outside the grid
/// - Two assignments share a seat
/// - A member is seated twice
pub fn validate_assignments(
    layout: &GridLayout,
    assignments: &[SeatAssignment],
) -> Result<(), DomainError> {
    let mut seats: HashSet<(i32, i32)> = HashSet::new();
    let mut members: HashSet<&MemberId> = HashSet::new();

    for assignment in assignments {
        if !layout.contains(assignment.row, assignment.col) {
            return Err(DomainError::SeatOutOfGrid {
                member_id: assignment.member_id.value().to_string(),
                row: assignment.row,
                col: assignment.col,
            });
        }
        if !seats.insert((assignment.row, assignment.col)) {
            return Err(DomainError::DuplicateSeat {
                row: assignment.row,
                col: assignment.col,
            });
        }
        if !members.insert(&assignment.member_id) {
            return Err(DomainError::DuplicateMember {
                member_id: assignment.member_id.value().to_string(),
            });
        }
    }

    Ok(())
}

/// Returns whether the layout has exactly one seat per assignment.
///
/// This is the committed-state invariant; simulated states may break it.
#[must_use]
pub fn is_layout_consistent(layout: &GridLayout, assignments: &[SeatAssignment]) -> bool {
    layout.total_capacity() == assignments.len() as u64
}
