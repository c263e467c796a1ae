// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EditorState, MemberRef};
use choir_seat_domain::{
    GridLayout, MemberId, SeatAssignment, VoicePart, WorkflowStep, ZigzagPattern,
};

pub const S: VoicePart = VoicePart::Soprano;
pub const A: VoicePart = VoicePart::Alto;
pub const T: VoicePart = VoicePart::Tenor;
pub const B: VoicePart = VoicePart::Bass;

/// Member id for the seat a member starts in, e.g. `r1c2`.
pub fn seat_id(row: i32, col: i32) -> String {
    format!("r{row}c{col}")
}

/// Builds a full grid: one row per slice, one member per part.
pub fn create_filled_grid(rows: &[&[VoicePart]]) -> (GridLayout, Vec<SeatAssignment>) {
    let capacities: Vec<u32> = rows
        .iter()
        .map(|row| u32::try_from(row.len()).unwrap())
        .collect();
    let mut assignments: Vec<SeatAssignment> = Vec::new();
    for (row, parts) in (0i32..).zip(rows.iter()) {
        for (col, &part) in (0i32..).zip(parts.iter()) {
            let id: String = seat_id(row, col);
            assignments.push(SeatAssignment::new(
                MemberId::new(&id),
                &format!("Member {id}"),
                part,
                row,
                col,
            ));
        }
    }
    (GridLayout::new(capacities, ZigzagPattern::Even), assignments)
}

pub fn create_test_state(rows: &[&[VoicePart]]) -> EditorState {
    let (layout, assignments) = create_filled_grid(rows);
    EditorState {
        arrangement_id: String::from("arr-1"),
        workflow_step: WorkflowStep::Placement,
        layout_source: choir_seat_domain::LayoutSource::Manual,
        grid_layout: Some(layout),
        assignments,
    }
}

pub fn member_at(assignments: &[SeatAssignment], row: i32, col: i32) -> Option<&str> {
    assignments
        .iter()
        .find(|a| a.row == row && a.col == col)
        .map(|a| a.member_id.value())
}

pub fn member_id(member: Option<&MemberRef>) -> Option<&str> {
    member.map(|m| m.member_id.value())
}
