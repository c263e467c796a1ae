// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use choir_seat::EditorState;
use choir_seat_domain::{
    GridLayout, LayoutSource, MemberId, SeatAssignment, VoicePart, WorkflowStep, ZigzagPattern,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const ARRANGEMENT: &str = "arr-42";

pub const T0: OffsetDateTime = datetime!(2026-03-01 10:00:00 UTC);

/// A state in the middle of placement with two seated members.
pub fn create_editing_state(label: &str) -> EditorState {
    EditorState {
        arrangement_id: ARRANGEMENT.to_string(),
        workflow_step: WorkflowStep::Placement,
        layout_source: LayoutSource::Manual,
        grid_layout: Some(GridLayout::new(vec![2, 2], ZigzagPattern::Even)),
        assignments: vec![
            SeatAssignment::new(MemberId::new("m-1"), label, VoicePart::Soprano, 0, 0),
            SeatAssignment::new(MemberId::new("m-2"), "Alto One", VoicePart::Alto, 1, 1),
        ],
    }
}
