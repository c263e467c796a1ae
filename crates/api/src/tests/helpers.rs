// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemorySeatRepository, RecommendedSeat, SeatPlacement};
use choir_seat::EditorState;
use choir_seat_domain::{
    GridLayout, LayoutSource, MemberId, SeatAssignment, VoicePart, WorkflowStep, ZigzagPattern,
};

pub const ARRANGEMENT: &str = "arr-1";

pub fn create_test_assignment(id: &str, part: VoicePart, row: i32, col: i32) -> SeatAssignment {
    SeatAssignment::new(MemberId::new(id), &format!("Member {id}"), part, row, col)
}

pub fn create_recommended_seat(id: &str, part: &str, row: i32, col: i32) -> RecommendedSeat {
    RecommendedSeat {
        member_id: id.to_string(),
        member_name: format!("Member {id}"),
        row,
        col,
        part: part.to_string(),
    }
}

pub fn create_placement(id: &str, row: i32, column: i32) -> SeatPlacement {
    SeatPlacement {
        member_id: MemberId::new(id),
        row,
        column,
        part: VoicePart::Alto,
    }
}

/// A full 2x2 grid: sopranos on the left, altos on the right.
pub fn create_test_state() -> EditorState {
    EditorState {
        arrangement_id: ARRANGEMENT.to_string(),
        workflow_step: WorkflowStep::Placement,
        layout_source: LayoutSource::Manual,
        grid_layout: Some(GridLayout::new(vec![2, 2], ZigzagPattern::Even)),
        assignments: vec![
            create_test_assignment("s-1", VoicePart::Soprano, 0, 0),
            create_test_assignment("a-1", VoicePart::Alto, 0, 1),
            create_test_assignment("s-2", VoicePart::Soprano, 1, 0),
            create_test_assignment("a-2", VoicePart::Alto, 1, 1),
        ],
    }
}

pub fn create_repository() -> InMemorySeatRepository {
    let mut repository: InMemorySeatRepository = InMemorySeatRepository::new();
    repository.create_arrangement(ARRANGEMENT);
    repository
}
