// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GridLayout, MemberId, SeatAssignment, VoicePart, ZigzagPattern};

pub fn create_test_layout(row_capacities: &[u32]) -> GridLayout {
    GridLayout::new(row_capacities.to_vec(), ZigzagPattern::Even)
}

pub fn create_test_assignment(id: &str, part: VoicePart, row: i32, col: i32) -> SeatAssignment {
    SeatAssignment::new(MemberId::new(id), &format!("Member {id}"), part, row, col)
}
