// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use choir_seat_domain::{GridLayout, LayoutSource, SeatAssignment, WorkflowStep};
use serde::{Deserialize, Serialize};

/// The part of the editor state tracked by undo/redo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridState {
    /// The grid shape, once one has been chosen.
    pub grid_layout: Option<GridLayout>,
    /// 0-based seat assignments.
    pub assignments: Vec<SeatAssignment>,
}

/// The complete editing state for one arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// The arrangement being edited.
    pub arrangement_id: String,
    /// Current workflow step.
    pub workflow_step: WorkflowStep,
    /// Where the grid layout came from.
    pub layout_source: LayoutSource,
    /// The grid shape, once one has been chosen.
    pub grid_layout: Option<GridLayout>,
    /// 0-based seat assignments.
    pub assignments: Vec<SeatAssignment>,
}

impl EditorState {
    /// Creates the state of a fresh editing session.
    #[must_use]
    pub fn new(arrangement_id: &str) -> Self {
        Self {
            arrangement_id: arrangement_id.to_string(),
            workflow_step: WorkflowStep::INITIAL,
            layout_source: LayoutSource::Manual,
            grid_layout: None,
            assignments: Vec::new(),
        }
    }

    /// Returns whether this is the untouched state of a fresh session.
    ///
    /// A fresh session is on the initial step, has no assignments, and has
    /// no layout supplied by the recommender.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.workflow_step == WorkflowStep::INITIAL
            && self.assignments.is_empty()
            && self.layout_source != LayoutSource::Recommendation
    }

    /// Returns the undo-tracked part of the state.
    #[must_use]
    pub fn grid_state(&self) -> GridState {
        GridState {
            grid_layout: self.grid_layout.clone(),
            assignments: self.assignments.clone(),
        }
    }

    /// Returns a copy with the grid replaced by `grid`.
    #[must_use]
    pub fn with_grid_state(&self, grid: GridState) -> Self {
        Self {
            grid_layout: grid.grid_layout,
            assignments: grid.assignments,
            ..self.clone()
        }
    }
}
