// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The editor state owner.
//!
//! `EditorStore` is the single owner of an arrangement's editing state.
//! Every change goes through it and every change notifies subscribers.
//! Only grid changes made with [`EditorStore::commit`] enter the undo
//! history; workflow navigation and wholesale resets do not.

use crate::cascade::{EmergencyChangePreview, apply_emergency_change};
use crate::error::CoreError;
use crate::history::{History, HistoryConfig};
use crate::state::{EditorState, GridState};
use choir_seat_domain::WorkflowStep;
use tracing::debug;

/// Handle returned by [`EditorStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&EditorState)>;

/// Owns the editor state and its undo/redo history.
pub struct EditorStore {
    state: EditorState,
    history: History<GridState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl EditorStore {
    /// Creates a store with the default history capacity.
    #[must_use]
    pub fn new(initial: EditorState) -> Self {
        Self::with_config(initial, HistoryConfig::default())
    }

    /// Creates a store with an explicit history configuration.
    #[must_use]
    pub fn with_config(initial: EditorState, config: HistoryConfig) -> Self {
        let history: History<GridState> = History::new(initial.grid_state(), config);
        Self {
            state: initial,
            history,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn get_state(&self) -> &EditorState {
        &self.state
    }

    /// Replaces the state and records its grid in the undo history.
    pub fn commit(&mut self, new_state: EditorState) {
        self.history.push(new_state.grid_state());
        self.state = new_state;
        debug!(
            arrangement_id = %self.state.arrangement_id,
            assignments = self.state.assignments.len(),
            history_len = self.history.len(),
            "Committed editor state"
        );
        self.notify();
    }

    /// Replaces the state and starts a new history from it.
    ///
    /// Used when a draft is restored or the editor starts over; there is
    /// nothing meaningful to undo back to across such a boundary.
    pub fn replace(&mut self, new_state: EditorState) {
        self.history.reset(new_state.grid_state());
        self.state = new_state;
        debug!(
            arrangement_id = %self.state.arrangement_id,
            "Replaced editor state"
        );
        self.notify();
    }

    /// Moves to another workflow step without touching the history.
    pub fn set_workflow_step(&mut self, step: WorkflowStep) {
        if self.state.workflow_step == step {
            return;
        }
        self.state.workflow_step = step;
        self.notify();
    }

    /// Commits the result of an emergency change preview as one change.
    ///
    /// # Errors
    ///
    /// Returns an error if the preview is stale, empty, or produces an
    /// invalid grid. The state is left untouched on error.
    pub fn apply_emergency_change(
        &mut self,
        preview: &EmergencyChangePreview,
    ) -> Result<(), CoreError> {
        let next: EditorState = apply_emergency_change(&self.state, preview)?;
        self.commit(next);
        Ok(())
    }

    /// Steps back one committed grid state. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(grid) = self.history.undo().cloned() else {
            return false;
        };
        self.state = self.state.with_grid_state(grid);
        debug!(arrangement_id = %self.state.arrangement_id, "Undo");
        self.notify();
        true
    }

    /// Steps forward one committed grid state. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(grid) = self.history.redo().cloned() else {
            return false;
        };
        self.state = self.state.with_grid_state(grid);
        debug!(arrangement_id = %self.state.arrangement_id, "Redo");
        self.notify();
        true
    }

    /// Returns whether [`EditorStore::undo`] would do anything.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether [`EditorStore::redo`] would do anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Registers a listener called after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&EditorState) + 'static,
    {
        let id: SubscriptionId = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before: usize = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let state: &EditorState = &self.state;
        for (_, listener) in &mut self.listeners {
            listener(state);
        }
    }
}

impl std::fmt::Debug for EditorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorStore")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
