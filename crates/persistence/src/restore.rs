// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resuming from a stored draft.
//!
//! When an arrangement is opened, [`DraftRestore::begin`] checks for a
//! draft. If one exists the caller holds back its normal server-driven
//! initialization and asks the user what to do, then passes the answer to
//! [`DraftRestore::resolve`].

use crate::draft::{Draft, DraftRepository};
use crate::kv::KeyValueStore;
use choir_seat::EditorState;
use tracing::{info, warn};

/// What the caller should do after [`DraftRestore::begin`].
#[derive(Debug, Clone, PartialEq)]
pub enum RestorePrompt {
    /// No usable draft; initialize from the server as usual.
    NoDraft,
    /// A draft exists; ask the user before initializing.
    Prompt(Draft),
}

/// The user's answer to the restore prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreChoice {
    /// Continue from the draft.
    Restore,
    /// Discard the draft and load the server's last saved state.
    UseServerData,
    /// Discard the draft and start the workflow over.
    StartFresh,
}

/// The result of resolving the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    /// Editing continues from this state, taken verbatim from the draft.
    Restored(EditorState),
    /// The draft is gone; initialize from the server.
    UseServerData,
    /// The draft is gone; editing starts from this empty state.
    StartFresh(EditorState),
}

/// Drives the restore prompt against a draft repository.
#[derive(Debug)]
pub struct DraftRestore<'a, S> {
    repository: &'a mut DraftRepository<S>,
}

impl<'a, S: KeyValueStore> DraftRestore<'a, S> {
    /// Creates a restore flow over `repository`.
    pub const fn new(repository: &'a mut DraftRepository<S>) -> Self {
        Self { repository }
    }

    /// Looks for a draft of `arrangement_id`.
    ///
    /// A draft that cannot be read is deleted and reported as absent.
    pub fn begin(&mut self, arrangement_id: &str) -> RestorePrompt {
        match self.repository.load(arrangement_id) {
            Ok(Some(draft)) => {
                info!(
                    arrangement_id,
                    saved_at = %draft.saved_at,
                    "Found a local draft"
                );
                RestorePrompt::Prompt(draft)
            }
            Ok(None) => RestorePrompt::NoDraft,
            Err(err) => {
                warn!(arrangement_id, error = %err, "Discarding unreadable draft");
                self.discard(arrangement_id);
                RestorePrompt::NoDraft
            }
        }
    }

    /// Applies the user's answer for `draft`.
    ///
    /// Closing the prompt without choosing (`None`) counts as
    /// [`RestoreChoice::UseServerData`].
    pub fn resolve(&mut self, draft: Draft, choice: Option<RestoreChoice>) -> RestoreOutcome {
        let choice: RestoreChoice = choice.unwrap_or(RestoreChoice::UseServerData);
        info!(arrangement_id = %draft.arrangement_id, ?choice, "Resolved draft prompt");

        match choice {
            RestoreChoice::Restore => RestoreOutcome::Restored(draft.into_state()),
            RestoreChoice::UseServerData => {
                self.discard(&draft.arrangement_id);
                RestoreOutcome::UseServerData
            }
            RestoreChoice::StartFresh => {
                self.discard(&draft.arrangement_id);
                RestoreOutcome::StartFresh(EditorState::new(&draft.arrangement_id))
            }
        }
    }

    fn discard(&mut self, arrangement_id: &str) {
        if let Err(err) = self.repository.delete(arrangement_id) {
            warn!(arrangement_id, error = %err, "Failed to delete draft");
        }
    }
}
