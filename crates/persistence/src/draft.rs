// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draft records and their repository.

use crate::error::PersistenceError;
use crate::kv::KeyValueStore;
use choir_seat::EditorState;
use choir_seat_domain::{GridLayout, LayoutSource, SeatAssignment, WorkflowStep};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};
use xxhash_rust::xxh32::xxh32;

/// Prefix shared by every draft key.
pub const DRAFT_KEY_PREFIX: &str = "choir-seat:draft:";

const CONTENT_HASH_SEED: u32 = 0;

/// Returns the storage key of the draft for `arrangement_id`.
#[must_use]
pub fn draft_key(arrangement_id: &str) -> String {
    format!("{DRAFT_KEY_PREFIX}{arrangement_id}")
}

/// A locally stored snapshot of unsaved edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// The arrangement the edits belong to.
    pub arrangement_id: String,
    /// Workflow step at save time.
    pub workflow_step: WorkflowStep,
    /// Where the layout came from.
    #[serde(default)]
    pub layout_source: LayoutSource,
    /// Grid layout at save time.
    pub grid_layout: Option<GridLayout>,
    /// 0-based assignments at save time.
    pub assignments: Vec<SeatAssignment>,
    /// When the draft was written.
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

impl Draft {
    /// Captures `state` as a draft written at `saved_at`.
    #[must_use]
    pub fn from_state(state: &EditorState, saved_at: OffsetDateTime) -> Self {
        Self {
            arrangement_id: state.arrangement_id.clone(),
            workflow_step: state.workflow_step,
            layout_source: state.layout_source,
            grid_layout: state.grid_layout.clone(),
            assignments: state.assignments.clone(),
            saved_at,
        }
    }

    /// Returns the editor state recorded in the draft, verbatim.
    #[must_use]
    pub fn into_state(self) -> EditorState {
        EditorState {
            arrangement_id: self.arrangement_id,
            workflow_step: self.workflow_step,
            layout_source: self.layout_source,
            grid_layout: self.grid_layout,
            assignments: self.assignments,
        }
    }

    /// Returns whether the draft is older than `ttl` at `now`.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime, ttl: Duration) -> bool {
        now - self.saved_at > ttl
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftContent<'a> {
    workflow_step: WorkflowStep,
    layout_source: LayoutSource,
    grid_layout: Option<&'a GridLayout>,
    assignments: &'a [SeatAssignment],
}

/// Hashes the saved content of `state`: step, layout source, layout and
/// assignments.
///
/// Two states with the same hash produce the same draft apart from its
/// timestamp.
///
/// # Errors
///
/// Returns an error if the state cannot be serialized.
pub fn content_hash(state: &EditorState) -> Result<u32, PersistenceError> {
    let content: DraftContent<'_> = DraftContent {
        workflow_step: state.workflow_step,
        layout_source: state.layout_source,
        grid_layout: state.grid_layout.as_ref(),
        assignments: &state.assignments,
    };
    let bytes: Vec<u8> = serde_json::to_vec(&content)?;
    Ok(xxh32(&bytes, CONTENT_HASH_SEED))
}

/// Result of a draft sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Drafts removed for age.
    pub expired: usize,
    /// Entries removed because they could not be read as drafts.
    pub unreadable: usize,
    /// Drafts left in place.
    pub kept: usize,
}

/// Reads and writes drafts in a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRepository<S> {
    store: S,
}

impl<S: KeyValueStore> DraftRepository<S> {
    /// Wraps `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store mutably.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Writes `draft`, replacing any earlier draft for its arrangement.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be serialized or stored.
    pub fn save(&mut self, draft: &Draft) -> Result<(), PersistenceError> {
        let value: String = serde_json::to_string(draft)?;
        self.store.set(&draft_key(&draft.arrangement_id), &value)?;
        debug!(
            arrangement_id = %draft.arrangement_id,
            bytes = value.len(),
            "Saved draft"
        );
        Ok(())
    }

    /// Reads the draft for `arrangement_id`.
    ///
    /// # Returns
    ///
    /// `None` if no draft is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails, or the stored value is not a
    /// draft for `arrangement_id`.
    pub fn load(&self, arrangement_id: &str) -> Result<Option<Draft>, PersistenceError> {
        let Some(value) = self.store.get(&draft_key(arrangement_id))? else {
            return Ok(None);
        };
        let draft: Draft = serde_json::from_str(&value)?;
        if draft.arrangement_id != arrangement_id {
            return Err(PersistenceError::ArrangementMismatch {
                expected: arrangement_id.to_string(),
                found: draft.arrangement_id,
            });
        }
        Ok(Some(draft))
    }

    /// Removes the draft for `arrangement_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn delete(&mut self, arrangement_id: &str) -> Result<(), PersistenceError> {
        self.store.delete(&draft_key(arrangement_id))?;
        debug!(arrangement_id, "Deleted draft");
        Ok(())
    }

    /// Removes drafts older than `ttl` and entries under the draft prefix
    /// that are not readable drafts. Keys outside the prefix are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed or an entry cannot be
    /// removed.
    pub fn sweep_expired(
        &mut self,
        now: OffsetDateTime,
        ttl: Duration,
    ) -> Result<SweepReport, PersistenceError> {
        let mut report: SweepReport = SweepReport::default();
        let keys: Vec<String> = self.store.list_keys()?;

        for key in keys.iter().filter(|k| k.starts_with(DRAFT_KEY_PREFIX)) {
            let parsed: Option<Draft> = self
                .store
                .get(key)?
                .and_then(|value| serde_json::from_str::<Draft>(&value).ok());
            match parsed {
                Some(draft) if draft.is_expired(now, ttl) => {
                    self.store.delete(key)?;
                    report.expired += 1;
                }
                Some(_) => report.kept += 1,
                None => {
                    warn!(key = %key, "Removing unreadable draft entry");
                    self.store.delete(key)?;
                    report.unreadable += 1;
                }
            }
        }

        info!(
            expired = report.expired,
            unreadable = report.unreadable,
            kept = report.kept,
            "Swept stored drafts"
        );
        Ok(report)
    }
}
