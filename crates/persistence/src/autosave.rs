// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Debounced draft autosave.
//!
//! The [`Autosaver`] shadows editor commits into local storage. Rapid edits
//! are coalesced by the debounce window; a periodic forced write makes sure
//! an editor that never goes quiet still gets saved. Storage failures are
//! logged and dropped: a draft is a convenience and must never interrupt
//! editing.

use crate::config::AutosaveConfig;
use crate::draft::{Draft, DraftRepository, content_hash};
use crate::kv::KeyValueStore;
use crate::scheduler::{AutosaveScheduler, Trigger};
use choir_seat::EditorState;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// What [`Autosaver::observe`] did with a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveOutcome {
    /// The state is a fresh session with nothing worth saving.
    Suppressed,
    /// The state matches the last written draft.
    Unchanged,
    /// A write is scheduled.
    Scheduled,
}

/// Writes drafts for one arrangement.
#[derive(Debug)]
pub struct Autosaver<S> {
    repository: DraftRepository<S>,
    scheduler: AutosaveScheduler,
    latest: Option<EditorState>,
    latest_hash: Option<u32>,
    written_hash: Option<u32>,
    edited: bool,
}

impl<S: KeyValueStore> Autosaver<S> {
    /// Creates an autosaver whose backup ticker starts at `now`.
    pub fn new(
        repository: DraftRepository<S>,
        config: &AutosaveConfig,
        now: OffsetDateTime,
    ) -> Self {
        let mut scheduler: AutosaveScheduler = AutosaveScheduler::new(config);
        scheduler.start(now);
        Self {
            repository,
            scheduler,
            latest: None,
            latest_hash: None,
            written_hash: None,
            edited: false,
        }
    }

    /// Returns the draft repository.
    pub const fn repository(&self) -> &DraftRepository<S> {
        &self.repository
    }

    /// Unwraps the draft repository.
    pub fn into_repository(self) -> DraftRepository<S> {
        self.repository
    }

    /// Returns the scheduler.
    pub const fn scheduler(&self) -> &AutosaveScheduler {
        &self.scheduler
    }

    /// Records `state` as already stored, e.g. after restoring it from a
    /// draft, so that observing it again does not rewrite it.
    pub fn mark_saved(&mut self, state: &EditorState) {
        self.written_hash = content_hash(state).ok();
        self.latest_hash = self.written_hash;
        self.latest = Some(state.clone());
        self.edited = true;
        self.scheduler.cancel();
    }

    /// Notes a state change made at `now`.
    ///
    /// Until the first real edit, a fresh session is never saved, so that
    /// opening an arrangement does not overwrite a real draft with an empty
    /// one. Once something has been edited, going back to a fresh-looking
    /// state is an ordinary change and is saved. A state identical to
    /// the last written draft drops any pending write. Anything else
    /// schedules a write after the debounce period, superseding any write
    /// already scheduled.
    pub fn observe(&mut self, state: &EditorState, now: OffsetDateTime) -> ObserveOutcome {
        if !self.edited && state.is_pristine() {
            return ObserveOutcome::Suppressed;
        }
        self.edited = true;

        let hash: Option<u32> = match content_hash(state) {
            Ok(hash) => Some(hash),
            Err(err) => {
                warn!(error = %err, "Failed to hash editor state; scheduling a write anyway");
                None
            }
        };
        self.latest = Some(state.clone());
        self.latest_hash = hash;

        if hash.is_some() && hash == self.written_hash {
            self.scheduler.cancel();
            return ObserveOutcome::Unchanged;
        }

        self.scheduler.schedule(now);
        ObserveOutcome::Scheduled
    }

    /// Runs every write due at `now`.
    ///
    /// # Returns
    ///
    /// The triggers whose writes succeeded.
    pub fn advance(&mut self, now: OffsetDateTime) -> Vec<Trigger> {
        self.scheduler
            .poll(now)
            .into_iter()
            .filter(|&trigger| self.write_latest(now, trigger))
            .collect()
    }

    /// Writes the latest state unconditionally because the editor is
    /// closing, then stops the ticker. Returns whether a draft was written.
    pub fn flush_on_unload(&mut self, now: OffsetDateTime) -> bool {
        self.scheduler.cancel();
        let written: bool = self.write_latest(now, Trigger::Unload);
        self.scheduler.stop();
        written
    }

    fn write_latest(&mut self, now: OffsetDateTime, trigger: Trigger) -> bool {
        let Some(state) = self.latest.as_ref() else {
            return false;
        };
        let draft: Draft = Draft::from_state(state, now);
        match self.repository.save(&draft) {
            Ok(()) => {
                self.written_hash = self.latest_hash;
                debug!(
                    arrangement_id = %draft.arrangement_id,
                    ?trigger,
                    "Autosaved draft"
                );
                true
            }
            Err(err) => {
                warn!(
                    arrangement_id = %draft.arrangement_id,
                    ?trigger,
                    error = %err,
                    "Autosave failed; continuing without a draft"
                );
                false
            }
        }
    }
}
