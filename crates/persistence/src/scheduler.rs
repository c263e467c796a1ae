// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Autosave timing over explicit time.
//!
//! The scheduler owns no clock. Callers pass the current time to every
//! method and the scheduler answers which triggers are due. It holds:
//!
//! - one pending-write slot, set by [`AutosaveScheduler::schedule`] and
//!   superseded by every later call
//! - a periodic ticker started with [`AutosaveScheduler::start`]
//!
//! An interval tick cancels the pending write, since the forced write
//! covers it. Ticks missed while the caller was not polling are skipped
//! rather than replayed.

use crate::config::AutosaveConfig;
use time::{Duration, OffsetDateTime};

/// A reason to write a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The quiet period after an edit elapsed.
    Debounce,
    /// The periodic backup tick fired.
    Interval,
    /// The editor is closing. Never produced by the scheduler itself.
    Unload,
}

/// Pending-write slot plus periodic ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutosaveScheduler {
    debounce: Duration,
    interval: Duration,
    pending: Option<OffsetDateTime>,
    next_tick: Option<OffsetDateTime>,
}

impl AutosaveScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub const fn new(config: &AutosaveConfig) -> Self {
        Self {
            debounce: config.debounce,
            interval: config.interval,
            pending: None,
            next_tick: None,
        }
    }

    /// Starts the ticker; the first tick is due one interval after `now`.
    ///
    /// Does nothing when the interval is not positive.
    pub fn start(&mut self, now: OffsetDateTime) {
        self.next_tick = if self.interval.is_positive() {
            Some(now + self.interval)
        } else {
            None
        };
    }

    /// Stops the ticker and drops any pending write.
    pub const fn stop(&mut self) {
        self.next_tick = None;
        self.pending = None;
    }

    /// Schedules a write one debounce period after `now`, replacing any
    /// write already scheduled.
    pub fn schedule(&mut self, now: OffsetDateTime) {
        self.pending = Some(now + self.debounce);
    }

    /// Drops the pending write. Returns whether there was one.
    pub const fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns when the pending write is due.
    #[must_use]
    pub const fn pending_due(&self) -> Option<OffsetDateTime> {
        self.pending
    }

    /// Returns when the ticker next fires.
    #[must_use]
    pub const fn next_tick(&self) -> Option<OffsetDateTime> {
        self.next_tick
    }

    /// Returns the triggers due at `now`, in the order they came due, and
    /// consumes them.
    pub fn poll(&mut self, now: OffsetDateTime) -> Vec<Trigger> {
        let debounce_due: Option<OffsetDateTime> = self.pending.filter(|due| *due <= now);
        let tick_due: Option<OffsetDateTime> = self.next_tick.filter(|due| *due <= now);

        let fired: Vec<Trigger> = match (debounce_due, tick_due) {
            (Some(debounce), Some(tick)) if debounce < tick => {
                vec![Trigger::Debounce, Trigger::Interval]
            }
            (_, Some(_)) => vec![Trigger::Interval],
            (Some(_), None) => vec![Trigger::Debounce],
            (None, None) => Vec::new(),
        };

        if !fired.is_empty() {
            self.pending = None;
        }
        if let Some(mut next) = tick_due {
            while next <= now {
                next += self.interval;
            }
            self.next_tick = Some(next);
        }
        fired
    }
}
