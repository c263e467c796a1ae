// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local draft persistence for the seat editor.
//!
//! Unsaved edits are shadowed into a key-value store so that a reload does
//! not lose work. The crate is split into:
//!
//! - `kv`: the [`KeyValueStore`] trait with memory and file backends
//! - `draft`: the [`Draft`] record and the [`DraftRepository`] over a store
//! - `scheduler`: debounce and interval timing over explicit time
//! - `autosave`: the [`Autosaver`] that turns state changes into writes
//! - `restore`: the prompt flow run when an arrangement is opened
//!
//! ## Time
//!
//! Nothing here reads a clock. Every time-dependent call takes the current
//! `OffsetDateTime`, so tests drive time explicitly.
//!
//! ## Failure policy
//!
//! The repository returns errors. The autosaver and restore flow log them
//! and carry on.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod autosave;
mod config;
mod draft;
mod error;
mod kv;
mod restore;
mod scheduler;

#[cfg(test)]
mod tests;

pub use autosave::{Autosaver, ObserveOutcome};
pub use config::{AutosaveConfig, DEFAULT_DEBOUNCE, DEFAULT_DRAFT_TTL, DEFAULT_INTERVAL};
pub use draft::{DRAFT_KEY_PREFIX, Draft, DraftRepository, SweepReport, content_hash, draft_key};
pub use error::{PersistenceError, StorageError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use restore::{DraftRestore, RestoreChoice, RestoreOutcome, RestorePrompt};
pub use scheduler::{AutosaveScheduler, Trigger};
