// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod cascade;
mod error;
mod history;
mod shortcuts;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use cascade::{
    CascadeChange, CascadeMode, CascadeOptions, EmergencyChangePreview, EmergencyTarget,
    GridLayoutChange, MemberRef, RemovedMember, apply_emergency_change, simulate_emergency_change,
    simulate_for_state,
};
pub use error::CoreError;
pub use history::{History, HistoryConfig};
pub use shortcuts::{
    FocusTarget, KeyChord, KeyOutcome, Modifiers, Platform, ShortcutAction, UndoRedoController,
    resolve_shortcut,
};
pub use state::{EditorState, GridState};
pub use store::{EditorStore, SubscriptionId};
