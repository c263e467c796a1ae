// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Keyboard shortcuts for undo and redo.
//!
//! | Chord                    | Action |
//! |--------------------------|--------|
//! | primary + Z              | undo   |
//! | primary + Shift + Z      | redo   |
//! | primary + Y              | redo   |
//!
//! The primary modifier is Cmd on macOS and Ctrl elsewhere. Shortcuts are
//! ignored while focus is in a text entry element so that the element's own
//! undo keeps working.

use crate::store::EditorStore;
use tracing::debug;

/// Selects the primary modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Cmd is primary.
    MacOs,
    /// Ctrl is primary.
    #[default]
    Other,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Command / Windows key.
    pub meta: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt / Option key.
    pub alt: bool,
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    /// The character produced by the key.
    pub key: char,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyChord {
    /// Creates a chord.
    #[must_use]
    pub const fn new(key: char, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// The element holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Nothing editable is focused.
    Document,
    /// A single-line text input.
    TextInput,
    /// A multi-line text area.
    TextArea,
    /// A content-editable element.
    ContentEditable,
    /// A dropdown.
    Select,
}

impl FocusTarget {
    /// Returns whether this element accepts typed text.
    #[must_use]
    pub const fn accepts_text(&self) -> bool {
        matches!(
            self,
            Self::TextInput | Self::TextArea | Self::ContentEditable
        )
    }
}

/// An action bound to a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Step back in history.
    Undo,
    /// Step forward in history.
    Redo,
}

/// What happened to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key press is not a shortcut here; let it through.
    Ignored,
    /// The key press was a shortcut. `applied` is false if there was
    /// nothing to undo or redo.
    Handled {
        /// The matched action.
        action: ShortcutAction,
        /// Whether the history moved.
        applied: bool,
    },
}

/// Maps a chord to its action, if any.
#[must_use]
pub const fn resolve_shortcut(chord: KeyChord, platform: Platform) -> Option<ShortcutAction> {
    let modifiers: Modifiers = chord.modifiers;
    let primary: bool = match platform {
        Platform::MacOs => modifiers.meta,
        Platform::Other => modifiers.ctrl,
    };
    if !primary || modifiers.alt {
        return None;
    }

    match (chord.key.to_ascii_lowercase(), modifiers.shift) {
        ('z', false) => Some(ShortcutAction::Undo),
        ('z', true) | ('y', false) => Some(ShortcutAction::Redo),
        _ => None,
    }
}

/// Routes undo/redo shortcuts to an [`EditorStore`].
///
/// The controller keeps no history of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UndoRedoController {
    platform: Platform,
}

impl UndoRedoController {
    /// Creates a controller for `platform`.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Handles one key press.
    pub fn handle_key(
        &self,
        chord: KeyChord,
        focus: FocusTarget,
        store: &mut EditorStore,
    ) -> KeyOutcome {
        if focus.accepts_text() {
            return KeyOutcome::Ignored;
        }
        let Some(action) = resolve_shortcut(chord, self.platform) else {
            return KeyOutcome::Ignored;
        };

        let applied: bool = match action {
            ShortcutAction::Undo => store.undo(),
            ShortcutAction::Redo => store.redo(),
        };
        debug!(?action, applied, "Handled history shortcut");
        KeyOutcome::Handled { action, applied }
    }
}
