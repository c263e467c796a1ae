// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{History, HistoryConfig};

fn history_of(capacity: usize) -> History<u32> {
    History::new(0, HistoryConfig { capacity })
}

#[test]
fn test_new_history_has_nothing_to_undo_or_redo() {
    let history: History<u32> = history_of(5);

    assert_eq!(*history.current(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.len(), 1);
    assert!(!history.is_empty());
}

#[test]
fn test_default_capacity_is_fifty() {
    assert_eq!(HistoryConfig::default().capacity, 50);
}

#[test]
fn test_undo_then_redo_walks_the_history() {
    let mut history: History<u32> = history_of(5);
    history.push(1);
    history.push(2);

    assert_eq!(history.undo().copied(), Some(1));
    assert_eq!(history.undo().copied(), Some(0));
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo().copied(), Some(1));
    assert_eq!(history.redo().copied(), Some(2));
    assert_eq!(history.redo(), None);
}

#[test]
fn test_push_after_undo_discards_the_future() {
    let mut history: History<u32> = history_of(5);
    history.push(1);
    history.push(2);
    history.undo();

    history.push(3);

    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert_eq!(history.undo().copied(), Some(1));
}

#[test]
fn test_full_history_drops_the_oldest_state() {
    let mut history: History<u32> = history_of(3);
    for value in 1..=4 {
        history.push(value);
    }

    assert_eq!(history.len(), 3);
    assert_eq!(*history.current(), 4);
    assert_eq!(history.undo().copied(), Some(3));
    assert_eq!(history.undo().copied(), Some(2));
    assert!(!history.can_undo());
}

#[test]
fn test_zero_capacity_keeps_the_current_state() {
    let mut history: History<u32> = history_of(0);
    history.push(7);

    assert_eq!(history.len(), 1);
    assert_eq!(*history.current(), 7);
    assert!(!history.can_undo());
}

#[test]
fn test_reset_starts_over() {
    let mut history: History<u32> = history_of(5);
    history.push(1);
    history.push(2);

    history.reset(9);

    assert_eq!(*history.current(), 9);
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
}
