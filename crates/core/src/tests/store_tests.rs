// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{A, S, create_test_state};
use crate::{EditorState, EditorStore, HistoryConfig, SubscriptionId};
use choir_seat_domain::{SeatAssignment, WorkflowStep};
use std::cell::RefCell;
use std::rc::Rc;

fn without_seat(state: &EditorState, member: &str) -> EditorState {
    let mut next: EditorState = state.clone();
    next.assignments.retain(|a| a.member_id.value() != member);
    next
}

fn counting_listener(store: &mut EditorStore) -> (Rc<RefCell<usize>>, SubscriptionId) {
    let count: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let sink: Rc<RefCell<usize>> = Rc::clone(&count);
    let id: SubscriptionId = store.subscribe(move |_| *sink.borrow_mut() += 1);
    (count, id)
}

#[test]
fn test_commit_then_undo_restores_previous_grid() {
    let initial: EditorState = create_test_state(&[&[S, A], &[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());

    store.commit(without_seat(&initial, "r0c0"));
    assert_eq!(store.get_state().assignments.len(), 3);
    assert!(store.can_undo());

    assert!(store.undo());
    assert_eq!(store.get_state(), &initial);
    assert!(store.can_redo());

    assert!(store.redo());
    assert_eq!(store.get_state().assignments.len(), 3);
}

#[test]
fn test_undo_on_fresh_store_does_nothing() {
    let mut store: EditorStore = EditorStore::new(EditorState::new("arr-1"));

    assert!(!store.undo());
    assert!(!store.redo());
}

#[test]
fn test_commit_after_undo_clears_redo() {
    let initial: EditorState = create_test_state(&[&[S, A], &[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());
    store.commit(without_seat(&initial, "r0c0"));
    store.undo();

    store.commit(without_seat(&initial, "r1c1"));

    assert!(!store.can_redo());
    let remaining: Vec<&str> = store
        .get_state()
        .assignments
        .iter()
        .map(|a: &SeatAssignment| a.member_id.value())
        .collect();
    assert_eq!(remaining, vec!["r0c0", "r0c1", "r1c0"]);
}

#[test]
fn test_history_capacity_bounds_undo_depth() {
    let initial: EditorState = create_test_state(&[&[S, A, S, A]]);
    let mut store: EditorStore = EditorStore::with_config(initial.clone(), HistoryConfig { capacity: 2 });

    let first: EditorState = without_seat(&initial, "r0c0");
    let second: EditorState = without_seat(&first, "r0c1");
    store.commit(first.clone());
    store.commit(second);

    assert!(store.undo());
    assert_eq!(store.get_state(), &first);
    assert!(!store.undo());
}

#[test]
fn test_workflow_step_is_not_undoable() {
    let initial: EditorState = create_test_state(&[&[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());
    store.commit(without_seat(&initial, "r0c1"));

    store.set_workflow_step(WorkflowStep::Review);
    store.undo();

    assert_eq!(store.get_state().workflow_step, WorkflowStep::Review);
    assert_eq!(store.get_state().assignments, initial.assignments);
}

#[test]
fn test_replace_clears_history() {
    let initial: EditorState = create_test_state(&[&[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());
    store.commit(without_seat(&initial, "r0c1"));

    store.replace(EditorState::new("arr-1"));

    assert!(!store.can_undo());
    assert!(store.get_state().assignments.is_empty());
}

#[test]
fn test_listeners_see_every_change() {
    let initial: EditorState = create_test_state(&[&[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());
    let (count, _) = counting_listener(&mut store);

    store.commit(without_seat(&initial, "r0c1"));
    store.undo();
    store.redo();
    store.set_workflow_step(WorkflowStep::Review);
    store.set_workflow_step(WorkflowStep::Review);
    store.replace(initial);

    assert_eq!(*count.borrow(), 5);
}

#[test]
fn test_listener_receives_new_state() {
    let initial: EditorState = create_test_state(&[&[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink: Rc<RefCell<Vec<usize>>> = Rc::clone(&seen);
    store.subscribe(move |state| sink.borrow_mut().push(state.assignments.len()));

    store.commit(without_seat(&initial, "r0c1"));
    store.undo();

    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let initial: EditorState = create_test_state(&[&[S, A]]);
    let mut store: EditorStore = EditorStore::new(initial.clone());
    let (count, id) = counting_listener(&mut store);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.commit(without_seat(&initial, "r0c1"));

    assert_eq!(*count.borrow(), 0);
}
