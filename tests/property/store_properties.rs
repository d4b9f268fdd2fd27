//! Property-based tests for `TodoStore` operations.
//!
//! Uses proptest to verify:
//! 1. `add` appends exactly one open task and leaves existing tasks alone.
//! 2. Blank text never mutates the store.
//! 3. `toggle` is an involution touching only the target task.
//! 4. `delete` and `clear_completed` preserve the order of survivors.
//! 5. Stats stay consistent and ids stay unique after any operation sequence.
//! 6. `reorder` is a permutation that keeps hidden tasks in place relative
//!    to each other.

use std::collections::HashSet;

use proptest::prelude::*;
use termtodo_core::{Filter, Stats, StoreError, Task, TaskId, TodoStore};

// --- Strategies ---

/// Strategy for non-blank task text.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,8}[a-zA-Z0-9][a-zA-Z0-9 ]{0,8}"
}

/// Strategy for whitespace-only text.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Active),
        Just(Filter::Completed),
    ]
}

/// Strategy for a store with sequential ids and random completion flags.
fn arb_store() -> impl Strategy<Value = TodoStore> {
    prop::collection::vec((arb_text(), any::<bool>()), 0..12).prop_map(|specs| {
        let tasks = specs
            .into_iter()
            .zip(1u64..)
            .map(|((text, done), id)| {
                let task = Task::new(TaskId::new(id), text);
                if done { task.completed() } else { task }
            })
            .collect();
        TodoStore::from_tasks(tasks).unwrap_or_default()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize),
    ClearCompleted,
    Reorder(usize, usize),
    SetFilter(Filter),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_text().prop_map(Op::Add),
        arb_blank().prop_map(Op::Add),
        (0usize..16).prop_map(Op::Toggle),
        (0usize..16).prop_map(Op::Delete),
        Just(Op::ClearCompleted),
        (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Reorder(a, b)),
        arb_filter().prop_map(Op::SetFilter),
    ]
}

/// Resolves a position to an id, falling back to an id no task has.
fn id_at(store: &TodoStore, pos: usize) -> TaskId {
    store
        .tasks()
        .get(pos)
        .map_or(TaskId::new(u64::MAX), |t| t.id)
}

fn apply(store: &mut TodoStore, op: &Op) {
    match op {
        Op::Add(text) => {
            let _ = store.add(text);
        }
        Op::Toggle(pos) => {
            let id = id_at(store, *pos);
            store.toggle(id);
        }
        Op::Delete(pos) => {
            let id = id_at(store, *pos);
            store.delete(id);
        }
        Op::ClearCompleted => {
            store.clear_completed();
        }
        Op::Reorder(from, to) => {
            store.reorder(*from, *to);
        }
        Op::SetFilter(filter) => store.set_filter(*filter),
    }
}

fn snapshot(store: &TodoStore) -> Vec<(TaskId, String, bool)> {
    store
        .tasks()
        .iter()
        .map(|t| (t.id, t.text.clone(), t.completed))
        .collect()
}

// --- Properties ---

proptest! {
    #[test]
    fn add_appends_one_open_task(mut store in arb_store(), text in arb_text()) {
        let before = snapshot(&store);
        let id = store.add(&text).unwrap();

        prop_assert_eq!(store.len(), before.len() + 1);
        let last = store.tasks().last().unwrap();
        prop_assert_eq!(last.id, id);
        prop_assert_eq!(&last.text, &text);
        prop_assert!(!last.completed);
        prop_assert!(before.iter().all(|(existing, _, _)| *existing != id));
        prop_assert_eq!(&snapshot(&store)[..before.len()], &before[..]);
    }

    #[test]
    fn blank_add_is_rejected(mut store in arb_store(), text in arb_blank()) {
        let before = snapshot(&store);
        prop_assert_eq!(store.add(&text), Err(StoreError::EmptyText));
        prop_assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn toggle_is_an_involution(mut store in arb_store(), pos in 0usize..12) {
        prop_assume!(pos < store.len());
        let before = snapshot(&store);
        let id = store.tasks()[pos].id;

        store.toggle(id);
        for (i, (before_id, _, done)) in before.iter().enumerate() {
            let task = &store.tasks()[i];
            prop_assert_eq!(task.id, *before_id);
            if i == pos {
                prop_assert_eq!(task.completed, !done);
            } else {
                prop_assert_eq!(task.completed, *done);
            }
        }

        store.toggle(id);
        prop_assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn delete_removes_exactly_the_target(mut store in arb_store(), pos in 0usize..12) {
        prop_assume!(pos < store.len());
        let mut expected = snapshot(&store);
        let (id, _, _) = expected.remove(pos);

        prop_assert!(store.delete(id).is_some());
        prop_assert_eq!(snapshot(&store), expected);
        prop_assert!(store.delete(id).is_none());
    }

    #[test]
    fn clear_completed_keeps_active_in_order(mut store in arb_store()) {
        let expected: Vec<_> = snapshot(&store).into_iter().filter(|t| !t.2).collect();
        store.clear_completed();
        prop_assert_eq!(snapshot(&store), expected);
    }

    #[test]
    fn filtered_view_is_ordered_subsequence(store in arb_store(), filter in arb_filter()) {
        let mut store = store;
        store.set_filter(filter);
        let visible: Vec<TaskId> = store.filtered().iter().map(|t| t.id).collect();
        let expected: Vec<TaskId> = store
            .tasks()
            .iter()
            .filter(|t| filter.matches(t))
            .map(|t| t.id)
            .collect();
        prop_assert_eq!(&visible, &expected);
        if filter == Filter::All {
            prop_assert_eq!(visible.len(), store.len());
        }
    }

    #[test]
    fn reorder_moves_within_view_only(
        mut store in arb_store(),
        filter in arb_filter(),
        from in 0usize..12,
        to in 0usize..12,
    ) {
        store.set_filter(filter);
        let before_all: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        let mut expected_view: Vec<TaskId> = store.filtered().iter().map(|t| t.id).collect();
        let hidden_before: Vec<TaskId> = store
            .tasks()
            .iter()
            .filter(|t| !filter.matches(t))
            .map(|t| t.id)
            .collect();

        let changed = store.reorder(from, to);
        let in_range = from < expected_view.len() && to < expected_view.len();
        prop_assert_eq!(changed, in_range && from != to);

        if changed {
            let moved = expected_view.remove(from);
            expected_view.insert(to, moved);
        }
        let view: Vec<TaskId> = store.filtered().iter().map(|t| t.id).collect();
        prop_assert_eq!(view, expected_view);

        let hidden_after: Vec<TaskId> = store
            .tasks()
            .iter()
            .filter(|t| !filter.matches(t))
            .map(|t| t.id)
            .collect();
        prop_assert_eq!(hidden_after, hidden_before);

        let mut sorted_before = before_all;
        let mut sorted_after: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        sorted_before.sort();
        sorted_after.sort();
        prop_assert_eq!(sorted_after, sorted_before);
    }

    #[test]
    fn invariants_hold_after_any_sequence(
        mut store in arb_store(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        for op in &ops {
            apply(&mut store, op);

            let stats = store.stats();
            prop_assert_eq!(stats.total, stats.active + stats.completed);
            prop_assert_eq!(stats, Stats::from_tasks(store.tasks()));

            let ids: HashSet<TaskId> = store.tasks().iter().map(|t| t.id).collect();
            prop_assert_eq!(ids.len(), store.len());
            prop_assert!(store.tasks().iter().all(|t| !t.text.trim().is_empty()));
        }
    }
}
