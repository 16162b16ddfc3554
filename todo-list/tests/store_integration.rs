//! Integration tests for the todo list running inside a `Store`
//!
//! Each command goes through validation, event dispatch and state mutation
//! within a single `send`, the way the terminal front end drives it.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use todo_list::view::{self, ViewCommand};
use todo_list::{ListKind, TodoAction, TodoEnvironment, TodoError, TodoListState, TodoReducer, ViewConfig};
use todo_list_runtime::{Store, StoreConfig, StoreError};
use todo_list_testing::test_clock;

type TodoStore = Store<TodoListState, TodoAction, TodoEnvironment, TodoReducer>;

// ============================================================================
// Test Fixtures
// ============================================================================

fn store_with(state: TodoListState) -> TodoStore {
    Store::new(
        state,
        TodoReducer::new(),
        TodoEnvironment::new(Arc::new(test_clock())),
    )
}

fn send_all(store: &mut TodoStore, actions: impl IntoIterator<Item = TodoAction>) {
    for action in actions {
        store.send(action).expect("send should succeed");
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn type_and_add_from_empty() {
    let mut store = store_with(TodoListState::new());

    send_all(
        &mut store,
        [
            TodoAction::SetPendingText {
                text: "buy milk".to_string(),
            },
            TodoAction::Add,
        ],
    );

    let state = store.state_ref();
    assert_eq!(state.incomplete_items(), ["buy milk"]);
    assert!(state.complete_items().is_empty());
    assert_eq!(state.pending_text(), "");
    assert_eq!(state.last_error(), None);
}

#[test]
fn complete_middle_item() {
    let mut store = store_with(TodoListState::from_lists(["a", "b", "c"], Vec::<&str>::new()));

    send_all(&mut store, [TodoAction::Complete { index: 1 }]);

    let state = store.state_ref();
    assert_eq!(state.incomplete_items(), ["a", "c"]);
    assert_eq!(state.complete_items(), ["b"]);
}

#[test]
fn restore_only_complete_item() {
    let mut store = store_with(TodoListState::from_lists(Vec::<&str>::new(), ["x"]));

    send_all(&mut store, [TodoAction::Restore { index: 0 }]);

    let state = store.state_ref();
    assert!(state.complete_items().is_empty());
    assert_eq!(state.incomplete_items(), ["x"]);
}

#[test]
fn delete_on_empty_list_reports_out_of_range() {
    let mut store = store_with(TodoListState::new());

    // The rejection is a domain outcome, not a store failure
    send_all(&mut store, [TodoAction::DeleteIncomplete { index: 0 }]);

    let state = store.state_ref();
    assert!(state.is_empty());
    assert_eq!(state.pending_text(), "");
    assert_eq!(
        state.last_error(),
        Some(&TodoError::IndexOutOfRange {
            list: ListKind::Incomplete,
            index: 0,
            len: 0,
        })
    );
}

#[test]
fn add_with_empty_input_is_silent() {
    let mut store = store_with(TodoListState::from_lists(["a"], ["b"]));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    store.subscribe(move |action: &TodoAction, _: &TodoListState| {
        log.borrow_mut().push(action.clone());
    });

    send_all(&mut store, [TodoAction::Add]);

    assert_eq!(*store.state_ref(), TodoListState::from_lists(["a"], ["b"]));
    // Only the command itself was observed; no event followed
    assert_eq!(*seen.borrow(), vec![TodoAction::Add]);
}

#[test]
fn next_accepted_action_clears_last_error() {
    let mut store = store_with(TodoListState::from_lists(["a"], Vec::<&str>::new()));

    send_all(&mut store, [TodoAction::Restore { index: 0 }]);
    assert!(store.state_ref().last_error().is_some());

    send_all(&mut store, [TodoAction::Complete { index: 0 }]);
    assert_eq!(store.state_ref().last_error(), None);
    assert_eq!(store.state_ref().complete_items(), ["a"]);
}

#[test]
fn duplicate_texts_are_addressed_by_index() {
    let mut store = store_with(TodoListState::new());

    for _ in 0..2 {
        send_all(
            &mut store,
            [
                TodoAction::SetPendingText {
                    text: "same".to_string(),
                },
                TodoAction::Add,
            ],
        );
    }
    send_all(&mut store, [TodoAction::Complete { index: 0 }]);

    let state = store.state_ref();
    assert_eq!(state.incomplete_items(), ["same"]);
    assert_eq!(state.complete_items(), ["same"]);
}

#[test]
fn indices_shift_after_each_mutation() {
    let mut store = store_with(TodoListState::from_lists(["a", "b", "c"], Vec::<&str>::new()));

    // Row 1 is "b"; once it is deleted, row 1 is "c"
    send_all(
        &mut store,
        [
            TodoAction::DeleteIncomplete { index: 1 },
            TodoAction::Complete { index: 1 },
        ],
    );

    let state = store.state_ref();
    assert_eq!(state.incomplete_items(), ["a"]);
    assert_eq!(state.complete_items(), ["c"]);
}

#[test]
fn stale_event_does_not_move_another_item() {
    let mut store = store_with(TodoListState::from_lists(["a", "b"], Vec::<&str>::new()));

    send_all(&mut store, [TodoAction::DeleteIncomplete { index: 0 }]);
    // Replay an event recorded before the delete shifted the rows
    send_all(
        &mut store,
        [TodoAction::TodoCompleted {
            index: 0,
            text: "a".to_string(),
            completed_at: chrono::Utc::now(),
        }],
    );

    let state = store.state_ref();
    assert_eq!(state.incomplete_items(), ["b"]);
    assert!(state.complete_items().is_empty());
    assert!(matches!(
        state.last_error(),
        Some(TodoError::ItemMismatch { index: 0, .. })
    ));
}

// ============================================================================
// View layer
// ============================================================================

#[test]
fn subscriber_sees_each_event_with_updated_state() {
    let mut store = store_with(TodoListState::new());
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    let config = ViewConfig::default();
    store.subscribe(move |action: &TodoAction, state: &TodoListState| {
        if action.is_event() {
            sink.borrow_mut().push(view::render(state, &config));
        }
    });

    let Ok(ViewCommand::Send(actions)) = view::parse_command("add walk dog") else {
        panic!("add should parse");
    };
    send_all(&mut store, actions);

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].starts_with("> walk dog  [add]"));
    assert!(frames[1].contains("  0. walk dog  [done 0] [delete 0]\n"));
    assert!(frames[1].starts_with("> (Enter a todo)"));
}

#[test]
fn unsubscribed_view_stops_rendering() {
    let mut store = store_with(TodoListState::from_lists(["a"], Vec::<&str>::new()));
    let count = Rc::new(RefCell::new(0_usize));
    let counter = Rc::clone(&count);
    let id = store.subscribe(move |_: &TodoAction, _: &TodoListState| {
        *counter.borrow_mut() += 1;
    });

    send_all(&mut store, [TodoAction::Complete { index: 0 }]);
    assert_eq!(*count.borrow(), 2);

    assert!(store.unsubscribe(id));
    send_all(&mut store, [TodoAction::Restore { index: 0 }]);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn dispatch_depth_of_zero_stops_before_events() {
    let mut store = Store::with_config(
        TodoListState::from_lists(["a"], Vec::<&str>::new()),
        TodoReducer::new(),
        TodoEnvironment::new(Arc::new(test_clock())),
        StoreConfig::new(0),
    );

    let result = store.send(TodoAction::Complete { index: 0 });

    assert_eq!(result, Err(StoreError::DispatchDepthExceeded { max_depth: 0 }));
    assert_eq!(store.state_ref().incomplete_items(), ["a"]);
}

#[test]
fn state_serializes_for_the_json_command() {
    let mut store = store_with(TodoListState::from_lists(["a"], ["b"]));
    send_all(&mut store, [TodoAction::DeleteIncomplete { index: 3 }]);

    let json = serde_json::to_value(store.state_ref()).expect("state should serialize");

    assert_eq!(json["incomplete"], serde_json::json!(["a"]));
    assert_eq!(json["complete"], serde_json::json!(["b"]));
    assert_eq!(json["last_error"]["IndexOutOfRange"]["index"], 3);
}
