use gutter_core::{
    Location, Message, MessageStore, NavigationError, NavigationOutcome, OwnerNavigationIndex,
    Severity, UnderflowWrap,
};
use pretty_assertions::assert_eq;

fn lint_store(count: usize) -> MessageStore {
    let mut store = MessageStore::new();
    for i in 0..count {
        store.add_message(Message::at_line(
            "lint",
            format!("message {i}"),
            10 * (i + 1),
            Severity::Warning,
        ));
    }
    store
}

fn cursor(index: &OwnerNavigationIndex, owner: &str) -> Option<usize> {
    index.navigation(owner).and_then(|n| n.cursor())
}

#[test]
fn test_navigation_requires_initialization() {
    let mut index = OwnerNavigationIndex::new();

    let err = index.navigate_next("lint").unwrap_err();
    assert_eq!(
        err,
        NavigationError::NotInitialized {
            owner: "lint".to_string()
        }
    );
    assert_eq!(err.to_string(), "No linting was done yet");

    let err = index.navigate_previous("lint").unwrap_err();
    assert_eq!(err.to_string(), "No linting was done yet");
}

#[test]
fn test_empty_snapshot_reports_no_messages() {
    let mut store = MessageStore::new();
    store.add_message(Message::at_line("build", "b1", 1, Severity::Error));

    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");

    let err = index.navigate_next("lint").unwrap_err();
    assert_eq!(
        err,
        NavigationError::NoMessages {
            owner: "lint".to_string()
        }
    );
    assert_eq!(err.to_string(), "The linting did not output messages");
    assert_eq!(cursor(&index, "lint"), None);
}

#[test]
fn test_forward_wraparound() {
    let store = lint_store(3);
    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(index.navigate_next("lint").unwrap().index);
    }
    assert_eq!(seen, vec![0, 1, 2, 0]);
    assert_eq!(cursor(&index, "lint"), Some(0));
}

#[test]
fn test_backward_underflow_stays_on_first_by_default() {
    let store = lint_store(3);
    let mut index = OwnerNavigationIndex::new();
    assert_eq!(index.underflow_wrap(), UnderflowWrap::First);
    index.initialize_owner_navigation(&store, "lint");

    assert_eq!(index.navigate_next("lint").unwrap().index, 0);
    assert_eq!(index.navigate_previous("lint").unwrap().index, 0);
    assert_eq!(cursor(&index, "lint"), Some(0));

    index.navigate_next("lint").unwrap();
    index.navigate_next("lint").unwrap();
    assert_eq!(index.navigate_previous("lint").unwrap().index, 1);
}

#[test]
fn test_backward_underflow_wraps_to_last_when_configured() {
    let store = lint_store(3);
    let mut index = OwnerNavigationIndex::with_underflow_wrap(UnderflowWrap::Last);
    index.initialize_owner_navigation(&store, "lint");

    assert_eq!(index.navigate_next("lint").unwrap().index, 0);
    assert_eq!(index.navigate_previous("lint").unwrap().index, 2);
    assert_eq!(index.navigate_next("lint").unwrap().index, 0);
}

#[test]
fn test_status_text_is_one_based() {
    let store = lint_store(3);
    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");

    index.navigate_next("lint").unwrap();
    index.navigate_next("lint").unwrap();
    let jump = index.navigate_next("lint").unwrap();
    assert_eq!(jump.index, 2);
    assert_eq!(jump.status_text(), "Jumped to message number 3");
}

#[test]
fn test_snapshot_is_not_live() {
    let mut store = lint_store(2);
    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");

    store.add_message(Message::at_line("lint", "late", 99, Severity::Error));
    store.clear_messages("lint");

    assert_eq!(index.navigation("lint").map(|n| n.len()), Some(2));
    let jump = index.navigate_next("lint").unwrap();
    assert_eq!(jump.message.text, "message 0");

    index.initialize_owner_navigation(&store, "lint");
    assert_eq!(index.navigation("lint").map(|n| n.len()), Some(0));
}

#[test]
fn test_reinitialization_resets_cursor() {
    let mut store = lint_store(3);
    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");
    index.navigate_next("lint").unwrap();
    index.navigate_next("lint").unwrap();
    assert_eq!(cursor(&index, "lint"), Some(1));

    store.add_message(Message::at_line("lint", "extra", 100, Severity::Info));
    index.initialize_owner_navigation(&store, "lint");

    assert_eq!(cursor(&index, "lint"), None);
    assert_eq!(index.navigation("lint").map(|n| n.len()), Some(4));
    assert_eq!(index.navigate_next("lint").unwrap().index, 0);
}

#[test]
fn test_owners_navigate_independently() {
    let mut store = MessageStore::new();
    store.add_message(Message::at_line("lint", "l1", 1, Severity::Info));
    store.add_message(Message::at_line("build", "b1", 2, Severity::Error));
    store.add_message(Message::at_line("lint", "l2", 3, Severity::Info));
    store.add_message(Message::at_line("build", "b2", 4, Severity::Error));

    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");
    index.initialize_owner_navigation(&store, "build");

    assert_eq!(index.navigate_next("lint").unwrap().message.text, "l1");
    assert_eq!(index.navigate_next("lint").unwrap().message.text, "l2");
    assert_eq!(index.navigate_next("build").unwrap().message.text, "b1");
    assert_eq!(cursor(&index, "lint"), Some(1));
    assert_eq!(cursor(&index, "build"), Some(0));
}

#[test]
fn test_lint_scenario_end_to_end() {
    let mut store = MessageStore::new();
    store.add_message(Message::at_line("lint", "info", 2, Severity::Info));
    store.add_message(Message::at_line("lint", "warning", 5, Severity::Warning));
    store.add_message(Message::at_line("lint", "error", 9, Severity::Error));

    let mut index = OwnerNavigationIndex::new();
    index.initialize_owner_navigation(&store, "lint");

    let outcome = NavigationOutcome::from(index.navigate_next("lint"));
    assert_eq!(
        outcome,
        NavigationOutcome {
            ok: true,
            location: Some(Location::new(-1, 1)),
            status_text: "Jumped to message number 1".to_string(),
        }
    );

    let outcome = NavigationOutcome::from(index.navigate_next("lint"));
    assert_eq!(outcome.location, Some(Location::new(-1, 4)));
    assert_eq!(outcome.status_text, "Jumped to message number 2");

    let outcome = NavigationOutcome::from(index.navigate_previous("lint"));
    assert_eq!(outcome.location, Some(Location::new(-1, 1)));
    assert_eq!(outcome.status_text, "Jumped to message number 1");
}
