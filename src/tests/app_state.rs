use super::{AppState, Selection};
use crate::controller::{FlattenedListController, RowHeights};
use crate::policy::ExpansionPolicy;
use crate::tree::{ParentNode, TreeModel};

fn app(policy: ExpansionPolicy) -> AppState {
    let model = TreeModel::new(vec![
        ParentNode::new("A", ["a1", "a2"]),
        ParentNode::new("B", Vec::<String>::new()),
        ParentNode::new("C", ["c1", "c2", "c3"]),
    ]);
    AppState::new(
        FlattenedListController::new(model, policy),
        RowHeights::default(),
        4,
    )
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut app = app(ExpansionPolicy::SingleExpanded);
    app.move_up();
    assert_eq!(app.cursor, 0);
    for _ in 0..10 {
        app.move_down();
    }
    assert_eq!(app.cursor, 2);
    app.move_to_first();
    assert_eq!(app.cursor, 0);
    app.move_to_last();
    assert_eq!(app.cursor, 2);
}

#[test]
fn test_expand_keeps_cursor_on_header() {
    let mut app = app(ExpansionPolicy::SingleExpanded);
    app.activate_current();

    assert_eq!(app.rendered_rows, 5);
    assert_eq!(app.cursor, 0);
}

#[test]
fn test_switch_moves_cursor_with_header() {
    let mut app = app(ExpansionPolicy::SingleExpanded);
    app.activate_current();

    // C's header is at row 4 while A is open.
    app.move_to_last();
    assert_eq!(app.cursor, 4);
    app.activate_current();

    assert_eq!(app.controller.expanded_parents(), vec![2]);
    assert_eq!(app.rendered_rows, 6);
    assert_eq!(app.cursor, 2, "Cursor follows C after A's rows vanish");
}

#[test]
fn test_child_activation_records_selection() {
    let mut app = app(ExpansionPolicy::MultipleExpanded);
    app.activate_current();
    app.move_down();
    app.move_down();
    app.activate_current();

    assert_eq!(
        app.selection,
        Some(Selection {
            parent: "A".to_string(),
            child: "a2".to_string(),
        })
    );
    assert_eq!(app.message.as_deref(), Some("Selected A > a2"));
    assert_eq!(app.rendered_rows, 5);
}

#[test]
fn test_collapse_all_moves_cursor_to_owner() {
    let mut app = app(ExpansionPolicy::MultipleExpanded);
    app.activate_current();
    app.move_to_last();
    app.activate_current();
    // A a1 a2 B C c1 c2 c3, cursor onto c2
    app.cursor = 6;

    app.collapse_all();

    assert_eq!(app.rendered_rows, 3);
    assert_eq!(app.cursor, 2);
    assert_eq!(app.controller.row_count(), 3);
}
