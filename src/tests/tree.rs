use super::{NodeState, ParentNode, TreeModel};
use crate::error::{IndexKind, ListError};

fn model() -> TreeModel {
    TreeModel::new(vec![
        ParentNode::new("A", ["a1", "a2"]),
        ParentNode::new("B", Vec::<String>::new()),
        ParentNode::new("C", ["c1", "c2", "c3"]),
    ])
}

#[test]
fn test_new_nodes_start_collapsed() {
    let tree = model();
    assert_eq!(tree.node_count(), 3);
    assert!(tree.nodes().iter().all(|n| n.state == NodeState::Collapsed));
    assert_eq!(tree.visible_rows(), 3);
}

#[test]
fn test_node_out_of_range() {
    let tree = model();
    assert_eq!(tree.node(2).unwrap().title, "C");
    assert_eq!(
        tree.node(3).unwrap_err(),
        ListError::IndexOutOfRange {
            kind: IndexKind::Parent,
            index: 3,
            len: 3
        }
    );
}

#[test]
fn test_set_state_changes_only_that_node() {
    let mut tree = model();
    tree.set_state(2, NodeState::Expanded).unwrap();

    assert!(tree.node(2).unwrap().is_expanded());
    assert!(!tree.node(0).unwrap().is_expanded());
    assert_eq!(tree.node(2).unwrap().row_span(), 4);
    assert_eq!(tree.visible_rows(), 6);
    assert_eq!(tree.nodes()[0].title, "A", "Order must not change");
}

#[test]
fn test_set_state_out_of_range_leaves_tree_alone() {
    let mut tree = model();
    assert!(tree.set_state(7, NodeState::Expanded).is_err());
    assert_eq!(tree.visible_rows(), 3);
}

#[test]
fn test_empty_parent_span() {
    let mut tree = model();
    tree.set_state(1, NodeState::Expanded).unwrap();
    assert_eq!(tree.node(1).unwrap().row_span(), 1);
}
