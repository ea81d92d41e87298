use super::{Delta, RowOp};

#[test]
fn test_inserts_and_deletes_are_consecutive() {
    assert_eq!(
        Delta::inserts(3, 2).ops(),
        &[RowOp::Insert(3), RowOp::Insert(4)]
    );
    assert_eq!(
        Delta::deletes(1, 3).ops(),
        &[RowOp::Delete(1), RowOp::Delete(2), RowOp::Delete(3)]
    );
    assert!(Delta::inserts(5, 0).is_empty());
}

#[test]
fn test_merge_keeps_deletes_first() {
    let mut delta = Delta::inserts(1, 1);
    delta.merge(Delta::deletes(4, 2));
    assert_eq!(
        delta.ops(),
        &[RowOp::Delete(4), RowOp::Delete(5), RowOp::Insert(1)]
    );
    assert_eq!(delta.inserted(), 1);
    assert_eq!(delta.deleted(), 2);
}

#[test]
fn test_apply_to_count() {
    let mut delta = Delta::deletes(1, 2);
    delta.merge(Delta::inserts(2, 3));
    assert_eq!(delta.apply_to_count(5), Some(6));
    assert_eq!(Delta::deletes(0, 4).apply_to_count(3), None);
}

#[test]
fn test_apply_to_uses_batch_positions() {
    // A, a1, a2, B, C  ->  A, B, b1, C
    let mut rows = vec!["A", "a1", "a2", "B", "C"];
    let mut delta = Delta::deletes(1, 2);
    delta.merge(Delta::inserts(2, 1));

    assert!(delta.apply_to(&mut rows, |_| "b1"));
    assert_eq!(rows, vec!["A", "B", "b1", "C"]);
}

#[test]
fn test_apply_to_rejects_out_of_range() {
    let mut rows = vec![1, 2];
    assert!(!Delta::deletes(2, 1).apply_to(&mut rows, |_| 0));
    assert!(!Delta::inserts(4, 1).apply_to(&mut rows, |_| 0));
    assert_eq!(rows, vec![1, 2]);
}

#[test]
fn test_map_row() {
    // Rows 1 and 2 go, then one row appears at post-batch position 2.
    let mut delta = Delta::deletes(1, 2);
    delta.merge(Delta::inserts(2, 1));

    assert_eq!(delta.map_row(0), Some(0));
    assert_eq!(delta.map_row(1), None);
    assert_eq!(delta.map_row(2), None);
    assert_eq!(delta.map_row(3), Some(1));
    assert_eq!(delta.map_row(4), Some(3));
}
