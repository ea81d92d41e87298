//! Structural deltas emitted after a transition.
//!
//! A [`Delta`] is one visual update: the renderer applies the whole batch at once.
//! Positions follow batch semantics, the same way a table view applies grouped
//! updates:
//!
//! - every [`RowOp::Delete`] indexes the list as it was *before* the batch,
//! - every [`RowOp::Insert`] indexes the list as it is *after* the batch,
//! - deletes are listed before inserts.
//!
//! This matters for single-expansion switches, where the rows of the previously
//! open parent disappear and the rows of the new one appear in the same batch.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One row appearing or disappearing.
pub enum RowOp {
    /// A row appears at this post-batch position.
    Insert(usize),
    /// The row at this pre-batch position disappears.
    Delete(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered batch of row operations.
pub struct Delta {
    ops: Vec<RowOp>,
}

impl Delta {
    #[must_use]
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn inserts(first: usize, count: usize) -> Self {
        Self {
            ops: (first..first + count).map(RowOp::Insert).collect(),
        }
    }

    pub(crate) fn deletes(first: usize, count: usize) -> Self {
        Self {
            ops: (first..first + count).map(RowOp::Delete).collect(),
        }
    }

    /// Appends another batch, keeping deletes ahead of inserts.
    pub(crate) fn merge(&mut self, other: Self) {
        self.ops.extend(other.ops);
        self.ops.sort_by_key(|op| matches!(op, RowOp::Insert(_)));
    }

    #[must_use]
    /// Operations in emission order.
    pub fn ops(&self) -> &[RowOp] {
        &self.ops
    }

    #[must_use]
    /// True when the batch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[must_use]
    /// Number of rows inserted.
    pub fn inserted(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RowOp::Insert(_)))
            .count()
    }

    #[must_use]
    /// Number of rows deleted.
    pub fn deleted(&self) -> usize {
        self.ops.len() - self.inserted()
    }

    /// Row count after applying the batch to a list of `rows` rows.
    ///
    /// Returns `None` if the batch deletes more rows than exist.
    #[must_use]
    pub fn apply_to_count(&self, rows: usize) -> Option<usize> {
        rows.checked_sub(self.deleted())
            .map(|remaining| remaining + self.inserted())
    }

    /// Where a row that sat at `row` before the batch sits afterwards.
    ///
    /// Returns `None` when the row itself was deleted.
    #[must_use]
    pub fn map_row(&self, row: usize) -> Option<usize> {
        let deletes = self.delete_positions();
        if deletes.contains(&row) {
            return None;
        }

        let mut mapped = row - deletes.iter().filter(|&&pos| pos < row).count();
        for pos in self.insert_positions() {
            if pos <= mapped {
                mapped += 1;
            }
        }
        Some(mapped)
    }

    /// Applies the batch to a renderer-side list, using `make` to build each inserted row.
    ///
    /// `make` receives the post-batch position of the row being inserted.
    /// Returns `false`, leaving `rows` untouched, if any position is out of range.
    pub fn apply_to<T>(&self, rows: &mut Vec<T>, mut make: impl FnMut(usize) -> T) -> bool {
        let deletes = self.delete_positions();
        let inserts = self.insert_positions();

        if deletes.last().is_some_and(|&pos| pos >= rows.len()) {
            return false;
        }
        let mut bound = rows.len() - deletes.len();
        for &pos in &inserts {
            if pos > bound {
                return false;
            }
            bound += 1;
        }

        for &pos in deletes.iter().rev() {
            rows.remove(pos);
        }
        for pos in inserts {
            rows.insert(pos, make(pos));
        }
        true
    }

    /// Distinct pre-batch delete positions, ascending.
    fn delete_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .ops
            .iter()
            .filter_map(|op| match op {
                RowOp::Delete(pos) => Some(*pos),
                RowOp::Insert(_) => None,
            })
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// Post-batch insert positions, ascending.
    fn insert_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .ops
            .iter()
            .filter_map(|op| match op {
                RowOp::Insert(pos) => Some(*pos),
                RowOp::Delete(_) => None,
            })
            .collect();
        positions.sort_unstable();
        positions
    }
}

#[cfg(test)]
#[path = "tests/delta.rs"]
mod tests;
