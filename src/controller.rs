//! The core state machine translating flat rows into tree coordinates.
//!
//! A renderer only ever sees a flat list of rows. The controller owns the tree
//! and two caches derived from it: the visible row count and, under
//! [`ExpansionPolicy::SingleExpanded`], the position of the one open parent. Every
//! transition updates the tree and both caches together and hands back a
//! [`Delta`] describing how the flat list changed, so the renderer never has to
//! diff anything itself.
//!
//! ```text
//! row 0  ▾ Fruit        parent 0 (expanded, header row 0)
//! row 1      Apple      parent 0, child 0
//! row 2      Pear       parent 0, child 1
//! row 3  ▸ Vegetables   parent 1 (collapsed, header row 3)
//! row 4  ▸ Grains       parent 2 (collapsed, header row 4)
//! ```

use crate::delta::Delta;
use crate::error::ListError;
use crate::policy::ExpansionPolicy;
use crate::tree::{NodeState, ParentNode, TreeModel};
use log::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Tree coordinates of a flat row.
pub struct Location {
    /// Index of the owning parent.
    pub parent: usize,
    /// True when the row is the parent's own header.
    pub is_parent_row: bool,
    /// Flat row of the owning parent's header.
    pub parent_row: usize,
}

impl Location {
    #[must_use]
    /// Child index of `row` within its parent, or `None` for a header row.
    pub fn child_offset(&self, row: usize) -> Option<usize> {
        (!self.is_parent_row).then(|| row - self.parent_row - 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Text to draw for a row.
pub enum RowContent<'a> {
    /// Header row showing the parent's title.
    ParentLabel(&'a str),
    /// Leaf row showing the child's text.
    ChildLabel(&'a str),
}

impl<'a> RowContent<'a> {
    #[must_use]
    /// The label text regardless of row kind.
    pub fn text(&self) -> &'a str {
        match *self {
            Self::ParentLabel(text) | Self::ChildLabel(text) => text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One entry of [`FlattenedListController::rows`].
pub struct VisibleRow<'a> {
    /// What the row shows.
    pub content: RowContent<'a>,
    /// Owning parent.
    pub parent: usize,
    /// Whether the owning parent is expanded.
    pub expanded: bool,
}

impl VisibleRow<'_> {
    #[must_use]
    /// Layout class of the row.
    pub fn kind(&self) -> RowKind {
        match self.content {
            RowContent::ParentLabel(_) => RowKind::ParentRow,
            RowContent::ChildLabel(_) => RowKind::ChildRow,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Layout class of a row.
pub enum RowKind {
    /// A parent header.
    ParentRow,
    /// A child leaf.
    ChildRow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Row heights per layout class, in whatever unit the renderer draws in.
pub struct RowHeights {
    /// Height of a parent header row.
    pub parent: u16,
    /// Height of a child row.
    pub child: u16,
}

impl Default for RowHeights {
    fn default() -> Self {
        Self {
            parent: 2,
            child: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of activating a row.
pub enum Activation {
    /// A collapsed parent opened.
    Expanded {
        /// The parent that opened.
        parent: usize,
        /// Rows inserted for its children.
        delta: Delta,
    },
    /// An expanded parent closed.
    Collapsed {
        /// The parent that closed.
        parent: usize,
        /// Rows deleted for its children.
        delta: Delta,
    },
    /// Single expansion moved from one parent to another.
    Switched {
        /// The previously open parent, now forced closed.
        collapsed: usize,
        /// The parent that opened.
        expanded: usize,
        /// Deletes for the old children followed by inserts for the new ones.
        delta: Delta,
    },
    /// A leaf row was activated; nothing changed.
    ChildSelected {
        /// Owning parent.
        parent: usize,
        /// Child index within the parent.
        child: usize,
        /// The owning parent's title.
        parent_title: String,
        /// The child's text.
        text: String,
    },
}

impl Activation {
    #[must_use]
    /// Structural change to apply, or `None` for a leaf selection.
    pub fn delta(&self) -> Option<&Delta> {
        match self {
            Self::Expanded { delta, .. }
            | Self::Collapsed { delta, .. }
            | Self::Switched { delta, .. } => Some(delta),
            Self::ChildSelected { .. } => None,
        }
    }
}

#[derive(Clone, Debug)]
/// Owns the tree and keeps the flat row mapping consistent across transitions.
pub struct FlattenedListController {
    model: TreeModel,
    policy: ExpansionPolicy,
    total: usize,
    last_expanded: Option<(usize, usize)>,
}

impl FlattenedListController {
    #[must_use]
    /// Builds a controller over `model`, which is taken as given.
    ///
    /// Under [`ExpansionPolicy::SingleExpanded`] a model that arrives with more than
    /// one expanded parent is collapsed down to its first expanded parent so the
    /// exclusivity rule holds from the start.
    pub fn new(mut model: TreeModel, policy: ExpansionPolicy) -> Self {
        let mut last_expanded = None;
        if policy == ExpansionPolicy::SingleExpanded {
            let expanded: Vec<usize> = model
                .nodes()
                .iter()
                .enumerate()
                .filter(|(_, node)| node.is_expanded())
                .map(|(i, _)| i)
                .collect();
            for &extra in expanded.iter().skip(1) {
                // In range: the index came from enumerating the same nodes.
                let _ = model.set_state(extra, NodeState::Collapsed);
            }
            // Everything above the first expanded parent is collapsed, so its header row is its index.
            last_expanded = expanded.first().map(|&first| (first, first));
        }
        let total = model.visible_rows();
        Self {
            model,
            policy,
            total,
            last_expanded,
        }
    }

    #[must_use]
    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.total
    }

    #[must_use]
    /// The expansion policy fixed at construction.
    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    #[must_use]
    /// Read access to the underlying tree.
    pub fn model(&self) -> &TreeModel {
        &self.model
    }

    #[must_use]
    /// Header row and index of the open parent under single expansion.
    pub fn last_expanded(&self) -> Option<(usize, usize)> {
        self.last_expanded
    }

    #[must_use]
    /// Indices of all expanded parents, ascending.
    pub fn expanded_parents(&self) -> Vec<usize> {
        self.model
            .nodes()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_expanded())
            .map(|(i, _)| i)
            .collect()
    }

    /// Resolves a flat row to its owning parent.
    ///
    /// Walks the parents in order, summing the rows each one occupies, until the
    /// running total passes `row`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `row` is not below [`Self::row_count`].
    pub fn locate(&self, row: usize) -> Result<Location, ListError> {
        if row >= self.total {
            return Err(ListError::row(row, self.total));
        }

        let mut position = 0;
        for (parent, node) in self.model.nodes().iter().enumerate() {
            let span = node.row_span();
            if row < position + span {
                return Ok(Location {
                    parent,
                    is_parent_row: row == position,
                    parent_row: position,
                });
            }
            position += span;
        }

        // Only reachable if the cached total drifted from the tree.
        Err(ListError::row(row, position))
    }

    /// Flat row of a parent's header under the current state.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `parent` is not a valid parent index.
    pub fn parent_row(&self, parent: usize) -> Result<usize, ListError> {
        self.model.node(parent)?;
        Ok(self.model.nodes()[..parent]
            .iter()
            .map(ParentNode::row_span)
            .sum())
    }

    /// Flat row of a header (`child == None`) or of a visible child; the inverse of [`Self::locate`].
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] for a bad parent or child index, and
    /// [`ListError::InvalidTransition`] when asking for a child of a collapsed parent,
    /// whose rows are not visible.
    pub fn row_of(&self, parent: usize, child: Option<usize>) -> Result<usize, ListError> {
        let header = self.parent_row(parent)?;
        let Some(child) = child else {
            return Ok(header);
        };
        let node = self.model.node(parent)?;
        if child >= node.children.len() {
            return Err(ListError::child(child, node.children.len()));
        }
        if !node.is_expanded() {
            return Err(ListError::InvalidTransition {
                parent,
                from: node.state,
            });
        }
        Ok(header + 1 + child)
    }

    /// What to draw at `row`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `row` is not below [`Self::row_count`].
    pub fn content(&self, row: usize) -> Result<RowContent<'_>, ListError> {
        let location = self.locate(row)?;
        let node = self.model.node(location.parent)?;
        Ok(match location.child_offset(row) {
            None => RowContent::ParentLabel(&node.title),
            Some(child) => RowContent::ChildLabel(&node.children[child]),
        })
    }

    /// Layout class of `row`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `row` is not below [`Self::row_count`].
    pub fn row_kind(&self, row: usize) -> Result<RowKind, ListError> {
        Ok(if self.locate(row)?.is_parent_row {
            RowKind::ParentRow
        } else {
            RowKind::ChildRow
        })
    }

    /// Height of `row` given per-kind heights.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `row` is not below [`Self::row_count`].
    pub fn row_height(&self, row: usize, heights: &RowHeights) -> Result<u16, ListError> {
        Ok(match self.row_kind(row)? {
            RowKind::ParentRow => heights.parent,
            RowKind::ChildRow => heights.child,
        })
    }

    /// Visible rows in order, without re-running [`Self::locate`] per row.
    pub fn rows(&self) -> impl Iterator<Item = VisibleRow<'_>> + '_ {
        self.model
            .nodes()
            .iter()
            .enumerate()
            .flat_map(|(parent, node)| {
                let expanded = node.is_expanded();
                let children: &[String] = if expanded { &node.children } else { &[] };
                let header = VisibleRow {
                    content: RowContent::ParentLabel(&node.title),
                    parent,
                    expanded,
                };
                std::iter::once(header).chain(children.iter().map(move |child| VisibleRow {
                    content: RowContent::ChildLabel(child),
                    parent,
                    expanded,
                }))
            })
    }

    /// Checks that `row` is where `parent`'s header currently sits and that it is in `from`.
    fn check_transition(
        &self,
        row: usize,
        parent: usize,
        from: NodeState,
    ) -> Result<&ParentNode, ListError> {
        let node = self.model.node(parent)?;
        if node.state != from {
            return Err(ListError::InvalidTransition {
                parent,
                from: node.state,
            });
        }
        let actual = self.parent_row(parent)?;
        if actual != row {
            return Err(ListError::PositionMismatch {
                parent,
                given: row,
                actual,
            });
        }
        Ok(node)
    }

    /// Opens a collapsed parent whose header sits at `row`.
    ///
    /// Inserts one row per child directly below the header, in child order.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] for a bad parent index.
    /// - [`ListError::InvalidTransition`] if the parent is already expanded, or if
    ///   another parent is open under [`ExpansionPolicy::SingleExpanded`].
    /// - [`ListError::PositionMismatch`] if `row` is not the parent's header row.
    pub fn expand(&mut self, row: usize, parent: usize) -> Result<Delta, ListError> {
        let count = self
            .check_transition(row, parent, NodeState::Collapsed)?
            .children
            .len();
        if self.policy == ExpansionPolicy::SingleExpanded {
            if let Some((_, open)) = self.last_expanded {
                return Err(ListError::InvalidTransition {
                    parent: open,
                    from: NodeState::Expanded,
                });
            }
        }

        self.model.set_state(parent, NodeState::Expanded)?;
        self.total += count;
        if self.policy == ExpansionPolicy::SingleExpanded {
            self.last_expanded = Some((row, parent));
        }

        let delta = Delta::inserts(row + 1, count);
        debug!("expanded parent {parent} at row {row}: {delta:?}");
        Ok(delta)
    }

    /// Closes an expanded parent whose header sits at `row`.
    ///
    /// Deletes the child rows directly below the header; a parent without children
    /// only flips state.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] for a bad parent index.
    /// - [`ListError::InvalidTransition`] if the parent is already collapsed.
    /// - [`ListError::PositionMismatch`] if `row` is not the parent's header row.
    pub fn collapse(&mut self, row: usize, parent: usize) -> Result<Delta, ListError> {
        let count = self
            .check_transition(row, parent, NodeState::Expanded)?
            .children
            .len();

        self.model.set_state(parent, NodeState::Collapsed)?;
        self.total -= count;
        if self.last_expanded.is_some_and(|(_, open)| open == parent) {
            self.last_expanded = None;
        }

        let delta = Delta::deletes(row + 1, count);
        debug!("collapsed parent {parent} at row {row}: {delta:?}");
        Ok(delta)
    }

    /// Handles an activation of `row` coming from the renderer.
    ///
    /// Headers toggle; under single expansion, opening a header first closes the
    /// open one. Child rows report a selection and change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `row` is not below [`Self::row_count`].
    /// Nothing is mutated when an error is returned.
    pub fn activate(&mut self, row: usize) -> Result<Activation, ListError> {
        let location = self.locate(row)?;
        let parent = location.parent;
        let node = self.model.node(parent)?;

        if let Some(child) = location.child_offset(row) {
            info!(
                "child {child} of parent {parent} selected: {}",
                node.children[child]
            );
            return Ok(Activation::ChildSelected {
                parent,
                child,
                parent_title: node.title.clone(),
                text: node.children[child].clone(),
            });
        }

        if node.is_expanded() {
            let delta = self.collapse(location.parent_row, parent)?;
            self.last_expanded = None;
            return Ok(Activation::Collapsed { parent, delta });
        }

        match self.policy {
            ExpansionPolicy::MultipleExpanded => {
                let delta = self.expand(location.parent_row, parent)?;
                Ok(Activation::Expanded { parent, delta })
            }
            ExpansionPolicy::SingleExpanded => self.switch_to(location.parent_row, parent),
        }
    }

    /// Single-expansion reconciliation: close the open parent, then open `parent`.
    ///
    /// Closing a parent above the target shifts the target's header up by the
    /// closed parent's child count; closing one below leaves it where it is.
    fn switch_to(&mut self, row: usize, parent: usize) -> Result<Activation, ListError> {
        let Some((open_row, open)) = self.last_expanded else {
            let delta = self.expand(row, parent)?;
            return Ok(Activation::Expanded { parent, delta });
        };

        // Validate both halves before mutating anything.
        let shift = self
            .check_transition(open_row, open, NodeState::Expanded)?
            .children
            .len();
        self.check_transition(row, parent, NodeState::Collapsed)?;

        let mut delta = self.collapse(open_row, open)?;
        let target = if parent > open { row - shift } else { row };
        delta.merge(self.expand(target, parent)?);
        debug!("switched expansion from parent {open} to parent {parent} at row {target}");

        Ok(Activation::Switched {
            collapsed: open,
            expanded: parent,
            delta,
        })
    }

    /// Closes every open parent in one batch.
    ///
    /// Delete positions refer to the list before the batch, so parents are closed
    /// bottom-up to keep each header position valid while the batch is built.
    pub fn collapse_all(&mut self) -> Delta {
        let mut delta = Delta::new();
        let mut row = self.total;
        for parent in (0..self.model.node_count()).rev() {
            let node = &self.model.nodes()[parent];
            row -= node.row_span();
            if node.is_expanded() {
                // Header position and state were just derived from the tree.
                if let Ok(deletes) = self.collapse(row, parent) {
                    delta.merge(deletes);
                }
            }
        }
        self.last_expanded = None;
        delta
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
