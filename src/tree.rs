//! Two-level tree of parent sections and their leaf children.
//!
//! The tree is deliberately inert: it stores titles, children and an expansion
//! state per parent, and knows nothing about flat rows. All policy about when a
//! parent may open or close lives in the controller, which is the only caller of
//! [`TreeModel::set_state`].

use crate::error::ListError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Whether a parent's children are currently visible.
pub enum NodeState {
    /// Only the parent header row is visible.
    #[default]
    Collapsed,
    /// The header row is followed by one row per child.
    Expanded,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level list entry owning zero or more leaf children.
pub struct ParentNode {
    /// Text shown on the parent header row.
    pub title: String,
    /// Leaf content, in display order.
    #[serde(default)]
    pub children: Vec<String>,
    /// Expansion state; never read from input, every node starts collapsed.
    #[serde(skip)]
    pub state: NodeState,
}

impl ParentNode {
    #[must_use]
    /// Creates a collapsed parent.
    pub fn new<T, C>(title: impl Into<String>, children: C) -> Self
    where
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            title: title.into(),
            children: children.into_iter().map(Into::into).collect(),
            state: NodeState::Collapsed,
        }
    }

    #[must_use]
    /// True while the children are visible.
    pub fn is_expanded(&self) -> bool {
        self.state == NodeState::Expanded
    }

    #[must_use]
    /// Number of flat rows this node occupies: its header plus any visible children.
    pub fn row_span(&self) -> usize {
        match self.state {
            NodeState::Collapsed => 1,
            NodeState::Expanded => 1 + self.children.len(),
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered parents; order is fixed for the lifetime of the model.
pub struct TreeModel {
    nodes: Vec<ParentNode>,
}

impl TreeModel {
    #[must_use]
    /// Wraps an initial dataset. Nodes are never added or removed afterwards.
    pub fn new(nodes: Vec<ParentNode>) -> Self {
        Self { nodes }
    }

    #[must_use]
    /// Number of parents.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Reads one parent.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `parent` is not below [`Self::node_count`].
    pub fn node(&self, parent: usize) -> Result<&ParentNode, ListError> {
        self.nodes
            .get(parent)
            .ok_or_else(|| ListError::parent(parent, self.nodes.len()))
    }

    /// Overwrites the state of one parent without any other side effect.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `parent` is not below [`Self::node_count`].
    pub fn set_state(&mut self, parent: usize, state: NodeState) -> Result<(), ListError> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| ListError::parent(parent, len))?;
        node.state = state;
        Ok(())
    }

    #[must_use]
    /// All parents in display order.
    pub fn nodes(&self) -> &[ParentNode] {
        &self.nodes
    }

    #[must_use]
    /// Visible row count recomputed from every node's state.
    pub fn visible_rows(&self) -> usize {
        self.nodes.iter().map(ParentNode::row_span).sum()
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
