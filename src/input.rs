//! Builds the initial tree from a JSON dataset or the bundled sample.
//!
//! The dataset is a JSON array of parents, each with a `title` and a list of
//! `children` strings. Expansion state is not part of the format: every parent
//! starts collapsed.

use crate::tree::{ParentNode, TreeModel};
use std::path::Path;
use std::{fs, io};

/// Parses a dataset from JSON text.
///
/// # Errors
///
/// Returns an `InvalidData` error if the text is not a JSON array of parents.
pub fn parse_tree(json: &str) -> io::Result<TreeModel> {
    let nodes: Vec<ParentNode> =
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(TreeModel::new(nodes))
}

/// Reads a dataset file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_tree(path: &Path) -> io::Result<TreeModel> {
    let contents = fs::read_to_string(path)?;
    parse_tree(&contents)
}

#[must_use]
/// Small dataset used when no file is given.
pub fn sample_tree() -> TreeModel {
    TreeModel::new(vec![
        ParentNode::new("Fruit", ["Apple", "Pear", "Quince"]),
        ParentNode::new("Vegetables", ["Leek", "Parsnip"]),
        ParentNode::new("Pantry", Vec::<String>::new()),
        ParentNode::new("Grains", ["Barley", "Oats", "Rye", "Spelt"]),
        ParentNode::new("Herbs", ["Basil", "Sorrel"]),
    ])
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
