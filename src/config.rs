//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a concertina.toml, and if present we load settings from there.
//! This provides the expansion policy, row heights, child indentation and the log file.

use crate::controller::RowHeights;
use crate::policy::{ExpansionPolicy, ParsePolicyError};
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "concertina.toml";

#[derive(Facet, Clone)]
/// User preferences loaded from concertina.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "single".to_string())]
    /// Expansion policy name: `single` or `multiple`.
    pub policy: String,
    #[facet(default = 2)]
    /// Terminal lines used by a parent header row.
    pub parent_row_height: u16,
    #[facet(default = 1)]
    /// Terminal lines used by a child row.
    pub child_row_height: u16,
    #[facet(default = 4)]
    /// Spaces drawn before child labels.
    pub child_indent: usize,
    #[facet(default = String::new())]
    /// File to write logs to; empty disables logging.
    pub log_file: String,
}

impl Config {
    #[must_use]
    /// Load configuration from concertina.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// The configured expansion policy.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePolicyError`] if the policy name is not recognised.
    pub fn expansion_policy(&self) -> Result<ExpansionPolicy, ParsePolicyError> {
        self.policy.parse()
    }

    #[must_use]
    /// Row heights for parent and child rows, never less than one line.
    pub fn row_heights(&self) -> RowHeights {
        RowHeights {
            parent: self.parent_row_height.max(1),
            child: self.child_row_height.max(1),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
