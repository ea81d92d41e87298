//! How many parents may be expanded at once.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Rule deciding whether expanding one parent forces another closed.
///
/// Fixed when the controller is built; changing it mid-session would leave the
/// last-expanded bookkeeping meaningless.
pub enum ExpansionPolicy {
    /// At most one parent is open; opening another collapses the previous one.
    #[default]
    SingleExpanded,
    /// Any number of parents may be open.
    MultipleExpanded,
}

/// Error returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown expansion policy '{0}' (expected 'single' or 'multiple')")]
pub struct ParsePolicyError(pub String);

impl FromStr for ExpansionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "one" => Ok(Self::SingleExpanded),
            "multiple" | "several" => Ok(Self::MultipleExpanded),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for ExpansionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleExpanded => f.write_str("single"),
            Self::MultipleExpanded => f.write_str("multiple"),
        }
    }
}

#[cfg(test)]
#[path = "tests/policy.rs"]
mod tests;
