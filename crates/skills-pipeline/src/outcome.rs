//! The "nothing found" signal.

use serde::{Deserialize, Serialize};

/// Result of a view query.
///
/// An empty result set is a distinct state, not an empty collection:
/// the presentation layer renders a "nothing found" notice instead of a
/// blank chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOutcome<T> {
    Matches(T),
    NothingFound,
}

impl<T> QueryOutcome<T> {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::NothingFound)
    }

    pub fn matches(self) -> Option<T> {
        match self {
            Self::Matches(value) => Some(value),
            Self::NothingFound => None,
        }
    }
}
