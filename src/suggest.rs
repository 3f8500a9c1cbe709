//! Suggestion results and lookup verbosity.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Controls the breadth and ranking policy of lookup results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verbosity {
    /// The single best suggestion: smallest distance, ties broken only by a
    /// strictly greater frequency.
    Top,
    /// All suggestions tied at the smallest distance found, by descending
    /// frequency.
    Closest,
    /// Every suggestion within the bound, ascending distance then descending
    /// frequency. No early termination.
    All,
}

/// A suggested correct spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word (or reconstructed phrase).
    pub term: String,
    /// Edit distance from the queried input.
    pub distance: usize,
    /// Frequency of the suggestion in the dictionary.
    pub count: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(term: S, distance: usize, count: u64) -> Self {
        Suggestion {
            term: term.into(),
            distance,
            count,
        }
    }
}

impl Ord for Suggestion {
    // Ascending distance, then descending frequency. Terms do not take part,
    // so a stable sort preserves discovery order among full ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then(other.count.cmp(&self.count))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
