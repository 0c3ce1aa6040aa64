//! Hold/continue decisions.

use serde::{Deserialize, Serialize};

/// What the active player chose at a decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Roll again (`"r"`).
    Roll,
    /// Bank the turn score and end the turn (`"h"`).
    Hold,
}

impl Decision {
    /// Parse a raw answer. Only the exact strings `"r"` and `"h"` are accepted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "r" => Some(Decision::Roll),
            "h" => Some(Decision::Hold),
            _ => None,
        }
    }
}
