//! Game results.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Players};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A player's banked score reached the target.
    TargetReached,
    /// The time limit ran out before anyone reached the target.
    TimeExpired,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: PlayerId,
    pub reason: EndReason,
    /// Banked scores in seat order when the game ended.
    pub scores: [u32; 2],
}

impl Outcome {
    /// Decide the winner from the final scores.
    ///
    /// The first seat wins only if it reached `target`; in every other case
    /// the second seat is declared the winner. After a time expiry with both
    /// players short of the target this names the second seat even when it
    /// trails or ties.
    // TODO: decide whether an expired game should go to the higher score
    // (or a draw) instead of defaulting to the second seat.
    #[must_use]
    pub fn decide(players: &Players, target: u32, reason: EndReason) -> Self {
        let winner = if players[PlayerId::First].has_reached(target) {
            PlayerId::First
        } else {
            PlayerId::Second
        };

        Self {
            winner,
            reason,
            scores: players.scores(),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Final banked score of a player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }
}
