//! Game state machine.
//!
//! ```text
//! NotStarted --start--> InProgress(First)
//! InProgress(p) --advance--> InProgress(p.other())
//! InProgress(p) --finish--> Over(outcome)
//! ```
//!
//! Exactly one player is active while the game is in progress, and activity
//! alternates strictly after each completed turn.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, Players};
use crate::rules::Outcome;

/// Where the game is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    /// Holds the player whose turn it is.
    InProgress(PlayerId),
    Over(Outcome),
}

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    players: Players,
    phase: GamePhase,
    /// Completed turns so far.
    turns_played: u32,
}

impl GameState {
    pub fn new(players: Players) -> Self {
        Self {
            players,
            phase: GamePhase::NotStarted,
            turns_played: 0,
        }
    }

    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut Players {
        &mut self.players
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// The player whose turn it is, if the game is in progress.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::InProgress(p) => Some(p),
            _ => None,
        }
    }

    /// The active player's data.
    pub fn active_mut(&mut self) -> Option<(PlayerId, &mut Player)> {
        let id = self.active_player()?;
        Some((id, &mut self.players[id]))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            GamePhase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }

    /// Begin the game with the first seat active. No-op once started.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::InProgress(PlayerId::First);
        }
    }

    /// Record a completed turn and hand play to the other seat.
    pub fn advance(&mut self) {
        if let GamePhase::InProgress(p) = self.phase {
            self.turns_played += 1;
            self.phase = GamePhase::InProgress(p.other());
        }
    }

    /// End the game.
    pub fn finish(&mut self, outcome: Outcome) {
        self.phase = GamePhase::Over(outcome);
    }
}
