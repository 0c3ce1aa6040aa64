//! Player identification and per-player counters.
//!
//! ## PlayerId
//!
//! Seat identifier for a two-player game. Turn order is `First`, `Second`,
//! `First`, ...
//!
//! ## Player
//!
//! Name plus the two counters the turn engine works on: the banked
//! `score` and the transient `turn_score`.
//!
//! ## Players
//!
//! The pair of seated players, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Moves first.
    First,
    /// Moves second.
    Second,
}

impl PlayerId {
    /// Both seats in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A seated player.
///
/// `score` only grows, and only when a turn ends with a hold.
/// `turn_score` is 0 whenever no turn is in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    turn_score: u32,
}

impl Player {
    /// Create a player with zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            turn_score: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points accumulated in the current turn, not yet banked.
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// What the score would be if the player held now.
    #[must_use]
    pub fn projected_total(&self) -> u32 {
        self.score + self.turn_score
    }

    /// Reset the turn counter at the start of a turn.
    pub fn start_turn(&mut self) {
        self.turn_score = 0;
    }

    /// Add a non-bust roll to the turn counter.
    pub fn accumulate(&mut self, roll: u8) {
        self.turn_score += u32::from(roll);
    }

    /// Bank the turn counter into the score. Returns the banked amount.
    pub fn bank(&mut self) -> u32 {
        let banked = std::mem::take(&mut self.turn_score);
        self.score += banked;
        banked
    }

    /// Forfeit the turn counter. Returns the forfeited amount.
    pub fn bust(&mut self) -> u32 {
        std::mem::take(&mut self.turn_score)
    }

    /// Has this player reached `target`?
    #[must_use]
    pub fn has_reached(&self, target: u32) -> bool {
        self.score >= target
    }
}

/// The two seated players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    seats: [Player; 2],
}

impl Players {
    /// Seat two players; `first` moves first.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            seats: [first, second],
        }
    }

    /// Seat two fresh players with the given names.
    pub fn named(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::new(Player::new(first), Player::new(second))
    }

    /// Iterate over (PlayerId, &Player) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::ALL.into_iter().map(move |id| (id, &self[id]))
    }

    /// Does any player's score reach `target`?
    #[must_use]
    pub fn any_reached(&self, target: u32) -> bool {
        self.seats.iter().any(|p| p.has_reached(target))
    }

    /// Banked scores in seat order.
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        [self.seats[0].score, self.seats[1].score]
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::named(PlayerId::First.to_string(), PlayerId::Second.to_string())
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}
