//! Player-facing interface.
//!
//! The game never touches a terminal directly. It reports `GameEvent`s to an
//! `Interface` and asks it for raw decision text; deciding whether that text
//! is valid stays with the turn engine.
//!
//! - `ConsoleInterface`: line-based text over any `BufRead`/`Write` pair
//! - `ScriptedInterface`: canned answers plus an event log, for tests and
//!   headless runs

mod console;
mod scripted;

pub use console::{ConsoleInterface, PROMPT};
pub use scripted::ScriptedInterface;

use std::fmt;

use crate::error::Result;

/// Something the player should be told.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A turn begins. Timed games include the whole seconds remaining.
    TurnStarted {
        name: String,
        seconds_left: Option<u64>,
    },
    /// A non-bust roll was added to the turn score.
    Rolled {
        roll: u8,
        turn_score: u32,
        projected_total: u32,
    },
    /// A one was rolled and the turn score forfeited.
    Bust,
    /// The turn score was banked.
    Held { name: String, score: u32 },
    /// The decision text was neither `r` nor `h`.
    InvalidInput,
    /// A timed game ran past its limit.
    TimeUp,
    GameOver { winner: String },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TurnStarted {
                name,
                seconds_left: None,
            } => write!(f, "{name}'s turn:"),
            GameEvent::TurnStarted {
                name,
                seconds_left: Some(secs),
            } => write!(f, "{name}'s turn, {secs} seconds left:"),
            GameEvent::Rolled {
                roll,
                turn_score,
                projected_total,
            } => write!(
                f,
                "You rolled a {roll}. Current turn score: {turn_score}\n\
                 Current total score: {projected_total}"
            ),
            GameEvent::Bust => write!(f, "You rolled a 1. Your turn is over."),
            GameEvent::Held { name, score } => write!(f, "{name}'s score is now {score}"),
            GameEvent::InvalidInput => write!(f, "Invalid input. Please enter 'r' or 'h'."),
            GameEvent::TimeUp => write!(f, "Time is up!"),
            GameEvent::GameOver { winner } => write!(f, "Game over.\n{winner} wins!"),
        }
    }
}

/// The text collaborator a game is played through.
pub trait Interface {
    /// Show an event to the players.
    fn show(&mut self, event: &GameEvent) -> Result<()>;

    /// Ask the active player to roll again or hold, returning the raw answer.
    ///
    /// Returns `PigError::InputClosed` when no more answers can be read.
    fn read_decision(&mut self) -> Result<String>;
}

impl<I: Interface + ?Sized> Interface for &mut I {
    fn show(&mut self, event: &GameEvent) -> Result<()> {
        (**self).show(event)
    }

    fn read_decision(&mut self) -> Result<String> {
        (**self).read_decision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_text() {
        let cases = [
            (
                GameEvent::TurnStarted {
                    name: "Player 1".into(),
                    seconds_left: None,
                },
                "Player 1's turn:",
            ),
            (
                GameEvent::TurnStarted {
                    name: "Player 2".into(),
                    seconds_left: Some(42),
                },
                "Player 2's turn, 42 seconds left:",
            ),
            (
                GameEvent::Rolled {
                    roll: 4,
                    turn_score: 9,
                    projected_total: 30,
                },
                "You rolled a 4. Current turn score: 9\nCurrent total score: 30",
            ),
            (GameEvent::Bust, "You rolled a 1. Your turn is over."),
            (
                GameEvent::Held {
                    name: "Player 1".into(),
                    score: 11,
                },
                "Player 1's score is now 11",
            ),
            (
                GameEvent::InvalidInput,
                "Invalid input. Please enter 'r' or 'h'.",
            ),
            (GameEvent::TimeUp, "Time is up!"),
            (
                GameEvent::GameOver {
                    winner: "Player 2".into(),
                },
                "Game over.\nPlayer 2 wins!",
            ),
        ];

        for (event, text) in cases {
            assert_eq!(event.to_string(), text);
        }
    }
}
