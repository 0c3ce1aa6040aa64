//! # pig-dice
//!
//! The dice game Pig for two players, optionally bounded by a wall-clock
//! time limit.
//!
//! ## Rules
//!
//! On a turn the active player rolls a die repeatedly, adding each roll to
//! a turn score. Rolling a one busts: the turn score is lost and the turn
//! ends. After any other roll the player may hold, banking the turn score.
//! The first player to bank the target score wins.
//!
//! ## Architecture
//!
//! - **One turn engine**: plain and timed games share `TurnEngine`; they
//!   differ only in their `Termination` strategy.
//! - **Injected collaborators**: dice (`RandomSource`), time (`Clock`) and
//!   the player-facing text (`Interface`) are traits, so every rule can be
//!   driven deterministically in tests.
//!
//! ## Modules
//!
//! - `core`: players, state machine, configuration, dice, clocks
//! - `rules`: turn engine, decisions, termination, outcomes
//! - `game`: the game loop and variant selection
//! - `interface`: console and scripted front ends

pub mod core;
pub mod error;
pub mod game;
pub mod interface;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Clock, DiceRng, GameConfig, GamePhase, GameState, ManualClock, Player, PlayerId, Players,
    RandomSource, ScriptedRolls, SystemClock,
};

pub use crate::error::{PigError, Result};

pub use crate::game::{AnyGame, Game, GameBuilder, GameMode, PlainGame, TimedGame};

pub use crate::interface::{ConsoleInterface, GameEvent, Interface, ScriptedInterface};

pub use crate::rules::{
    Decision, EndReason, Outcome, ScoreLimit, Termination, TimeLimit, TurnEngine, TurnOutcome,
    TurnReport,
};
