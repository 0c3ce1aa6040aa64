//! Core game types: players, state, configuration, dice and time.
//!
//! Nothing here knows the rules of a turn; `rules` builds on these.

pub mod player;
pub mod rng;
pub mod clock;
pub mod config;
pub mod state;

pub use player::{Player, PlayerId, Players};
pub use rng::{DiceRng, RandomSource, ScriptedRolls, BUST_FACE, DIE_FACES};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, DEFAULT_TARGET_SCORE, DEFAULT_TIME_LIMIT};
pub use state::{GamePhase, GameState};
