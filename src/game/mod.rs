//! Playable games.
//!
//! `Game<T, R>` is the single game loop; the termination strategy `T`
//! decides which variant it is:
//!
//! - `PlainGame`: first to the target score
//! - `TimedGame`: the same, or until the time limit passes
//!
//! `AnyGame` and `GameBuilder` pick the variant at runtime.

mod game;
mod mode;

pub use game::{Game, PlainGame, TimedGame};
pub use mode::{AnyGame, GameBuilder, GameMode};
