//! Termination predicates.
//!
//! The game loop asks its `Termination` strategy after every completed turn
//! (and once before the first turn) whether play should stop:
//!
//! - `ScoreLimit`: some player's banked score reached the target
//! - `TimeLimit`: `ScoreLimit`, or more than the limit has elapsed since the
//!   first check
//!
//! The timer is started by the first check, not when the game is built, and
//! it never pauses while a player is deciding.

use std::time::{Duration, Instant};

use crate::core::{Clock, GameConfig, Players};

/// Decides when a game is over.
pub trait Termination {
    /// Evaluate the predicate. Called between turns, never mid-turn.
    fn is_game_over(&mut self, players: &Players, config: &GameConfig) -> bool;

    /// Whole seconds left on the clock, if this predicate keeps time and
    /// has started.
    fn seconds_left(&self) -> Option<u64> {
        None
    }

    /// Has the time bound been exceeded?
    fn time_expired(&self) -> bool {
        false
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_game_over(&mut self, players: &Players, config: &GameConfig) -> bool {
        (**self).is_game_over(players, config)
    }

    fn seconds_left(&self) -> Option<u64> {
        (**self).seconds_left()
    }

    fn time_expired(&self) -> bool {
        (**self).time_expired()
    }
}

/// Ends the game once either player reaches the target score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreLimit;

impl Termination for ScoreLimit {
    fn is_game_over(&mut self, players: &Players, config: &GameConfig) -> bool {
        players.any_reached(config.target_score)
    }
}

/// Adds a wall-clock bound on top of another predicate.
#[derive(Clone, Debug)]
pub struct TimeLimit<C, T = ScoreLimit> {
    inner: T,
    clock: C,
    limit: Duration,
    started: Option<Instant>,
}

impl<C: Clock> TimeLimit<C> {
    /// Bound the score predicate by `limit`.
    pub fn new(clock: C, limit: Duration) -> Self {
        Self::wrap(ScoreLimit, clock, limit)
    }
}

impl<C: Clock, T: Termination> TimeLimit<C, T> {
    /// Bound an arbitrary predicate by `limit`.
    pub fn wrap(inner: T, clock: C, limit: Duration) -> Self {
        Self {
            inner,
            clock,
            limit,
            started: None,
        }
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time since the first check. `None` before it.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started
            .map(|start| self.clock.now().saturating_duration_since(start))
    }
}

impl<C: Clock, T: Termination> Termination for TimeLimit<C, T> {
    fn is_game_over(&mut self, players: &Players, config: &GameConfig) -> bool {
        if self.started.is_none() {
            self.started = Some(self.clock.now());
            log::debug!("time limit of {:?} started", self.limit);
        }

        let expired = self.time_expired();
        self.inner.is_game_over(players, config) || expired
    }

    fn seconds_left(&self) -> Option<u64> {
        let elapsed = self.elapsed()?;
        Some(self.limit.as_secs().saturating_sub(elapsed.as_secs()))
    }

    fn time_expired(&self) -> bool {
        self.elapsed().map_or(false, |elapsed| elapsed > self.limit)
    }
}
