//! Game loop.

use crate::core::{
    Clock, DiceRng, GameConfig, GameState, Players, RandomSource, SystemClock,
    DEFAULT_TIME_LIMIT,
};
use crate::error::{PigError, Result};
use crate::interface::{GameEvent, Interface};
use crate::rules::{EndReason, Outcome, ScoreLimit, Termination, TimeLimit, TurnEngine, TurnReport};

/// A two-player game played until its `Termination` predicate holds.
///
/// Both variants share the same turn engine; they differ only in `T`.
pub struct Game<T, R = DiceRng> {
    config: GameConfig,
    state: GameState,
    termination: T,
    engine: TurnEngine<R>,
}

/// Untimed game: ends when a player reaches the target score.
pub type PlainGame<R = DiceRng> = Game<ScoreLimit, R>;

/// Timed game: also ends once the time limit has passed.
pub type TimedGame<C = SystemClock, R = DiceRng> = Game<TimeLimit<C>, R>;

impl<R: RandomSource> Game<ScoreLimit, R> {
    /// Untimed game. Any `time_limit` in `config` is dropped.
    pub fn plain(config: GameConfig, players: Players, dice: R) -> Self {
        let config = GameConfig {
            time_limit: None,
            ..config
        };
        Self::with_termination(config, players, dice, ScoreLimit)
    }
}

impl<C: Clock, R: RandomSource> Game<TimeLimit<C>, R> {
    /// Timed game. Uses the default limit if `config` carries none.
    pub fn timed(config: GameConfig, players: Players, dice: R, clock: C) -> Self {
        let config = config.timed();
        let limit = config.time_limit.unwrap_or(DEFAULT_TIME_LIMIT);
        Self::with_termination(config, players, dice, TimeLimit::new(clock, limit))
    }
}

impl<T: Termination, R: RandomSource> Game<T, R> {
    /// Game with any termination strategy.
    pub fn with_termination(config: GameConfig, players: Players, dice: R, termination: T) -> Self {
        Self {
            config,
            state: GameState::new(players),
            termination,
            engine: TurnEngine::new(dice),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn termination(&self) -> &T {
        &self.termination
    }

    #[must_use]
    pub fn dice(&self) -> &R {
        self.engine.dice()
    }

    /// Evaluate the termination predicate against the current scores.
    ///
    /// A timed game's clock starts on the first call.
    pub fn is_game_over(&mut self) -> bool {
        self.state.is_over()
            || self
                .termination
                .is_game_over(self.state.players(), &self.config)
    }

    /// Play one turn for the active player, then pass play to the other.
    pub fn turn<I: Interface + ?Sized>(&mut self, ui: &mut I) -> Result<TurnReport> {
        if self.state.is_over() {
            return Err(PigError::GameFinished);
        }
        self.state.start();

        let seconds_left = self.termination.seconds_left();
        let turn_number = self.state.turns_played() + 1;
        let (id, player) = self.state.active_mut().ok_or(PigError::GameFinished)?;

        log::info!("turn {turn_number} for {}", player.name());
        ui.show(&GameEvent::TurnStarted {
            name: player.name().to_string(),
            seconds_left,
        })?;

        let report = self.engine.execute_turn(id, player, ui)?;
        self.state.advance();
        Ok(report)
    }

    /// Alternate turns until the game is over, then announce the winner.
    pub fn play<I: Interface + ?Sized>(&mut self, ui: &mut I) -> Result<Outcome> {
        if let Some(outcome) = self.state.outcome() {
            return Ok(outcome.clone());
        }

        self.state.start();
        log::info!(
            "game started: target {}, time limit {:?}",
            self.config.target_score,
            self.config.time_limit
        );

        while !self.is_game_over() {
            self.turn(ui)?;
        }

        self.finish(ui)
    }

    fn finish<I: Interface + ?Sized>(&mut self, ui: &mut I) -> Result<Outcome> {
        let players = self.state.players();
        let reason = if players.any_reached(self.config.target_score) {
            EndReason::TargetReached
        } else {
            EndReason::TimeExpired
        };
        let outcome = Outcome::decide(players, self.config.target_score, reason);
        let winner = players[outcome.winner].name().to_string();

        if self.termination.time_expired() {
            ui.show(&GameEvent::TimeUp)?;
        }
        ui.show(&GameEvent::GameOver {
            winner: winner.clone(),
        })?;

        log::info!(
            "game over after {} turns: {winner} wins ({:?}, scores {:?})",
            self.state.turns_played(),
            outcome.reason,
            outcome.scores
        );

        self.state.finish(outcome.clone());
        Ok(outcome)
    }
}
