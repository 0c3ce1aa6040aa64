//! Choosing between the plain and timed variants.

use crate::core::{
    Clock, DiceRng, GameConfig, GameState, PlayerId, Players, RandomSource, SystemClock,
};
use crate::error::Result;
use crate::interface::Interface;
use crate::rules::{Outcome, TurnReport};

use super::game::{Game, PlainGame, TimedGame};

/// Which variant to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    #[default]
    Plain,
    Timed,
}

/// A game of either variant, chosen at construction.
pub enum AnyGame<R = DiceRng, C = SystemClock> {
    Plain(PlainGame<R>),
    Timed(TimedGame<C, R>),
}

impl<R: RandomSource, C: Clock> AnyGame<R, C> {
    #[must_use]
    pub fn mode(&self) -> GameMode {
        match self {
            AnyGame::Plain(_) => GameMode::Plain,
            AnyGame::Timed(_) => GameMode::Timed,
        }
    }

    pub fn is_game_over(&mut self) -> bool {
        match self {
            AnyGame::Plain(g) => g.is_game_over(),
            AnyGame::Timed(g) => g.is_game_over(),
        }
    }

    pub fn turn<I: Interface + ?Sized>(&mut self, ui: &mut I) -> Result<TurnReport> {
        match self {
            AnyGame::Plain(g) => g.turn(ui),
            AnyGame::Timed(g) => g.turn(ui),
        }
    }

    pub fn play<I: Interface + ?Sized>(&mut self, ui: &mut I) -> Result<Outcome> {
        match self {
            AnyGame::Plain(g) => g.play(ui),
            AnyGame::Timed(g) => g.play(ui),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        match self {
            AnyGame::Plain(g) => g.state(),
            AnyGame::Timed(g) => g.state(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        match self {
            AnyGame::Plain(g) => g.config(),
            AnyGame::Timed(g) => g.config(),
        }
    }
}

/// Builder for creating a game.
pub struct GameBuilder {
    mode: GameMode,
    config: GameConfig,
    names: (String, String),
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::Plain,
            config: GameConfig::default(),
            names: (PlayerId::First.to_string(), PlayerId::Second.to_string()),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = (first.into(), second.into());
        self
    }

    /// Build with explicit dice and clock.
    pub fn build_with<R: RandomSource, C: Clock>(self, dice: R, clock: C) -> Result<AnyGame<R, C>> {
        self.config.validate()?;
        let players = Players::named(self.names.0, self.names.1);

        Ok(match self.mode {
            GameMode::Plain => AnyGame::Plain(Game::plain(self.config, players, dice)),
            GameMode::Timed => AnyGame::Timed(Game::timed(self.config, players, dice, clock)),
        })
    }

    /// Build with a seeded die and the wall clock.
    pub fn build(self, seed: u64) -> Result<AnyGame> {
        self.build_with(DiceRng::new(seed), SystemClock)
    }
}
