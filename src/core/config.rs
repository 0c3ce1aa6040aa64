//! Game configuration.
//!
//! A `GameConfig` is fixed for the life of a game:
//! - `target_score`: banked score that wins the game
//! - `time_limit`: optional wall-clock bound, only honoured by timed games
//!
//! Overrides can be read from the environment:
//! - `PIG_TARGET_SCORE`: positive integer
//! - `PIG_TIME_LIMIT_SECS`: positive integer number of seconds

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PigError, Result};

/// Score needed to win when nothing else is configured.
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// Length of a timed game when nothing else is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

pub const TARGET_SCORE_VAR: &str = "PIG_TARGET_SCORE";
pub const TIME_LIMIT_VAR: &str = "PIG_TIME_LIMIT_SECS";

/// Rule parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Banked score that ends the game.
    pub target_score: u32,

    /// Wall-clock bound. `None` for an untimed game.
    pub time_limit: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            time_limit: None,
        }
    }
}

impl GameConfig {
    /// Untimed game to the default target.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Apply the default time limit unless one is already set.
    #[must_use]
    pub fn timed(mut self) -> Self {
        self.time_limit.get_or_insert(DEFAULT_TIME_LIMIT);
        self
    }

    /// Reject configurations no game can be played under.
    pub fn validate(&self) -> Result<()> {
        if self.target_score == 0 {
            return Err(PigError::InvalidConfig(
                "target score must be positive".to_string(),
            ));
        }
        if self.time_limit == Some(Duration::ZERO) {
            return Err(PigError::InvalidConfig(
                "time limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, starting from the defaults.
    ///
    /// Unset variables keep their default; set but malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TARGET_SCORE_VAR) {
            config.target_score = parse_positive(TARGET_SCORE_VAR, &raw)?;
        }
        if let Some(raw) = lookup(TIME_LIMIT_VAR) {
            let secs = parse_positive(TIME_LIMIT_VAR, &raw)?;
            config.time_limit = Some(Duration::from_secs(u64::from(secs)));
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_positive(var: &str, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PigError::InvalidConfig(format!(
            "{var} must be a positive integer, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.target_score, 100);
        assert_eq!(config.time_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timed_uses_default_limit() {
        let config = GameConfig::new().timed();
        assert_eq!(config.time_limit, Some(Duration::from_secs(60)));

        let custom = GameConfig::new()
            .with_time_limit(Duration::from_secs(5))
            .timed();
        assert_eq!(custom.time_limit, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        let err = GameConfig::new().with_target_score(0).validate().unwrap_err();
        assert!(matches!(err, PigError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = GameConfig::new().with_time_limit(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = GameConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = GameConfig::from_lookup(lookup_from(&[
            (TARGET_SCORE_VAR, "20"),
            (TIME_LIMIT_VAR, " 30 "),
        ]))
        .unwrap();

        assert_eq!(config.target_score, 20);
        assert_eq!(config.time_limit, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        assert!(GameConfig::from_lookup(lookup_from(&[(TARGET_SCORE_VAR, "lots")])).is_err());
        assert!(GameConfig::from_lookup(lookup_from(&[(TARGET_SCORE_VAR, "0")])).is_err());
        assert!(GameConfig::from_lookup(lookup_from(&[(TIME_LIMIT_VAR, "-5")])).is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new()
            .with_target_score(50)
            .with_time_limit(Duration::from_secs(90));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
