use anyhow::{Context, Result};

use pig_dice::{ConsoleInterface, DiceRng, GameBuilder, GameConfig, GameMode, PigError, SystemClock};

const SEED_VAR: &str = "PIG_SEED";

const USAGE: &str = "\
usage: pig [--timed]

  --timed    end the game after the time limit even if nobody reached the target

environment:
  PIG_TARGET_SCORE      score needed to win (default 100)
  PIG_TIME_LIMIT_SECS   length of a timed game in seconds (default 60)
  PIG_SEED              seed the die for a reproducible game
  RUST_LOG              diagnostic log level (default warn)";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play {
        mode: GameMode,
        /// Arguments that were not understood and are ignored.
        ignored: Vec<String>,
    },
    Help,
}

/// Map arguments (without the program name) to a command.
fn parse_args(args: impl IntoIterator<Item = String>) -> Command {
    let mut mode = GameMode::Plain;
    let mut ignored = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--timed" => mode = GameMode::Timed,
            "-h" | "--help" => return Command::Help,
            _ => ignored.push(arg),
        }
    }

    Command::Play { mode, ignored }
}

fn seed_from_env() -> Result<Option<u64>> {
    match std::env::var(SEED_VAR) {
        Ok(raw) => {
            let seed = raw
                .trim()
                .parse()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?;
            Ok(Some(seed))
        }
        Err(_) => Ok(None),
    }
}

fn run() -> Result<()> {
    let mode = match parse_args(std::env::args().skip(1)) {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Play { mode, ignored } => {
            for arg in ignored {
                eprintln!("Ignoring unknown argument: {}", arg);
            }
            mode
        }
    };

    let config = GameConfig::from_env().context("reading game configuration")?;
    let dice = match seed_from_env()? {
        Some(seed) => DiceRng::new(seed),
        None => DiceRng::from_entropy(),
    };
    log::info!("mode {:?}, die seed {}", mode, dice.seed());

    let mut game = GameBuilder::new()
        .mode(mode)
        .config(config)
        .build_with(dice, SystemClock)?;
    let mut ui = ConsoleInterface::stdio();

    match game.play(&mut ui) {
        Ok(outcome) => {
            log::debug!("final scores {:?}", outcome.scores);
            Ok(())
        }
        Err(PigError::InputClosed) => {
            println!();
            log::warn!("input closed, game abandoned");
            Ok(())
        }
        Err(err) => Err(err).context("playing game"),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Failures are reported, never turned into a non-zero exit status
    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("pig: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_plain() {
        assert_eq!(
            parse_args(args(&[])),
            Command::Play {
                mode: GameMode::Plain,
                ignored: vec![]
            }
        );
    }

    #[test]
    fn test_timed_flag() {
        assert_eq!(
            parse_args(args(&["--timed"])),
            Command::Play {
                mode: GameMode::Timed,
                ignored: vec![]
            }
        );
    }

    #[test]
    fn test_help_wins_over_other_flags() {
        assert_eq!(parse_args(args(&["--timed", "-h"])), Command::Help);
        assert_eq!(parse_args(args(&["--help"])), Command::Help);
    }

    #[test]
    fn test_unknown_args_are_ignored() {
        assert_eq!(
            parse_args(args(&["--fast", "--timed", "x"])),
            Command::Play {
                mode: GameMode::Timed,
                ignored: args(&["--fast", "x"])
            }
        );
    }
}
