//! Turn engine.
//!
//! One turn for one player:
//!
//! 1. Reset the turn score.
//! 2. Roll. A one busts: the turn score is forfeited and the turn ends.
//! 3. Otherwise add the roll, report it, and ask for a decision.
//!    - Hold: bank the turn score, end the turn.
//!    - Roll: back to 2.
//!    - Anything else: report it and ask again. No roll is consumed and
//!      no counter changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::decision::Decision;
use crate::core::{Player, PlayerId, RandomSource, BUST_FACE};
use crate::error::Result;
use crate::interface::{GameEvent, Interface};

/// Rolls of one turn. Most turns are short.
pub type RollHistory = SmallVec<[u8; 8]>;

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player held and banked `banked` points.
    Held { banked: u32 },
    /// The player rolled a one and lost `forfeited` unbanked points.
    Bust { forfeited: u32 },
}

/// Record of a completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    /// Every roll in order, including a final bust.
    pub rolls: RollHistory,
    pub outcome: TurnOutcome,
    /// Answers rejected as invalid during the turn.
    pub invalid_inputs: u32,
}

impl TurnReport {
    #[must_use]
    pub fn is_bust(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Bust { .. })
    }

    /// Points banked by this turn (0 on a bust).
    #[must_use]
    pub fn banked(&self) -> u32 {
        match self.outcome {
            TurnOutcome::Held { banked } => banked,
            TurnOutcome::Bust { .. } => 0,
        }
    }
}

/// Executes turns using a die.
#[derive(Clone, Debug)]
pub struct TurnEngine<R> {
    dice: R,
}

impl<R: RandomSource> TurnEngine<R> {
    pub fn new(dice: R) -> Self {
        Self { dice }
    }

    #[must_use]
    pub fn dice(&self) -> &R {
        &self.dice
    }

    /// Play one turn for `player`, mutating its counters in place.
    ///
    /// If the interface fails mid-turn the unbanked points are dropped, so
    /// `turn_score` is 0 on every return path.
    pub fn execute_turn<I: Interface + ?Sized>(
        &mut self,
        id: PlayerId,
        player: &mut Player,
        ui: &mut I,
    ) -> Result<TurnReport> {
        player.start_turn();
        let mut rolls = RollHistory::new();
        let mut invalid_inputs = 0;

        let result = self.run(player, ui, &mut rolls, &mut invalid_inputs);
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                let lost = player.bust();
                log::warn!("{} turn aborted, dropping {lost} unbanked points: {err}", player.name());
                return Err(err);
            }
        };

        log::info!(
            "{} turn over after {} rolls: {:?} (score {})",
            player.name(),
            rolls.len(),
            outcome,
            player.score()
        );

        Ok(TurnReport {
            player: id,
            rolls,
            outcome,
            invalid_inputs,
        })
    }

    fn run<I: Interface + ?Sized>(
        &mut self,
        player: &mut Player,
        ui: &mut I,
        rolls: &mut RollHistory,
        invalid_inputs: &mut u32,
    ) -> Result<TurnOutcome> {
        loop {
            let roll = self.dice.roll();
            rolls.push(roll);
            log::debug!("{} rolled {roll}", player.name());

            if roll == BUST_FACE {
                let forfeited = player.bust();
                ui.show(&GameEvent::Bust)?;
                return Ok(TurnOutcome::Bust { forfeited });
            }

            player.accumulate(roll);
            ui.show(&GameEvent::Rolled {
                roll,
                turn_score: player.turn_score(),
                projected_total: player.projected_total(),
            })?;

            // Re-prompt until the answer parses; a bad answer never rolls
            let decision = loop {
                let answer = ui.read_decision()?;
                match Decision::parse(&answer) {
                    Some(decision) => break decision,
                    None => {
                        *invalid_inputs += 1;
                        log::debug!("rejected decision input {answer:?}");
                        ui.show(&GameEvent::InvalidInput)?;
                    }
                }
            };

            if decision == Decision::Hold {
                let banked = player.bank();
                ui.show(&GameEvent::Held {
                    name: player.name().to_string(),
                    score: player.score(),
                })?;
                return Ok(TurnOutcome::Held { banked });
            }
        }
    }
}
