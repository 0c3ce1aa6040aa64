//! Property tests for the turn engine and game loop.

use proptest::prelude::*;

use pig_dice::{
    DiceRng, Game, GameConfig, GameEvent, Interface, Player, PlayerId, Players, ScriptedInterface,
    ScriptedRolls, TurnEngine, TurnOutcome,
};

/// Holds as soon as the turn score reaches `threshold`.
struct ThresholdPlayer {
    threshold: u32,
    turn_score: u32,
}

impl Interface for ThresholdPlayer {
    fn show(&mut self, event: &GameEvent) -> pig_dice::Result<()> {
        match event {
            GameEvent::Rolled { turn_score, .. } => self.turn_score = *turn_score,
            _ => self.turn_score = 0,
        }
        Ok(())
    }

    fn read_decision(&mut self) -> pig_dice::Result<String> {
        let answer = if self.turn_score >= self.threshold { "h" } else { "r" };
        Ok(answer.to_string())
    }
}

fn non_bust_rolls() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(2u8..=6, 1..20)
}

fn invalid_answer() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,4}".prop_filter("must not be a valid answer", |s| s != "r" && s != "h")
}

/// A player who has already banked `score`.
fn player_with(score: u8) -> Player {
    let mut player = Player::new("Player 1");
    player.accumulate(score);
    player.bank();
    player
}

proptest! {
    /// Without a one, the turn score climbs on every roll and nothing is
    /// banked until the hold.
    #[test]
    fn turn_score_increases_until_hold(rolls in non_bust_rolls(), banked in 0u8..=6) {
        let mut answers = vec!["r"; rolls.len() - 1];
        answers.push("h");

        let mut player = player_with(banked);
        let mut engine = TurnEngine::new(ScriptedRolls::new(rolls.clone()));
        let mut ui = ScriptedInterface::new(answers);

        let report = engine.execute_turn(PlayerId::First, &mut player, &mut ui).unwrap();

        let mut last = 0;
        for event in ui.events() {
            if let GameEvent::Rolled { turn_score, projected_total, .. } = event {
                prop_assert!(*turn_score > last);
                prop_assert_eq!(projected_total - turn_score, u32::from(banked));
                last = *turn_score;
            }
        }

        let sum: u32 = rolls.iter().map(|&r| u32::from(r)).sum();
        prop_assert_eq!(report.outcome, TurnOutcome::Held { banked: sum });
        prop_assert_eq!(player.score(), u32::from(banked) + sum);
        prop_assert_eq!(player.turn_score(), 0);
    }

    /// A one at any point forfeits the turn and leaves the banked score alone.
    #[test]
    fn bust_forfeits_turn(prefix in prop::collection::vec(2u8..=6, 0..20), banked in 0u8..=6) {
        let mut rolls = prefix.clone();
        rolls.push(1);

        let mut player = player_with(banked);
        let mut engine = TurnEngine::new(ScriptedRolls::new(rolls));
        let mut ui = ScriptedInterface::new(vec!["r"; prefix.len()]);

        let report = engine.execute_turn(PlayerId::First, &mut player, &mut ui).unwrap();

        let lost: u32 = prefix.iter().map(|&r| u32::from(r)).sum();
        prop_assert_eq!(report.outcome, TurnOutcome::Bust { forfeited: lost });
        prop_assert_eq!(player.score(), u32::from(banked));
        prop_assert_eq!(player.turn_score(), 0);
        prop_assert_eq!(ui.remaining_answers(), 0);
    }

    /// Invalid answers only cause re-prompts: no roll, no score change.
    #[test]
    fn invalid_input_has_no_side_effects(
        steps in prop::collection::vec((2u8..=6, prop::collection::vec(invalid_answer(), 0..4)), 1..10)
    ) {
        let rolls: Vec<u8> = steps.iter().map(|(roll, _)| *roll).collect();
        let mut answers = Vec::new();
        let mut invalid = 0;
        for (i, (_, junk)) in steps.iter().enumerate() {
            invalid += junk.len();
            answers.extend(junk.iter().cloned());
            answers.push(if i + 1 == steps.len() { "h" } else { "r" }.to_string());
        }

        let mut player = Player::new("Player 1");
        let mut engine = TurnEngine::new(ScriptedRolls::new(rolls.clone()));
        let mut ui = ScriptedInterface::new(answers);

        let report = engine.execute_turn(PlayerId::First, &mut player, &mut ui).unwrap();

        prop_assert_eq!(report.rolls.as_slice(), rolls.as_slice());
        prop_assert_eq!(report.invalid_inputs as usize, invalid);
        prop_assert_eq!(engine.dice().remaining(), 0);
        prop_assert_eq!(ui.count(|e| *e == GameEvent::InvalidInput), invalid);
        prop_assert_eq!(player.score(), rolls.iter().map(|&r| u32::from(r)).sum::<u32>());
    }

    /// Over a whole game scores never drop, turn scores are cleared after
    /// every turn, players alternate, and the winner reached the target.
    #[test]
    fn whole_game_invariants(seed in any::<u64>(), threshold in 1u32..30, target in 10u32..60) {
        let mut game = Game::plain(
            GameConfig::new().with_target_score(target),
            Players::default(),
            DiceRng::new(seed),
        );
        let mut ui = ThresholdPlayer { threshold, turn_score: 0 };

        let mut expected = PlayerId::First;
        let mut last = [0, 0];
        while !game.is_game_over() {
            let report = game.turn(&mut ui).unwrap();
            prop_assert_eq!(report.player, expected);
            expected = expected.other();

            let players = game.state().players();
            for (id, player) in players.iter() {
                prop_assert_eq!(player.turn_score(), 0);
                prop_assert!(player.score() >= last[id.index()]);
            }
            last = players.scores();
        }

        let outcome = game.play(&mut ui).unwrap();
        prop_assert!(outcome.score(outcome.winner) >= target);
    }
}
