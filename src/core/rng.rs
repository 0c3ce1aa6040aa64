//! Dice randomness.
//!
//! ## Key Features
//!
//! - **Deterministic when seeded**: Same seed produces identical rolls
//! - **Swappable**: The turn engine only sees the `RandomSource` trait
//! - **Scriptable**: `ScriptedRolls` replays a fixed sequence for tests
//!
//! ```
//! use pig_dice::core::{DiceRng, RandomSource};
//!
//! let mut die = DiceRng::new(42);
//! let roll = die.roll();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut again = DiceRng::new(42);
//! assert_eq!(roll, again.roll());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// The face that ends a turn and forfeits its points.
pub const BUST_FACE: u8 = 1;

/// Source of die rolls.
///
/// Implementations return a face in `1..=6` with no memory of prior rolls.
pub trait RandomSource {
    /// Roll the die once.
    fn roll(&mut self) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Six-sided die backed by ChaCha8.
///
/// Uses ChaCha8 for speed while keeping uniform, high quality output.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a die seeded from the operating system.
    ///
    /// The chosen seed is still recorded so a game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DiceRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of rolls.
///
/// Panics when the script runs out; a test that rolls more often than it
/// scripted is itself broken.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u8>,
    consumed: usize,
}

impl ScriptedRolls {
    /// Create a script from the given faces.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: VecDeque<u8> = rolls.into_iter().collect();
        assert!(
            rolls.iter().all(|r| (1..=DIE_FACES).contains(r)),
            "Scripted rolls must be in 1..=6"
        );
        Self { rolls, consumed: 0 }
    }

    /// Rolls handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Rolls still waiting in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self) -> u8 {
        let roll = self
            .rolls
            .pop_front()
            .unwrap_or_else(|| panic!("Scripted rolls exhausted after {} rolls", self.consumed));
        self.consumed += 1;
        roll
    }
}
