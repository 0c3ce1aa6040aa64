//! Rules of Pig.
//!
//! - `turn`: rolling, accumulating, busting and holding for one turn
//! - `decision`: parsing the hold/continue answer
//! - `termination`: when the game stops (score, optionally time)
//! - `outcome`: who won

pub mod decision;
pub mod outcome;
pub mod termination;
pub mod turn;

pub use decision::Decision;
pub use outcome::{EndReason, Outcome};
pub use termination::{ScoreLimit, Termination, TimeLimit};
pub use turn::{RollHistory, TurnEngine, TurnOutcome, TurnReport};
