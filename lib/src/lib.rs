#![cfg_attr(feature = "unstable", feature(test))]

//! Solves Wordle-style puzzles by always guessing the word whose feedback is expected to reveal
//! the most information about the objective.
//!
//! A [`Solver`] holds the words that could still be the objective. Each turn it scores every
//! allowed guess by the entropy of the feedback it would produce, proposes the best one, and then
//! keeps only the candidates consistent with the feedback it receives.
//!
//! ```
//! use entropy_wordle_solver::*;
//!
//! let bank = WordBank::from_iterator(&["alpha", "allot", "begot", "below", "endow", "ingot"])
//!     .unwrap();
//!
//! let result = play_game_with_answer("endow", &bank, &bank, SolverConfig::default()).unwrap();
//!
//! assert!(matches!(result, GameResult::Success(_)));
//! ```

mod data;
mod distribution;
mod engine;
mod results;
mod selector;

pub mod scorers;

pub use data::CandidateSet;
pub use data::WordBank;
pub use engine::*;
pub use results::*;
pub use selector::*;

/// Building blocks for custom scorers and analysis of guesses.
pub mod details {
    pub use crate::distribution::*;
}
