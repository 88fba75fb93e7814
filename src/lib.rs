//! Parse and roll chained dice expressions such as `2d6+5` or `d20 - 1d4 + 3`.
//!
//! An expression is a single chain of dice rolls (`NdM`, with `N` defaulting
//! to 1) and non-negative constants joined by `+` or `-`.
//!
//! ```
//! use dice_chain::{roll::ScriptedRoller, PartKind};
//!
//! let mut roller = ScriptedRoller::new([3, 5]);
//! let result = dice_chain::evaluate_with("2d6+5", &mut roller).unwrap();
//! assert_eq!(result.total(), 13);
//! assert_eq!(result.parts()[0].kind, PartKind::DiceRoll);
//! assert_eq!(result.parts()[0].sides, 2);
//! assert_eq!(result.parts()[0].result_parts, vec![3, 5]);
//! assert_eq!(result.to_string(), "2d6 (3, 5) + 5 = 13");
//! ```

pub mod common;
mod dice;
mod error;
pub mod parse;
pub mod roll;

pub use dice::Dice;
pub use error::Error;
pub use parse::{
    ast::{DiceRoll, Expression, Modifier, Operation, Term},
    parse, ParseError, TermError,
};
pub use roll::{PartKind, RollError, RollPart, RollResult, Roller};

/// Parses and rolls `s` using the thread-local generator.
///
/// No roll budget applies, and every face is kept in memory. For untrusted
/// input use [`Dice::with_max_rolls`] instead.
pub fn evaluate(s: &str) -> Result<RollResult, Error> {
    Ok(Dice::new(s)?.generate()?)
}

/// Parses and rolls `s` with a generator seeded from `seed`.
pub fn evaluate_seeded(s: &str, seed: u64) -> Result<RollResult, Error> {
    Ok(Dice::new(s)?.generate_seeded(seed)?)
}

/// Parses and rolls `s`, drawing every die from `roller`.
pub fn evaluate_with<R: Roller + ?Sized>(s: &str, roller: &mut R) -> Result<RollResult, Error> {
    Ok(Dice::new(s)?.generate_with(roller)?)
}
