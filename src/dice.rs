use crate::error::Error;
use crate::parse::ast::Expression;
use crate::roll::{self, DefaultRoller, RollError, RollResult, Roller};
use rand::{rngs::StdRng, SeedableRng};
use std::fmt;

/// A parsed expression that can be rolled repeatedly without re-parsing.
///
/// Rolls are unbounded unless [`Dice::with_max_rolls`] is set. Every face is
/// kept in the result, so an unbounded `4294967295d6` needs tens of gigabytes;
/// set a budget when the expression comes from untrusted input.
///
/// # Examples
/// ```
/// use dice_chain::Dice;
///
/// let dice: Dice = "2d6 + 5".parse().unwrap();
/// let a = dice.generate_seeded(42).unwrap();
/// let b = dice.generate_seeded(42).unwrap();
/// assert_eq!(a, b);
/// assert!((7..=17).contains(&a.total()));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    expression: Expression,
    max_rolls: Option<usize>,
}

impl Dice {
    pub fn new(s: &str) -> Result<Self, Error> {
        Ok(crate::parse(s)?.into())
    }

    /// Limits how many dice a single roll may draw. The limit is checked
    /// before any die of a term is drawn.
    pub fn with_max_rolls(mut self, max_rolls: usize) -> Self {
        self.max_rolls = Some(max_rolls);
        self
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Rolls using the thread-local generator.
    pub fn generate(&self) -> Result<RollResult, RollError> {
        let mut roller: DefaultRoller = rand::thread_rng();
        self.generate_with(&mut roller)
    }

    /// Rolls deterministically: the same seed always gives the same result.
    pub fn generate_seeded(&self, seed: u64) -> Result<RollResult, RollError> {
        self.generate_with(&mut StdRng::seed_from_u64(seed))
    }

    pub fn generate_with<R: Roller + ?Sized>(&self, roller: &mut R) -> Result<RollResult, RollError> {
        roll::eval(&self.expression, roller, self.max_rolls)
    }
}

impl From<Expression> for Dice {
    fn from(expression: Expression) -> Self {
        Self {
            expression,
            max_rolls: None,
        }
    }
}

impl std::str::FromStr for Dice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expression, f)
    }
}
