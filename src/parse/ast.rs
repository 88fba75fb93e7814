use crate::common::*;
use std::fmt;

/// A parsed dice expression: one term followed by any number of signed terms.
///
/// An `Expression` holds no mutable state, so it can be evaluated any number
/// of times, including from several threads at once as long as each
/// evaluation has its own [`Roller`](crate::roll::Roller).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Expression {
    pub(crate) initial_term: Term,
    pub(crate) operations: Vec<Operation>,
}

impl Expression {
    pub(crate) fn new(initial_term: Term, operations: Vec<Operation>) -> Self {
        Self {
            initial_term,
            operations,
        }
    }

    /// The first term, e.g. `1D20` in `1D20+5`.
    pub fn initial_term(&self) -> &Term {
        &self.initial_term
    }

    /// The terms following the initial one, in expression order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Every term paired with its sign; the initial term counts as added.
    pub fn terms(&self) -> impl Iterator<Item = (Operator, &Term)> + '_ {
        std::iter::once((Operator::Plus, &self.initial_term))
            .chain(self.operations.iter().map(|op| (op.operator, &op.term)))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial_term)?;
        for op in &self.operations {
            write!(f, " {}", op)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Operation {
    pub operator: Operator,
    pub term: Term,
}

impl Operation {
    pub fn new(operator: Operator, term: impl Into<Term>) -> Self {
        Self {
            operator,
            term: term.into(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.term)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    DiceRoll(DiceRoll),
    Modifier(Modifier),
}

impl From<DiceRoll> for Term {
    fn from(dice: DiceRoll) -> Self {
        Self::DiceRoll(dice)
    }
}

impl From<Modifier> for Term {
    fn from(modifier: Modifier) -> Self {
        Self::Modifier(modifier)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiceRoll(dice) => fmt::Display::fmt(dice, f),
            Self::Modifier(modifier) => fmt::Display::fmt(modifier, f),
        }
    }
}

/// `count` dice, each uniformly distributed over `1..=sides`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceRoll {
    pub count: UInt,
    pub sides: NonZeroUInt,
}

impl DiceRoll {
    pub const fn new(count: UInt, sides: NonZeroUInt) -> Self {
        Self { count, sides }
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D{}", self.count, self.sides)
    }
}

/// A constant. Always non-negative; the sign lives on the [`Operation`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Modifier {
    pub value: UInt,
}

impl Modifier {
    pub const fn new(value: UInt) -> Self {
        Self { value }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
