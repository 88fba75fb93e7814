use super::{error::RollError, stringify::{SimpleStringifier, Stringify}, RResult};
use crate::common::*;
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PartKind {
    DiceRoll,
    Constant,
}

/// The outcome of a single term of an expression.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RollPart {
    pub kind: PartKind,
    /// The operator the term was chained with; `Plus` for the initial term.
    pub operator: Operator,
    /// Number of dice rolled, or 0 for a constant.
    pub sides: UInt,
    /// Size of each die rolled, or 0 for a constant.
    pub die_size: UInt,
    /// Contribution to the total; negative when subtracted.
    pub value: Int,
    pub absolute_value: Int,
    /// Every die face (or the constant), carrying the same sign as `value`.
    pub result_parts: Vec<Int>,
}

fn to_int(x: UInt) -> RResult<Int> {
    Int::try_from(x).map_err(|_| RollError::Overflow)
}

impl RollPart {
    pub(crate) fn dice(count: UInt, die_size: NonZeroUInt, faces: &[UInt]) -> RResult<Self> {
        let result_parts = faces.iter().map(|&face| to_int(face)).collect::<RResult<Vec<_>>>()?;
        let sum = result_parts
            .iter()
            .try_fold(0, |acc: Int, &x| acc.checked_add(x))
            .ok_or(RollError::Overflow)?;
        Ok(Self {
            kind: PartKind::DiceRoll,
            operator: Operator::Plus,
            sides: count,
            die_size: die_size.get(),
            value: sum,
            absolute_value: sum,
            result_parts,
        })
    }

    pub(crate) fn constant(value: UInt) -> RResult<Self> {
        let value = to_int(value)?;
        Ok(Self {
            kind: PartKind::Constant,
            operator: Operator::Plus,
            sides: 0,
            die_size: 0,
            value,
            absolute_value: value,
            result_parts: vec![value],
        })
    }

    /// Re-signs this part as chained with `operator`.
    pub(crate) fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self.value = operator.apply(self.absolute_value);
        for x in &mut self.result_parts {
            *x = operator.apply(x.abs());
        }
        self
    }

    /// Number of faces recorded; 1 for a constant.
    pub fn count(&self) -> usize {
        self.result_parts.len()
    }

    /// The unsigned die faces (or the constant).
    pub fn faces(&self) -> impl Iterator<Item = Int> + '_ {
        self.result_parts.iter().map(|x| x.abs())
    }
}

/// The outcome of evaluating a whole expression.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RollResult {
    total: Int,
    parts: NonEmpty<RollPart>,
}

impl RollResult {
    pub(crate) fn new(first: RollPart) -> Self {
        Self {
            total: first.value,
            parts: NonEmpty::new(first),
        }
    }

    pub(crate) fn push(&mut self, part: RollPart) -> RResult<()> {
        self.total = self
            .total
            .checked_add(part.value)
            .ok_or(RollError::Overflow)?;
        self.parts.push(part);
        Ok(())
    }

    pub fn total(&self) -> Int {
        self.total
    }

    /// One part per term, initial term first.
    pub fn parts(&self) -> &[RollPart] {
        &self.parts
    }

    pub fn into_parts(self) -> NonEmpty<RollPart> {
        self.parts
    }

    /// Renders this result with the given stringifier.
    pub fn result<S: Stringify + Default>(&self) -> String {
        S::default().str_result(self)
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SimpleStringifier::new().str_result(self))
    }
}
