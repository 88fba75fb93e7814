use super::{error::RollError, roller::Roller, tree::*, RResult};
use crate::parse::ast::{DiceRoll, Expression, Term};

/// The generator behind [`Dice::generate`](crate::Dice::generate).
pub type DefaultRoller = rand::rngs::ThreadRng;

/// Evaluates expressions against an exclusively borrowed [`Roller`].
///
/// With a `max_rolls` budget, evaluation fails with
/// [`RollError::TooManyRolls`] before drawing any die that would exceed it.
/// The budget is shared by every expression evaluated through the same
/// context.
pub struct RollContext<'r, R: ?Sized> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: &'r mut R,
}

impl<'r, R: Roller + ?Sized> RollContext<'r, R> {
    pub fn new(max_rolls: Option<usize>, roller: &'r mut R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: &'r mut R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: &'r mut R) -> Self {
        Self::new(None, roller)
    }

    pub fn rolls(&self) -> usize {
        self.rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        let rolls = self.rolls.saturating_add(n);
        match self.max_rolls {
            Some(max) if rolls > max => Err(RollError::TooManyRolls { max }),
            _ => {
                self.rolls = rolls;
                Ok(())
            }
        }
    }

    fn roll_dice(&mut self, dice: &DiceRoll) -> RResult<RollPart> {
        self.count_rolls(usize::try_from(dice.count).unwrap_or(usize::MAX))?;

        let faces = self.roller.roll_n(dice.count, dice.sides)?;
        if let Some(&value) = faces.iter().find(|&&face| face == 0 || face > dice.sides.get()) {
            return Err(RollError::OutOfRange {
                value,
                sides: dice.sides.get(),
            });
        }

        RollPart::dice(dice.count, dice.sides, &faces)
    }

    pub fn eval_term(&mut self, term: &Term) -> RResult<RollPart> {
        let part = match term {
            Term::DiceRoll(dice) => self.roll_dice(dice)?,
            Term::Modifier(modifier) => RollPart::constant(modifier.value)?,
        };
        log::trace!("rolled {} -> {:?}", term, part.result_parts);
        Ok(part)
    }

    pub fn eval(&mut self, expr: &Expression) -> RResult<RollResult> {
        let mut result = RollResult::new(self.eval_term(expr.initial_term())?);

        for op in expr.operations() {
            let part = self.eval_term(&op.term)?.with_operator(op.operator);
            result.push(part)?;
        }

        log::debug!("evaluated {} = {}", expr, result.total());
        Ok(result)
    }
}
