use super::{error::RollError, RResult};
use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use std::collections::VecDeque;

/// A source of die faces.
///
/// Implemented for every [`rand::Rng`]; implement it directly to script the
/// faces an evaluation sees.
pub trait Roller {
    /// Draws one face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> RResult<UInt>;

    /// Draws `num` faces in `1..=sides`, in order.
    ///
    /// The faces are collected eagerly; callers bound `num` through the
    /// [`RollContext`](super::RollContext) budget.
    fn roll_n(&mut self, num: UInt, sides: NonZeroUInt) -> RResult<Vec<UInt>> {
        (0..num).map(|_| self.roll(sides)).collect()
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
        Ok(self.gen_range(1..=sides.get()))
    }

    fn roll_n(&mut self, num: UInt, sides: NonZeroUInt) -> RResult<Vec<UInt>> {
        Ok(Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num as usize)
            .collect())
    }
}

/// Replays a fixed sequence of faces, failing once it runs out.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScriptedRoller {
    faces: VecDeque<UInt>,
}

impl ScriptedRoller {
    pub fn new(faces: impl IntoIterator<Item = UInt>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, _sides: NonZeroUInt) -> RResult<UInt> {
        self.faces
            .pop_front()
            .ok_or_else(|| RollError::source_error("scripted roller ran out of faces"))
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
