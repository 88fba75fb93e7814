use crate::common::UInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled (limit is {max})")]
    TooManyRolls { max: usize },
    #[error("random source produced {value}, which is not a face of a d{sides}")]
    OutOfRange { value: UInt, sides: UInt },
    #[error("roll total does not fit in a 64-bit integer")]
    Overflow,
    #[error("random source failed: {0}")]
    Source(String),
}

impl RollError {
    pub fn source_error(msg: impl ToString) -> Self {
        Self::Source(msg.to_string())
    }
}
