use crate::parse::ParseError;
use crate::roll::RollError;

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("{0}")]
    ParseError(#[from] ParseError),
    #[error("{0}")]
    RollError(#[from] RollError),
}
