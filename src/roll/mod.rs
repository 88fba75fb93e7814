mod ctx;
mod error;
pub(crate) mod roller;
mod stringify;
mod tree;

use crate::parse::ast;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use roller::{Roller, ScriptedRoller};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use tree::{PartKind, RollPart, RollResult};

/// Evaluates `expr` once, drawing every die from `roller`.
pub fn eval<R: Roller + ?Sized>(
    expr: &ast::Expression,
    roller: &mut R,
    max_rolls: Option<usize>,
) -> RResult<RollResult> {
    RollContext::new(max_rolls, roller).eval(expr)
}
