pub mod ast;
mod error;
mod lexer;
mod parser;

#[cfg(test)]
pub(crate) mod test_strategies;

pub use error::{ParseError, TermError};
pub use parser::Parser;

/// Parses a dice expression such as `2d6+5` or `d20 - 1d4 + 3`.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s).parse()
}
