use thiserror::Error;

/// Failure to read a single term (a dice roll or a constant).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TermError {
    #[error("dice must have more than 0 sides, found {dice:?}")]
    InvalidDiceSides { dice: String },
    #[error("expected dice roll (e.g., 'd6') or modifier (e.g., '5') but found: '{found}'")]
    UnexpectedToken { found: String },
    #[error("number out of range: {slice:?}")]
    NumberOutOfRange { slice: String },
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("cannot parse an empty expression")]
    EmptyExpression,
    #[error("invalid initial term: {0}")]
    InvalidInitialTerm(#[source] TermError),
    #[error("expected '+' or '-' but found: '{found}'")]
    ExpectedOperator { found: String },
    #[error("expression ends with an operator or has invalid term after operator: {0}")]
    TrailingOperator(#[source] TermError),
}

impl ParseError {
    /// The term-level failure wrapped by this error, if any.
    pub fn term_error(&self) -> Option<&TermError> {
        match self {
            Self::InvalidInitialTerm(err) | Self::TrailingOperator(err) => Some(err),
            Self::EmptyExpression | Self::ExpectedOperator { .. } => None,
        }
    }

    /// The unconsumed input at the point of failure.
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::EmptyExpression => None,
            Self::ExpectedOperator { found } => Some(found.as_str()),
            Self::InvalidInitialTerm(err) | Self::TrailingOperator(err) => Some(err.found()),
        }
    }
}

impl TermError {
    pub fn found(&self) -> &str {
        match self {
            Self::InvalidDiceSides { dice } => dice.as_str(),
            Self::UnexpectedToken { found } => found.as_str(),
            Self::NumberOutOfRange { slice } => slice.as_str(),
        }
    }
}
