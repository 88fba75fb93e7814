use std::fmt::{self, Write};
use std::num::NonZeroU64;

pub type Int = i64;
pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The sign joining a term onto the rest of an expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Plus,
    Minus,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    /// Applies this operator's sign to `x`.
    pub fn apply(self, x: Int) -> Int {
        match self {
            Self::Plus => x,
            Self::Minus => -x,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
