use logos::Logos;

pub(crate) type Lexer<'a> = logos::Lexer<'a, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s)
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,
    // Only a dice roll when directly between digits: `3d6`, `d20`.
    #[regex(r"[dD]")]
    DiceMarker,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Integer => "<integer>",
            Self::DiceMarker => "'d'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Error => "<error>",
        }
    }
}
