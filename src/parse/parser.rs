use super::{ast::*, error::*, lexer::*};
use crate::common::*;

type PResult<T> = Result<T, ParseError>;
type TResult<T = Term> = Result<T, TermError>;

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    // Byte offset just past the last consumed token.
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        let source = s.trim();
        Self {
            source,
            lexer: lexer(source),
            cursor: 0,
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        if self.source.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let initial_term = self
            .parse_term()
            .map_err(ParseError::InvalidInitialTerm)?;

        let mut operations = Vec::new();
        while let Some(operator) = self.parse_operator()? {
            let term = self.parse_term().map_err(ParseError::TrailingOperator)?;
            operations.push(Operation::new(operator, term));
        }

        let expr = Expression::new(initial_term, operations);
        log::debug!("parsed {:?} as {}", self.source, expr);
        Ok(expr)
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    fn advance(&mut self) -> Option<TokenKind> {
        let kind = self.lexer.next()?;
        log::trace!("token {} {:?}", kind.to_str(), self.lexer.slice());
        Some(kind)
    }

    fn bump(&mut self) {
        self.cursor = self.lexer.span().end;
    }

    /// Matches `[0-9]*[dD][0-9]+` at the cursor without consuming it.
    ///
    /// The count, marker and sides are separate tokens, so they only form a
    /// dice roll when nothing separates them.
    fn match_dice(&self) -> Option<DiceMatch<'a>> {
        let mut lexer = self.lexer.clone();
        let mut kind = lexer.next()?;
        let start = lexer.span().start;

        let mut count = None;
        if kind == TokenKind::Integer {
            count = Some(lexer.slice());
            let end = lexer.span().end;
            kind = lexer.next()?;
            if lexer.span().start != end {
                return None;
            }
        }
        if kind != TokenKind::DiceMarker {
            return None;
        }

        let end = lexer.span().end;
        if lexer.next()? != TokenKind::Integer || lexer.span().start != end {
            return None;
        }

        Some(DiceMatch {
            slice: &self.source[start..lexer.span().end],
            count,
            sides: lexer.slice(),
            lexer,
        })
    }

    fn parse_term(&mut self) -> TResult {
        // Whitespace after an operator belongs to the operator.
        let found = self.remainder().trim_start();

        if let Some(dice) = self.match_dice() {
            log::trace!("dice {:?}", dice.slice);
            let term = dice.to_dice()?;
            self.lexer = dice.lexer;
            self.bump();
            return Ok(term.into());
        }

        match self.advance() {
            Some(TokenKind::Integer) => {
                let value = parse_uint(self.lexer.slice())?;
                self.bump();
                Ok(Modifier::new(value).into())
            }
            _ => Err(TermError::UnexpectedToken {
                found: found.to_string(),
            }),
        }
    }

    fn parse_operator(&mut self) -> PResult<Option<Operator>> {
        let found = self.remainder();

        let operator = match self.advance() {
            None => return Ok(None),
            Some(TokenKind::Plus) => Operator::Plus,
            Some(TokenKind::Minus) => Operator::Minus,
            Some(_) => {
                return Err(ParseError::ExpectedOperator {
                    found: found.to_string(),
                })
            }
        };

        self.bump();
        Ok(Some(operator))
    }
}

/// Reads a digit run, keeping it within the signed range so totals can
/// carry it.
fn parse_uint(s: &str) -> TResult<UInt> {
    s.parse::<Int>()
        .ok()
        .and_then(|n| UInt::try_from(n).ok())
        .ok_or_else(|| TermError::NumberOutOfRange {
            slice: s.to_string(),
        })
}

struct DiceMatch<'a> {
    slice: &'a str,
    count: Option<&'a str>,
    sides: &'a str,
    // Positioned just past the sides.
    lexer: Lexer<'a>,
}

impl DiceMatch<'_> {
    fn to_dice(&self) -> TResult<DiceRoll> {
        let count = match self.count {
            Some(count) => parse_uint(count)?,
            None => 1,
        };
        let sides = NonZeroUInt::new(parse_uint(self.sides)?).ok_or_else(|| {
            TermError::InvalidDiceSides {
                dice: self.slice.to_string(),
            }
        })?;

        Ok(DiceRoll::new(count, sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::test_strategies::*;
    use proptest::prelude::*;

    macro_rules! dice {
        ($count:expr, $sides:expr) => {
            Term::from(DiceRoll::new($count, NonZeroUInt::new($sides).unwrap()))
        };
    }

    macro_rules! modifier {
        ($value:expr) => {
            Term::from(Modifier::new($value))
        };
    }

    macro_rules! expr {
        ($initial:expr $(; $op:ident $term:expr)*) => {
            Expression::new($initial, vec![$(Operation::new(Operator::$op, $term)),*])
        };
    }

    fn parse(input: &str) -> PResult<Expression> {
        Parser::new(input).parse()
    }

    fn check(input: &str, expected: Expression) {
        assert_eq!(parse(input), Ok(expected), "parsing {:?}", input);
    }

    fn check_err(input: &str, contains: &str) -> ParseError {
        let err = parse(input).expect_err(input);
        let msg = err.to_string();
        assert!(
            msg.contains(contains),
            "parsing {:?}: error {:?} does not contain {:?}",
            input,
            msg,
            contains
        );
        err
    }

    #[test]
    fn test_parse_single_term() {
        check("d20", expr!(dice!(1, 20)));
        check("D6", expr!(dice!(1, 6)));
        check("3d6", expr!(dice!(3, 6)));
        check("5", expr!(modifier!(5)));
        check("  12  ", expr!(modifier!(12)));
    }

    #[test]
    fn test_parse_chain() {
        check("d20+5", expr!(dice!(1, 20); Plus modifier!(5)));
        check(" D8 - 2 ", expr!(dice!(1, 8); Minus modifier!(2)));
        check("7+2d4", expr!(modifier!(7); Plus dice!(2, 4)));
        check(
            "d20 + 2d8 - 5",
            expr!(dice!(1, 20); Plus dice!(2, 8); Minus modifier!(5)),
        );
        check(
            "1d100+1d20-1d12+1d4-1",
            expr!(dice!(1, 100); Plus dice!(1, 20); Minus dice!(1, 12); Plus dice!(1, 4); Minus modifier!(1)),
        );
    }

    #[test]
    fn test_parse_zero_count() {
        check("0d6", expr!(dice!(0, 6)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
        check_err("\t\n", "empty expression");
    }

    #[test]
    fn test_parse_invalid_initial_term() {
        let err = check_err("+5", "invalid initial term");
        assert_eq!(
            err,
            ParseError::InvalidInitialTerm(TermError::UnexpectedToken {
                found: "+5".to_string()
            })
        );

        let err = check_err("potato", "expected dice roll (e.g., 'd6') or modifier (e.g., '5')");
        assert!(matches!(err, ParseError::InvalidInitialTerm(_)));
        assert_eq!(err.found(), Some("potato"));
    }

    #[test]
    fn test_parse_trailing_operator() {
        let err = check_err("d20+", "expression ends with an operator");
        assert_eq!(
            err,
            ParseError::TrailingOperator(TermError::UnexpectedToken {
                found: String::new()
            })
        );

        let err = check_err("3d6-", "expression ends with an operator");
        assert!(matches!(err, ParseError::TrailingOperator(_)));

        let err = check_err("d6++5", "expression ends with an operator");
        assert_eq!(err.found(), Some("+5"));
    }

    #[test]
    fn test_parse_expected_operator() {
        let err = check_err("d20*5", "expected '+' or '-'");
        assert_eq!(
            err,
            ParseError::ExpectedOperator {
                found: "*5".to_string()
            }
        );

        let err = check_err("d20 5", "expected '+' or '-'");
        assert_eq!(err.found(), Some(" 5"));

        let err = check_err("2d6 + 1 1", "expected '+' or '-'");
        assert_eq!(err.found(), Some(" 1"));
    }

    #[test]
    fn test_parse_dice_without_sides() {
        // "3" is a valid constant; the stray "d" is what fails.
        let err = check_err("3d", "expected '+' or '-'");
        assert_eq!(
            err,
            ParseError::ExpectedOperator {
                found: "d".to_string()
            }
        );
    }

    #[test]
    fn test_parse_zero_sides() {
        let err = check_err("2d0", "dice must have more than 0 sides");
        assert_eq!(
            err.term_error(),
            Some(&TermError::InvalidDiceSides {
                dice: "2d0".to_string()
            })
        );

        let err = check_err("d20 - d0", "dice must have more than 0 sides");
        assert!(matches!(
            err,
            ParseError::TrailingOperator(TermError::InvalidDiceSides { .. })
        ));
    }

    #[test]
    fn test_parse_wide_numbers() {
        check("5000000000", expr!(modifier!(5_000_000_000)));
        check("d10000000000", expr!(dice!(1, 10_000_000_000)));
        check(
            "4294967296d6 - 9223372036854775807",
            expr!(dice!(4_294_967_296, 6); Minus modifier!(9_223_372_036_854_775_807)),
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = check_err("9223372036854775808", "number out of range");
        assert_eq!(
            err.term_error(),
            Some(&TermError::NumberOutOfRange {
                slice: "9223372036854775808".to_string()
            })
        );
        check_err("d20+1d99999999999999999999", "number out of range");
        check_err("99999999999999999999d6", "number out of range");
    }

    #[test]
    fn test_display_reparses() {
        let expr = parse("d20 + 2D8-5").unwrap();
        assert_eq!(expr.to_string(), "1D20 + 2D8 - 5");
        assert_eq!(parse(&expr.to_string()), Ok(expr));
    }

    proptest! {
        #[test]
        fn prop_parse_dice(count in 1..=1000u64, sides in 1..=1000u64, upper in any::<bool>()) {
            let marker = if upper { 'D' } else { 'd' };
            let expr = parse(&format!("{}{}{}", count, marker, sides)).unwrap();
            prop_assert_eq!(expr, expr!(dice!(count, sides)));
        }

        #[test]
        fn prop_parse_implied_count(sides in 1..=1000u64) {
            let lower = parse(&format!("d{}", sides)).unwrap();
            let upper = parse(&format!("D{}", sides)).unwrap();
            prop_assert_eq!(&lower, &upper);
            prop_assert_eq!(lower, expr!(dice!(1, sides)));
        }

        #[test]
        fn prop_parse_modifier(value in 0..=Int::MAX as UInt) {
            let expr = parse(&value.to_string()).unwrap();
            prop_assert_eq!(expr, expr!(modifier!(value)));
        }

        #[test]
        fn prop_parse_zero_sides(count in prop::option::of(0..=1000u64)) {
            let count = count.map(|c| c.to_string()).unwrap_or_default();
            let err = parse(&format!("{}d0", count)).unwrap_err();
            let is_zero_sides = matches!(err.term_error(), Some(TermError::InvalidDiceSides { .. }));
            prop_assert!(is_zero_sides);
        }

        #[test]
        fn prop_parse_chain((input, ops) in chain_strategy()) {
            let expr = parse(&input).unwrap();
            let actual: Vec<_> = expr.operations().iter().map(|op| op.operator).collect();
            prop_assert_eq!(actual, ops);
        }

        #[test]
        fn prop_parse_whitespace_insensitive((input, _) in chain_strategy()) {
            let compact: String = input.split_whitespace().collect();
            prop_assert_eq!(parse(&input), parse(&compact));
        }

        #[test]
        fn prop_display_reparses((input, _) in chain_strategy()) {
            let expr = parse(&input).unwrap();
            prop_assert_eq!(parse(&expr.to_string()), Ok(expr));
        }
    }
}
