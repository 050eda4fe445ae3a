//! Restricted recursive-descent parser for answers supplied as text.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary)*
//! unary   := ("+" | "-") unary | primary
//! primary := NUMBER | "(" expr ")"
//! NUMBER  := DIGIT+ ("." DIGIT*)? | "." DIGIT+
//! ```
//!
//! Anything else (names, calls, `**`, `%`, quotes) is rejected while
//! tokenizing, so no input can do more than arithmetic.

use std::fmt;
use std::iter::{Enumerate, Peekable};
use std::str::{CharIndices, FromStr};

use log::{debug, warn};

use crate::expression::ast::{Expression, Operator, Value};
use crate::expression::errors::ExpressionError;

/// Deepest allowed nesting of parentheses and unary signs
pub const MAX_NESTING_DEPTH: usize = 64;

/// Longest digit run accepted in a literal, keeps it within `i64`
const MAX_LITERAL_DIGITS: usize = 18;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Value),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Token positions are character indices, so `×` or `÷` count as one column
struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<Enumerate<CharIndices<'a>>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().enumerate().peekable(),
        }
    }

    fn tokenize(mut self) -> Result<Vec<(usize, Token)>, ExpressionError> {
        let mut tokens = Vec::new();

        while let Some(&(position, (offset, ch))) = self.chars.peek() {
            let token = match ch {
                c if c.is_whitespace() => {
                    self.chars.next();
                    continue;
                }
                c if c.is_ascii_digit() || c == '.' => self.number(offset)?,
                '+' => Token::Plus,
                '-' | '−' => Token::Minus,
                '*' | '×' => Token::Star,
                '/' | '÷' => Token::Slash,
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => {
                    warn!("Rejecting character '{}' at position {}", other, position);
                    return Err(ExpressionError::UnexpectedCharacter {
                        ch: other,
                        position,
                    });
                }
            };

            if !matches!(token, Token::Number(_)) {
                self.chars.next();
            }
            tokens.push((position, token));
        }

        Ok(tokens)
    }

    fn number(&mut self, start: usize) -> Result<Token, ExpressionError> {
        let mut end = start;
        while let Some(&(_, (offset, ch))) = self.chars.peek() {
            if !(ch.is_ascii_digit() || ch == '.') {
                break;
            }
            end = offset + ch.len_utf8();
            self.chars.next();
        }

        let literal = self.input.get(start..end).unwrap_or_default();
        parse_literal(literal).map(Token::Number)
    }
}

fn parse_literal(literal: &str) -> Result<Value, ExpressionError> {
    let invalid = || ExpressionError::InvalidNumber(literal.to_string());

    let (whole, fraction) = match literal.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (literal, ""),
    };

    if fraction.contains('.')
        || (whole.is_empty() && fraction.is_empty())
        || whole.len() + fraction.len() > MAX_LITERAL_DIGITS
    {
        return Err(invalid());
    }

    let digits = format!("{}{}", whole, fraction);
    let numer = digits.parse::<i64>().map_err(|_| invalid())?;
    let exponent = u32::try_from(fraction.len()).map_err(|_| invalid())?;
    let denom = 10_i64.checked_pow(exponent).ok_or_else(invalid)?;

    Ok(Value::new(numer, denom))
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(_, token)| token)
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let item = self.tokens.get(self.cursor).cloned();
        if item.is_some() {
            self.cursor += 1;
        }
        item
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            warn!("Expression nesting exceeds {} levels", MAX_NESTING_DEPTH);
            return Err(ExpressionError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => Operator::Add,
                Some(Token::Minus) => Operator::Sub,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.term()?;
            left = Expression::binary(op, left, right);
        }
    }

    fn term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => Operator::Mul,
                Some(Token::Slash) => Operator::Div,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.unary()?;
            left = Expression::binary(op, left, right);
        }
    }

    fn unary(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some(Token::Plus) | Some(Token::Minus) => {
                let negate = matches!(self.peek(), Some(Token::Minus));
                self.advance();
                self.descend()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(if negate {
                    Expression::Neg(Box::new(inner))
                } else {
                    inner
                })
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression, ExpressionError> {
        match self.advance() {
            Some((_, Token::Number(n))) => Ok(Expression::Number(n)),
            Some((open, Token::LParen)) => {
                self.descend()?;
                let inner = self.expr()?;
                match self.advance() {
                    Some((_, Token::RParen)) => {
                        self.depth -= 1;
                        Ok(inner)
                    }
                    Some((position, token)) => Err(ExpressionError::UnexpectedToken {
                        token: token.to_string(),
                        position,
                    }),
                    None => Err(ExpressionError::UnbalancedParenthesis { position: open }),
                }
            }
            Some((position, token)) => Err(ExpressionError::UnexpectedToken {
                token: token.to_string(),
                position,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

impl Expression {
    /// Parse an arithmetic expression made of numbers, `+ - * /` and parentheses.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains anything outside the
    /// grammar, is malformed, or nests deeper than [`MAX_NESTING_DEPTH`].
    pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
        debug!("Parsing expression: '{}'", input);

        let tokens = Lexer::new(input).tokenize()?;
        if tokens.is_empty() {
            return Err(ExpressionError::EmptyExpression);
        }

        let mut parser = Parser {
            tokens,
            cursor: 0,
            depth: 0,
        };
        let expression = parser.expr()?;

        if let Some((position, token)) = parser.advance() {
            return Err(ExpressionError::UnexpectedToken {
                token: token.to_string(),
                position,
            });
        }

        debug!("Parsed expression: {}", expression);
        Ok(expression)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

#[cfg(test)]
mod tests_inner {
    use super::*;

    #[test]
    fn test_parse_literal_integer() {
        assert_eq!(parse_literal("13"), Ok(Value::from_integer(13)));
    }

    #[test]
    fn test_parse_literal_decimal() {
        assert_eq!(parse_literal("2.5"), Ok(Value::new(5, 2)));
        assert_eq!(parse_literal(".5"), Ok(Value::new(1, 2)));
        assert_eq!(parse_literal("5."), Ok(Value::from_integer(5)));
    }

    #[test]
    fn test_parse_literal_invalid() {
        assert!(parse_literal(".").is_err());
        assert!(parse_literal("1.2.3").is_err());
        assert!(parse_literal("1234567890123456789").is_err());
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        let tokens = Lexer::new(" 6 *\t4 ").tokenize();
        assert!(tokens.is_ok());
        if let Ok(tokens) = tokens {
            let kinds: Vec<Token> = tokens.into_iter().map(|(_, t)| t).collect();
            assert_eq!(
                kinds,
                vec![
                    Token::Number(Value::from_integer(6)),
                    Token::Star,
                    Token::Number(Value::from_integer(4)),
                ]
            );
        }
    }
}
