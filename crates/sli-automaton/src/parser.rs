//! A small recursive-descent parser for guard expressions, e.g.
//! `v > 0 && mode != "idle"`.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr       := or_expr
//! or_expr    := and_expr ("||" and_expr)*
//! and_expr   := unary ("&&" unary)*
//! unary      := "!" unary | primary
//! primary    := "(" expr ")" | "true" | comparison
//! comparison := IDENT COMPARE_OP literal
//! literal    := NUMBER | STRING
//! ```

use crate::guard::{CompareOp, Guard, Literal};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardParseError {
    #[error("unexpected end of guard expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unexpected token {found:?}, expected {expected}")]
    UnexpectedToken { found: String, expected: &'static str },
    #[error("invalid numeric literal: {0}")]
    InvalidNumber(String),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("trailing input after a complete guard expression: {0:?}")]
    TrailingInput(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Number(String),
    Str(String),
    And,
    Or,
    Not,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    True,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, GuardParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        match c {
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '&' if chars.get(i + 1) == Some(&'&') => {
                tokens.push(Token::And);
                i += 2;
            }
            '|' if chars.get(i + 1) == Some(&'|') => {
                tokens.push(Token::Or);
                i += 2;
            }
            '!' if chars.get(i + 1) == Some(&'=') => {
                tokens.push(Token::Ne);
                i += 2;
            }
            '!' => {
                tokens.push(Token::Not);
                i += 1;
            }
            '=' if chars.get(i + 1) == Some(&'=') => {
                tokens.push(Token::Eq);
                i += 2;
            }
            '<' if chars.get(i + 1) == Some(&'=') => {
                tokens.push(Token::Le);
                i += 2;
            }
            '<' => {
                tokens.push(Token::Lt);
                i += 1;
            }
            '>' if chars.get(i + 1) == Some(&'=') => {
                tokens.push(Token::Ge);
                i += 2;
            }
            '>' => {
                tokens.push(Token::Gt);
                i += 1;
            }
            '"' => {
                let start = i + 1;
                let mut j = start;
                while j < chars.len() && chars[j] != '"' {
                    j += 1;
                }
                if j >= chars.len() {
                    return Err(GuardParseError::UnterminatedString);
                }
                tokens.push(Token::Str(chars[start..j].iter().collect()));
                i = j + 1;
            }
            c if c.is_ascii_digit() || (c == '-' && chars.get(i + 1).is_some_and(char::is_ascii_digit)) => {
                let start = i;
                i += 1;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                tokens.push(Token::Number(chars[start..i].iter().collect()));
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '.') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                tokens.push(if word == "true" { Token::True } else { Token::Ident(word) });
            }
            other => {
                return Err(GuardParseError::UnexpectedToken {
                    found: other.to_string(),
                    expected: "start of a guard token",
                })
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    fn parse_expr(&mut self) -> Result<Guard, GuardParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Guard, GuardParseError> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Or)) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Guard::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Guard, GuardParseError> {
        let mut lhs = self.parse_unary()?;
        while matches!(self.peek(), Some(Token::And)) {
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Guard::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Guard, GuardParseError> {
        if matches!(self.peek(), Some(Token::Not)) {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Guard::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Guard, GuardParseError> {
        match self.advance() {
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    other => Err(unexpected(other, ")")),
                }
            }
            Some(Token::True) => Ok(Guard::Always),
            Some(Token::Ident(column)) => {
                let op = self.parse_compare_op()?;
                let value = self.parse_literal()?;
                Ok(Guard::Compare { column, op, value })
            }
            other => Err(unexpected(other, "'(', 'true', or a column name")),
        }
    }

    fn parse_compare_op(&mut self) -> Result<CompareOp, GuardParseError> {
        match self.advance() {
            Some(Token::Lt) => Ok(CompareOp::Lt),
            Some(Token::Le) => Ok(CompareOp::Le),
            Some(Token::Gt) => Ok(CompareOp::Gt),
            Some(Token::Ge) => Ok(CompareOp::Ge),
            Some(Token::Eq) => Ok(CompareOp::Eq),
            Some(Token::Ne) => Ok(CompareOp::Ne),
            other => Err(unexpected(other, "a comparison operator")),
        }
    }

    fn parse_literal(&mut self) -> Result<Literal, GuardParseError> {
        match self.advance() {
            Some(Token::Number(text)) => {
                if text.contains('.') {
                    text.parse::<f64>()
                        .map(Literal::Float)
                        .map_err(|_| GuardParseError::InvalidNumber(text))
                } else {
                    text.parse::<i64>()
                        .map(Literal::Int)
                        .map_err(|_| GuardParseError::InvalidNumber(text))
                }
            }
            Some(Token::Str(s)) => Ok(Literal::Str(s)),
            other => Err(unexpected(other, "a numeric or string literal")),
        }
    }
}

fn unexpected(token: Option<Token>, expected: &'static str) -> GuardParseError {
    match token {
        Some(t) => GuardParseError::UnexpectedToken { found: format!("{t:?}"), expected },
        None => GuardParseError::UnexpectedEnd { expected },
    }
}

/// Parses a guard expression, e.g. `v > 0 && mode != "idle"`.
pub fn parse_guard(input: &str) -> Result<Guard, GuardParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let guard = parser.parse_expr()?;
    if parser.pos != parser.tokens.len() {
        let rest: String = parser.tokens[parser.pos..].iter().map(|t| format!("{t:?}")).collect();
        return Err(GuardParseError::TrailingInput(rest));
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sli_core::{Columns, Measurement, Value};

    fn meas(pairs: &[(&str, Value)]) -> Measurement {
        let cols: Columns = pairs.iter().map(|(n, v)| ((*n).to_string(), v.clone())).collect();
        Measurement::new(0, cols)
    }

    #[test]
    fn parses_simple_comparison() {
        let guard = parse_guard("v>0").unwrap();
        assert!(guard.evaluate(&meas(&[("v", Value::Int(1))])));
        assert!(!guard.evaluate(&meas(&[("v", Value::Int(-1))])));
    }

    #[test]
    fn parses_conjunction_and_string_literal() {
        let guard = parse_guard(r#"v > 0 && mode != "idle""#).unwrap();
        assert!(guard.evaluate(&meas(&[("v", Value::Int(1)), ("mode", Value::Str("busy".into()))])));
        assert!(!guard.evaluate(&meas(&[("v", Value::Int(1)), ("mode", Value::Str("idle".into()))])));
    }

    #[test]
    fn parses_negation_and_parentheses() {
        let guard = parse_guard("!(v <= 0)").unwrap();
        assert!(guard.evaluate(&meas(&[("v", Value::Int(1))])));
        assert!(!guard.evaluate(&meas(&[("v", Value::Int(0))])));
    }

    #[test]
    fn parses_disjunction() {
        let guard = parse_guard("v < 0 || v > 10").unwrap();
        assert!(guard.evaluate(&meas(&[("v", Value::Int(-1))])));
        assert!(guard.evaluate(&meas(&[("v", Value::Int(11))])));
        assert!(!guard.evaluate(&meas(&[("v", Value::Int(5))])));
    }

    #[test]
    fn parses_true_literal() {
        assert_eq!(parse_guard("true").unwrap(), Guard::Always);
    }

    #[test]
    fn rejects_unterminated_string() {
        assert_eq!(parse_guard(r#"mode == "idle"#), Err(GuardParseError::UnterminatedString));
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(matches!(parse_guard("v > 0 v"), Err(GuardParseError::TrailingInput(_))));
    }

    #[test]
    fn rejects_incomplete_comparison() {
        assert!(matches!(parse_guard("v >"), Err(GuardParseError::UnexpectedEnd { .. })));
    }
}
