//! Error types for parsing and evaluating prefix expressions

use lexers::{LexError, PrefixToken};
use std::fmt;
use thiserror::Error;

/// What the grammar would have accepted where parsing stopped
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Expected {
    OParen,
    CParen,
    Operator,
    /// A number or a parenthesized expression
    Expression,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expected::OParen => f.write_str("'('"),
            Expected::CParen => f.write_str("')'"),
            Expected::Operator => f.write_str("one of '+', '-', '*', '/'"),
            Expected::Expression => f.write_str("number or '('"),
        }
    }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: PrefixToken,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("overflow computing {lhs} {op} {rhs}")]
    Overflow { op: char, lhs: i64, rhs: i64 },

    /// A literal that does not fit the integer type
    #[error("number out of range: {0}")]
    OutOfRange(String),
}

/// Failures from turning text into a tree
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Any failure between reading text and producing a value
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

pub type Result<T> = std::result::Result<T, Error>;
