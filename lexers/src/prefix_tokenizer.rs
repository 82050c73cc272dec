use crate::scanner::Scanner;
use std::fmt;
use thiserror::Error;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PrefixToken {
    EOF,
    OParen, CParen,
    Number(String),
    Plus, Minus, Times, Divide,
}

impl PrefixToken {
    pub fn is_operator(&self) -> bool {
        matches!(self,
                 PrefixToken::Plus | PrefixToken::Minus |
                 PrefixToken::Times | PrefixToken::Divide)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            PrefixToken::EOF => "end of input",
            PrefixToken::OParen => "'('",
            PrefixToken::CParen => "')'",
            PrefixToken::Number(_) => "number",
            PrefixToken::Plus => "'+'",
            PrefixToken::Minus => "'-'",
            PrefixToken::Times => "'*'",
            PrefixToken::Divide => "'/'",
        }
    }
}

impl fmt::Display for PrefixToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixToken::Number(n) => write!(f, "number {}", n),
            other => f.write_str(other.describe()),
        }
    }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum LexError {
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidChar { ch: char, offset: usize },
}

/// Pull interface a parser drives to get one token at a time.
/// Once the input is exhausted `EOF` is returned on every call.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<PrefixToken, LexError>;
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum State {
    Start,
    InNumber,
}

pub struct PrefixTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    done: bool,
}

impl<I: Iterator<Item = char>> PrefixTokenizer<I> {
    pub fn new(source: I) -> Self {
        PrefixTokenizer { src: Scanner::new(source), done: false }
    }

    fn get_token(&mut self) -> Result<PrefixToken, LexError> {
        let mut state = State::Start;
        let mut digits = String::new();
        loop {
            let offset = self.src.pos();
            let next = self.src.next();
            match state {
                State::Start => match next {
                    None => return Ok(PrefixToken::EOF),
                    Some(c) if WHITE.contains(&c) => continue,
                    Some('(') => return Ok(PrefixToken::OParen),
                    Some(')') => return Ok(PrefixToken::CParen),
                    Some('+') => return Ok(PrefixToken::Plus),
                    Some('-') => return Ok(PrefixToken::Minus),
                    Some('*') => return Ok(PrefixToken::Times),
                    Some('/') => return Ok(PrefixToken::Divide),
                    Some(c) if c.is_ascii_digit() => {
                        digits.push(c);
                        state = State::InNumber;
                    }
                    Some(ch) => return Err(LexError::InvalidChar { ch, offset }),
                },
                State::InNumber => match next {
                    Some(c) if c.is_ascii_digit() => digits.push(c),
                    other => {
                        // the terminator belongs to whatever comes next
                        if let Some(c) = other {
                            self.src.push_back(c);
                        }
                        return Ok(PrefixToken::Number(digits));
                    }
                },
            }
        }
    }
}

impl<I: Iterator<Item = char>> TokenSource for PrefixTokenizer<I> {
    fn next_token(&mut self) -> Result<PrefixToken, LexError> {
        let token = self.get_token();
        tracing::trace!(?token, "scanned");
        token
    }
}

// Yields every token up to EOF, then stops. A lexical error ends the stream.
impl<I: Iterator<Item = char>> Iterator for PrefixTokenizer<I> {
    type Item = Result<PrefixToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(PrefixToken::EOF) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
            token => Some(token),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
