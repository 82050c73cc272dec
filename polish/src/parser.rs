use lexers::{LexError, PrefixToken, PrefixTokenizer, TokenSource};
use std::mem;
use std::str::Chars;

use crate::error::{Expected, ParseError, SyntaxError};
use crate::tree::{ExprTree, Operator};

/* Grammar:
 *
 *  expr     := NUMBER | '(' operator expr expr ')' ;
 *  operator := '+' | '-' | '*' | '/' ;
 *
 */

pub struct PrefixParser<S: TokenSource> {
    source: S,
    lookahead: PrefixToken,
}

impl<'a> PrefixParser<PrefixTokenizer<Chars<'a>>> {
    pub fn parse_str(expr: &'a str) -> Result<Option<ExprTree>, ParseError> {
        PrefixParser::new(PrefixTokenizer::new(expr.chars()))?.build_tree()
    }
}

impl<S: TokenSource> PrefixParser<S> {
    /// Pulls the first token right away, so lexical errors at the very
    /// start of the input surface here.
    pub fn new(mut source: S) -> Result<Self, ParseError> {
        let lookahead = source.next_token()?;
        Ok(PrefixParser { source, lookahead })
    }

    // consume the lookahead, returning it, and pull the next one
    fn advance(&mut self) -> Result<PrefixToken, ParseError> {
        let next = self.source.next_token()?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    fn error(&self, expected: Expected) -> ParseError {
        ParseError::Syntax(SyntaxError { expected, found: self.lookahead.clone() })
    }

    fn expect(&mut self, token: PrefixToken, expected: Expected) -> Result<(), ParseError> {
        if self.lookahead != token {
            return Err(self.error(expected));
        }
        self.advance()?;
        Ok(())
    }

    fn expr(&mut self) -> Result<ExprTree, ParseError> {
        if let PrefixToken::Number(text) = &mut self.lookahead {
            let text = mem::take(text);
            self.advance()?;
            return Ok(ExprTree::Number(text));
        }
        self.expect(PrefixToken::OParen, Expected::Expression)?;
        let op = Operator::from_token(&self.lookahead)
            .ok_or_else(|| self.error(Expected::Operator))?;
        self.advance()?;
        let lhs = self.expr()?;
        let rhs = self.expr()?;
        self.expect(PrefixToken::CParen, Expected::CParen)?;
        Ok(ExprTree::binop(op, lhs, rhs))
    }

    /// Parse everything up to end of input. Empty input yields `None`.
    /// When several top-level expressions follow each other all of them are
    /// parsed and the last one is returned.
    pub fn build_tree(&mut self) -> Result<Option<ExprTree>, ParseError> {
        if self.lookahead == PrefixToken::EOF {
            return Ok(None);
        }
        if self.lookahead != PrefixToken::OParen {
            return Err(self.error(Expected::OParen));
        }
        let mut tree = self.expr()?;
        while self.lookahead != PrefixToken::EOF {
            let next = self.expr()?;
            tracing::warn!(discarded = %tree, "multiple top-level expressions, keeping the last");
            tree = next;
        }
        tracing::debug!(%tree, "parsed");
        Ok(Some(tree))
    }
}

/// Whether `input` parses to completion. Syntax errors make it invalid,
/// lexical errors are not a grammar question and are handed back.
pub fn is_valid(input: &str) -> Result<bool, LexError> {
    match PrefixParser::parse_str(input) {
        Ok(_) => Ok(true),
        Err(ParseError::Syntax(_)) => Ok(false),
        Err(ParseError::Lex(e)) => Err(e),
    }
}
