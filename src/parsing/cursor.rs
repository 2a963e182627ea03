//! Backtracking read head over an immutable token buffer
//!
//! The cursor is the only mutable state a parse needs: an integer position
//! into a shared token slice. [`TokenCursor::save`] and
//! [`TokenCursor::restore`] are the single backtracking mechanism used by
//! constructor detection, field/method disambiguation and call-site probing.
//!
//! The buffer always ends with an EOF sentinel and the position never moves
//! past it, so reading past the end keeps returning EOF.

use super::token::{Token, TokenKind};
use crate::error::{ParseError, ParseResult};
use std::sync::Arc;

/// Opaque checkpoint returned by [`TokenCursor::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Arc<[Token]>,
    pos: usize,
}

impl TokenCursor {
    /// Create a cursor at the first token.
    ///
    /// A trailing EOF token is appended when the sequence does not already
    /// end with one.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens;
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column));
            tokens.push(Token::eof(line, column));
        }
        Self {
            tokens: tokens.into(),
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Token `offset` positions ahead, clamped to EOF
    #[inline]
    pub fn peek(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// The token just consumed, if any
    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|idx| &self.tokens[idx])
    }

    /// Consume the current token and return it. Stays on EOF once reached.
    pub fn advance(&mut self) -> &Token {
        let idx = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    #[inline]
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    /// Consume the current token if it has one of `kinds`
    pub fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        if self.check_any(kinds) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Return the current token without consuming it if it has one of `kinds`
    pub fn match_any(&self, kinds: &[TokenKind]) -> Option<&Token> {
        let token = self.current();
        kinds.contains(&token.kind).then_some(token)
    }

    /// Consume any run of tokens whose kinds appear in `kinds`, in any order.
    ///
    /// Returns how many tokens were consumed.
    pub fn skip_any_of(&mut self, kinds: &[TokenKind]) -> usize {
        let mut skipped = 0;
        while !self.at_end() && self.check_any(kinds) {
            self.advance();
            skipped += 1;
        }
        skipped
    }

    /// Consume a token of `kind` or fail naming what was expected
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.error(expected))
        }
    }

    /// Consume an identifier and return its text
    pub fn expect_identifier(&mut self, expected: &str) -> ParseResult<String> {
        self.expect(TokenKind::Identifier, expected).map(|t| t.text)
    }

    /// Build a structural error at the current token
    pub fn error(&self, expected: &str) -> ParseError {
        let token = self.current();
        if token.kind == TokenKind::Eof {
            ParseError::UnexpectedEof {
                line: token.line,
                expected: expected.to_string(),
            }
        } else {
            ParseError::Syntax {
                line: token.line,
                column: token.column,
                reason: format!("expected {expected}, found {token}"),
            }
        }
    }

    #[inline]
    pub fn save(&self) -> Mark {
        Mark(self.pos)
    }

    #[inline]
    pub fn restore(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// Skip a balanced `open ... close` group.
    ///
    /// The cursor must sit on `open`; on success it sits just past the
    /// matching `close`. Running into EOF first is a structural error.
    pub fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> ParseResult<()> {
        let start = self.current().clone();
        if start.kind != open {
            return Err(self.error(&format!("{open:?}")));
        }
        self.advance();

        let mut depth = 1usize;
        while depth > 0 {
            let kind = self.current().kind;
            if kind == TokenKind::Eof {
                return Err(ParseError::UnexpectedEof {
                    line: start.line,
                    expected: format!("{close:?} matching {open:?} at line {}", start.line),
                });
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
            }
            self.advance();
        }
        Ok(())
    }
}
