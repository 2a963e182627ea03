//! Call-site scanning inside method bodies
//!
//! There is no expression grammar here. The tracker walks the body token by
//! token, keeps a brace depth, and at each position probes whether the
//! tokens form `receiver . name (` or `name (`. A successful probe is
//! committed, the argument group is skipped as a balanced unit, and the call
//! is recorded. A failed probe rewinds and the tracker steps one token.
//!
//! Consequences worth knowing:
//! - calls written inside another call's arguments are not reported;
//! - in `a.b.c()` the receiver is `b`, the segment right before the name;
//! - a call chained on another call's result (`load().run()`) is not
//!   reported, since its receiver is not an identifier;
//! - `name ( ... ) {` is a method declared in an anonymous class body, not a
//!   call. The body is scanned like any nested block, so its calls count.
//!   The same goes for `name ( ... ) throws`.

use super::cursor::TokenCursor;
use super::method_call::MethodCall;
use super::token::TokenKind;
use crate::error::{ParseError, ParseResult};

/// Receiver keyword for calls on the superclass implementation
pub const SUPER_RECEIVER: &str = "super";

/// Scan a `{ ... }` body and return its calls in source order.
///
/// The cursor must sit on the opening brace and ends just past the
/// matching closing brace.
pub fn track_calls(cursor: &mut TokenCursor) -> ParseResult<Vec<MethodCall>> {
    let open = cursor.expect(TokenKind::LBrace, "'{' to open method body")?;

    let mut depth = 1usize;
    let mut calls = Vec::new();

    while depth > 0 {
        match cursor.current().kind {
            TokenKind::Eof => {
                return Err(ParseError::UnexpectedEof {
                    line: open.line,
                    expected: format!("'}}' closing the body opened at line {}", open.line),
                });
            }
            TokenKind::LBrace => {
                depth += 1;
                cursor.advance();
            }
            TokenKind::RBrace => {
                depth -= 1;
                cursor.advance();
            }
            TokenKind::New => skip_constructed_type(cursor),
            _ => match probe_call(cursor) {
                Some(call) => {
                    cursor.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
                    if !cursor.check_any(&[TokenKind::LBrace, TokenKind::Throws]) {
                        calls.push(call);
                    }
                }
                None => {
                    cursor.advance();
                }
            },
        }
    }

    Ok(calls)
}

/// Try the qualified shape first, then the unqualified one.
///
/// On success the cursor sits on the call's `(`; on failure it is unchanged.
fn probe_call(cursor: &mut TokenCursor) -> Option<MethodCall> {
    probe_qualified(cursor).or_else(|| probe_unqualified(cursor))
}

fn probe_qualified(cursor: &mut TokenCursor) -> Option<MethodCall> {
    let mark = cursor.save();

    if let Some(receiver) = cursor
        .match_any(&[TokenKind::Identifier, TokenKind::This, TokenKind::Super])
        .map(|t| t.text.clone())
    {
        cursor.advance();
        if cursor.match_token(&[TokenKind::Dot]) {
            if let Some((name, line)) = cursor
                .match_any(&[TokenKind::Identifier])
                .map(|t| (t.text.clone(), t.line))
            {
                cursor.advance();
                if cursor.check(TokenKind::LParen) {
                    return Some(MethodCall::new(&name, line).with_receiver(&receiver));
                }
            }
        }
    }

    cursor.restore(mark);
    None
}

fn probe_unqualified(cursor: &mut TokenCursor) -> Option<MethodCall> {
    // `.name(` here means the receiver was an expression, not an identifier
    if cursor.previous().is_some_and(|t| t.kind == TokenKind::Dot) {
        return None;
    }

    let mark = cursor.save();
    if let Some((name, line)) = cursor
        .match_any(&[TokenKind::Identifier])
        .map(|t| (t.text.clone(), t.line))
    {
        cursor.advance();
        if cursor.check(TokenKind::LParen) {
            return Some(MethodCall::new(&name, line));
        }
    }

    cursor.restore(mark);
    None
}

/// Step over `new` and the constructed type name so `new Foo()` is not
/// taken for a call to a method named `Foo`
fn skip_constructed_type(cursor: &mut TokenCursor) {
    cursor.advance();
    if !cursor.match_token(&[TokenKind::Identifier]) {
        return;
    }
    while cursor.check(TokenKind::Dot) && cursor.peek(1).kind == TokenKind::Identifier {
        cursor.advance();
        cursor.advance();
    }
}
