//! Method signature parsing
//!
//! Consumes `[access] [modifiers] [<T>] ReturnType name(params) [throws ...]`
//! and stops in front of the body. Non-access modifiers are discarded; only
//! the access modifier survives into the model.

use super::cursor::TokenCursor;
use super::token::{ACCESS_MODIFIERS, IGNORED_MODIFIERS, TokenKind};
use super::types::{TypeName, parse_type, skip_type_parameters};
use super::unit::skip_annotations;
use crate::error::ParseResult;
use crate::types::{MethodUnit, Parameter, Visibility};

/// Parse one method signature. The returned method has no calls yet.
pub fn parse_signature(cursor: &mut TokenCursor) -> ParseResult<MethodUnit> {
    let access = take_access_modifier(cursor);
    skip_member_modifiers(cursor)?;
    skip_type_parameters(cursor)?;

    let return_type = parse_type(cursor)?;
    let name = cursor.expect(TokenKind::Identifier, "method name")?;

    cursor.expect(TokenKind::LParen, "'(' to open parameter list")?;
    let parameters = parse_parameters(cursor)?;
    cursor.expect(TokenKind::RParen, "')' to close parameter list")?;

    skip_throws_clause(cursor)?;

    Ok(MethodUnit {
        access,
        name: name.text,
        return_type,
        parameters,
        calls: Vec::new(),
        line: name.line,
    })
}

/// Consume an access modifier if one is present
pub fn take_access_modifier(cursor: &mut TokenCursor) -> Option<Visibility> {
    let visibility = cursor
        .match_any(ACCESS_MODIFIERS)
        .and_then(|token| visibility_of(token.kind))?;
    cursor.advance();
    Some(visibility)
}

/// Skip non-access modifiers and annotations in any order
pub fn skip_member_modifiers(cursor: &mut TokenCursor) -> ParseResult<()> {
    loop {
        let skipped = cursor.skip_any_of(IGNORED_MODIFIERS);
        if !skip_annotations(cursor)? && skipped == 0 {
            return Ok(());
        }
    }
}

pub fn visibility_of(kind: TokenKind) -> Option<Visibility> {
    match kind {
        TokenKind::Public => Some(Visibility::Public),
        TokenKind::Protected => Some(Visibility::Protected),
        TokenKind::Private => Some(Visibility::Private),
        _ => None,
    }
}

/// Comma-separated `Type name` entries up to, not including, the closing `)`
fn parse_parameters(cursor: &mut TokenCursor) -> ParseResult<Vec<Parameter>> {
    let mut parameters = Vec::new();
    if cursor.check(TokenKind::RParen) {
        return Ok(parameters);
    }

    loop {
        // `final` and annotations in any order
        while skip_annotations(cursor)? || cursor.skip_any_of(&[TokenKind::Final]) > 0 {}

        let mut type_name = parse_type(cursor)?;
        if cursor.match_token(&[TokenKind::Ellipsis]) {
            type_name = TypeName::from(format!("{type_name}..."));
        }
        let name = cursor.expect_identifier("parameter name")?;

        // Old-style array declarators: `String args[]`
        while cursor.match_token(&[TokenKind::LBracket]) {
            cursor.expect(TokenKind::RBracket, "']' after parameter name")?;
            type_name = TypeName::from(format!("{type_name}[]"));
        }

        parameters.push(Parameter { type_name, name });

        if !cursor.match_token(&[TokenKind::Comma]) {
            break;
        }
    }
    Ok(parameters)
}

/// `throws A, b.B` is consumed and dropped
pub fn skip_throws_clause(cursor: &mut TokenCursor) -> ParseResult<()> {
    if cursor.match_token(&[TokenKind::Throws]) {
        loop {
            parse_type(cursor)?;
            if !cursor.match_token(&[TokenKind::Comma]) {
                break;
            }
        }
    }
    Ok(())
}
