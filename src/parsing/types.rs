//! Recursive parser for generic and array type expressions
//!
//! Types are kept as rendered text rather than a structured tree. Generic
//! arguments are joined with `", "`, so the usual spelling of
//! `Map<String, List<? extends Number>>` round-trips unchanged.

use super::cursor::TokenCursor;
use super::token::TokenKind;
use crate::error::ParseResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered type expression such as `List<String>[]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Type text without generic arguments or array brackets
    ///
    /// `Map<String, Integer>[]` → `Map`, `java.util.List<T>` → `java.util.List`
    pub fn base_name(&self) -> &str {
        let end = self.0.find(['<', '[']).unwrap_or(self.0.len());
        self.0[..end].trim_end_matches("...")
    }

    /// Last dotted segment of the base name: `java.util.List<T>` → `List`
    pub fn simple_name(&self) -> &str {
        let base = self.base_name();
        base.rsplit('.').next().unwrap_or(base)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TypeName {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Parse one type expression at the cursor
pub fn parse_type(cursor: &mut TokenCursor) -> ParseResult<TypeName> {
    let mut text = parse_type_head(cursor)?;

    if cursor.check(TokenKind::Lt) {
        text.push_str(&parse_type_arguments(cursor)?);
    }

    while cursor.match_token(&[TokenKind::LBracket]) {
        cursor.expect(TokenKind::RBracket, "']' to close array type")?;
        text.push_str("[]");
    }

    Ok(TypeName(text))
}

/// Primitive keyword or a possibly dotted identifier run
fn parse_type_head(cursor: &mut TokenCursor) -> ParseResult<String> {
    let token = cursor.current();
    if token.kind.is_primitive() {
        return Ok(cursor.advance().text.clone());
    }
    if token.kind != TokenKind::Identifier {
        return Err(cursor.error("type name"));
    }

    let mut head = cursor.advance().text.clone();
    while cursor.check(TokenKind::Dot) && cursor.peek(1).kind == TokenKind::Identifier {
        cursor.advance();
        head.push('.');
        head.push_str(&cursor.advance().text);
    }
    Ok(head)
}

/// `<` argument (`,` argument)* `>` rendered back to text
pub fn parse_type_arguments(cursor: &mut TokenCursor) -> ParseResult<String> {
    cursor.expect(TokenKind::Lt, "'<'")?;

    let mut args = Vec::new();
    if !cursor.check(TokenKind::Gt) {
        loop {
            args.push(parse_type_argument(cursor)?);
            if !cursor.match_token(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    cursor.expect(TokenKind::Gt, "'>' to close generic arguments")?;
    Ok(format!("<{}>", args.join(", ")))
}

fn parse_type_argument(cursor: &mut TokenCursor) -> ParseResult<String> {
    if !cursor.match_token(&[TokenKind::Question]) {
        return parse_type(cursor).map(|t| t.0);
    }

    let mut arg = String::from("?");
    if cursor.match_token(&[TokenKind::Extends]) {
        arg.push_str(" extends ");
        arg.push_str(parse_type(cursor)?.as_str());
    } else if cursor.match_token(&[TokenKind::Super]) {
        arg.push_str(" super ");
        arg.push_str(parse_type(cursor)?.as_str());
    }
    Ok(arg)
}

/// Skip a declaration-site type parameter list such as `<T, K extends Comparable<K>>`
pub fn skip_type_parameters(cursor: &mut TokenCursor) -> ParseResult<()> {
    if cursor.check(TokenKind::Lt) {
        cursor.skip_balanced(TokenKind::Lt, TokenKind::Gt)?;
    }
    Ok(())
}
