//! Compilation unit parser
//!
//! Top-level driver for one file: package clause, imports, the primary type
//! header, then the member loop. Members are classified with speculative
//! lookahead:
//!
//! - no access modifier: coarse skip (one token, or a whole `{ ... }` block);
//! - constructor (`Name(` where `Name` is the enclosing type): skipped;
//! - nested type declaration: skipped as a balanced block;
//! - a `(` before the next `;`, `{` or `=`: method, parsed with its calls;
//! - anything else: field, skipped to its terminating `;`.
//!
//! Any structural violation fails the whole file; no partial unit is
//! returned.

use super::calls::track_calls;
use super::cursor::TokenCursor;
use super::lexer::tokenize;
use super::signature::{
    parse_signature, skip_member_modifiers, skip_throws_clause, take_access_modifier,
};
use super::token::{IGNORED_MODIFIERS, Token, TokenKind};
use super::types::{TypeName, parse_type, skip_type_parameters};
use crate::error::{ParseError, ParseResult};
use crate::types::{CompilationUnit, MethodUnit, Modifier, UnitKind};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::trace;

/// Tokenize and parse one source text
pub fn parse_source(text: &str, file_path: impl Into<PathBuf>) -> ParseResult<CompilationUnit> {
    UnitParser::new(tokenize(text), file_path).parse_unit()
}

/// Parse a token sequence into a compilation unit
pub fn parse_unit(tokens: Vec<Token>, file_path: impl Into<PathBuf>) -> ParseResult<CompilationUnit> {
    UnitParser::new(tokens, file_path).parse_unit()
}

pub struct UnitParser {
    cursor: TokenCursor,
    file_path: PathBuf,
}

impl UnitParser {
    pub fn new(tokens: Vec<Token>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            file_path: file_path.into(),
        }
    }

    pub fn parse_unit(mut self) -> ParseResult<CompilationUnit> {
        skip_annotations(&mut self.cursor)?;
        let package = self.parse_package()?;
        let imports = self.parse_imports()?;

        skip_annotations(&mut self.cursor)?;
        let mut access = take_access_modifier(&mut self.cursor);
        let modifiers = self.parse_type_modifiers()?;
        if access.is_none() {
            // `final public class` is legal, if unusual
            access = take_access_modifier(&mut self.cursor);
        }

        let kind = match self.cursor.current().kind {
            TokenKind::Class => UnitKind::Class,
            TokenKind::Interface => UnitKind::Interface,
            TokenKind::Enum => UnitKind::Enum,
            _ => return Err(self.cursor.error("'class', 'interface' or 'enum'")),
        };
        self.cursor.advance();

        let name = self.cursor.expect_identifier("type name")?;
        skip_type_parameters(&mut self.cursor)?;

        let mut superclass = None;
        let mut interfaces = Vec::new();
        if self.cursor.match_token(&[TokenKind::Extends]) {
            if kind == UnitKind::Interface {
                interfaces = self.parse_type_list()?;
            } else {
                superclass = Some(parse_type(&mut self.cursor)?);
            }
        }
        if self.cursor.match_token(&[TokenKind::Implements]) {
            interfaces.extend(self.parse_type_list()?);
        }

        let methods = self.parse_members(&name)?;

        trace!(
            unit = %name,
            methods = methods.len(),
            path = %self.file_path.display(),
            "parsed compilation unit"
        );

        Ok(CompilationUnit {
            file_path: self.file_path,
            package,
            kind,
            name,
            access,
            modifiers,
            superclass,
            interfaces,
            imports,
            methods,
            dependencies: BTreeSet::new(),
        })
    }

    fn parse_package(&mut self) -> ParseResult<Option<String>> {
        if !self.cursor.match_token(&[TokenKind::Package]) {
            return Ok(None);
        }
        let name = self.parse_qualified_name()?;
        self.cursor
            .expect(TokenKind::Semicolon, "';' after package name")?;
        Ok(Some(name))
    }

    fn parse_imports(&mut self) -> ParseResult<Vec<String>> {
        let mut imports = Vec::new();
        while self.cursor.match_token(&[TokenKind::Import]) {
            self.cursor.match_token(&[TokenKind::Static]);
            imports.push(self.parse_qualified_name()?);
            self.cursor
                .expect(TokenKind::Semicolon, "';' after import")?;
        }
        Ok(imports)
    }

    /// Dotted identifier run, optionally ending in `.*`
    fn parse_qualified_name(&mut self) -> ParseResult<String> {
        let mut name = self.cursor.expect_identifier("identifier")?;
        while self.cursor.match_token(&[TokenKind::Dot]) {
            if self.cursor.match_token(&[TokenKind::Star]) {
                name.push_str(".*");
                break;
            }
            name.push('.');
            name.push_str(&self.cursor.expect_identifier("identifier after '.'")?);
        }
        Ok(name)
    }

    /// Records `static`, `final` and `abstract`; other modifiers are skipped
    fn parse_type_modifiers(&mut self) -> ParseResult<BTreeSet<Modifier>> {
        let mut modifiers = BTreeSet::new();
        loop {
            skip_annotations(&mut self.cursor)?;
            let Some(kind) = self.cursor.match_any(IGNORED_MODIFIERS).map(|t| t.kind) else {
                return Ok(modifiers);
            };
            match kind {
                TokenKind::Static => modifiers.insert(Modifier::Static),
                TokenKind::Final => modifiers.insert(Modifier::Final),
                TokenKind::Abstract => modifiers.insert(Modifier::Abstract),
                _ => false,
            };
            self.cursor.advance();
        }
    }

    fn parse_type_list(&mut self) -> ParseResult<Vec<TypeName>> {
        let mut types = vec![parse_type(&mut self.cursor)?];
        while self.cursor.match_token(&[TokenKind::Comma]) {
            types.push(parse_type(&mut self.cursor)?);
        }
        Ok(types)
    }

    fn parse_members(&mut self, type_name: &str) -> ParseResult<Vec<MethodUnit>> {
        let open = self
            .cursor
            .expect(TokenKind::LBrace, "'{' to open type body")?;

        let mut methods = Vec::new();
        loop {
            skip_annotations(&mut self.cursor)?;

            if self.cursor.match_token(&[TokenKind::RBrace]) {
                return Ok(methods);
            }
            if self.cursor.at_end() {
                return Err(ParseError::UnexpectedEof {
                    line: open.line,
                    expected: format!("'}}' closing the body of {type_name}"),
                });
            }

            if !self.cursor.current().kind.is_access_modifier() {
                if self.cursor.check(TokenKind::LBrace) {
                    self.cursor
                        .skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
                } else {
                    self.cursor.advance();
                }
                continue;
            }

            if let Some(method) = self.parse_member(type_name)? {
                methods.push(method);
            }
        }
    }

    /// Classify and consume one member that starts with an access modifier
    fn parse_member(&mut self, type_name: &str) -> ParseResult<Option<MethodUnit>> {
        let start = self.cursor.save();
        self.cursor.advance();
        skip_member_modifiers(&mut self.cursor)?;
        // `public <T> Box(T t)` is still a constructor
        skip_type_parameters(&mut self.cursor)?;

        let current = self.cursor.current();
        if current.kind == TokenKind::Identifier
            && current.text == type_name
            && self.cursor.peek(1).kind == TokenKind::LParen
        {
            self.skip_constructor()?;
            return Ok(None);
        }

        if current.kind.is_type_declaration()
            || (current.kind == TokenKind::At && self.cursor.peek(1).kind == TokenKind::Interface)
        {
            self.skip_nested_type()?;
            return Ok(None);
        }

        if self.scan_for_parameter_list() {
            self.cursor.restore(start);
            let mut method = parse_signature(&mut self.cursor)?;
            if self.cursor.check(TokenKind::LBrace) {
                method.calls = track_calls(&mut self.cursor)?;
            } else {
                // Abstract and interface methods, or a default value in annotation types
                self.skip_to_semicolon("method body or ';'")?;
            }
            return Ok(Some(method));
        }

        self.skip_to_semicolon("';' to end field declaration")?;
        Ok(None)
    }

    /// Speculatively look for `(` before the next `;`, `{` or `=`
    fn scan_for_parameter_list(&mut self) -> bool {
        let mark = self.cursor.save();
        let found = loop {
            match self.cursor.current().kind {
                TokenKind::LParen => break true,
                TokenKind::Semicolon
                | TokenKind::LBrace
                | TokenKind::Assign
                | TokenKind::RBrace
                | TokenKind::Eof => {
                    break false;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        };
        self.cursor.restore(mark);
        found
    }

    fn skip_constructor(&mut self) -> ParseResult<()> {
        self.cursor.advance();
        self.cursor
            .skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
        skip_throws_clause(&mut self.cursor)?;
        if self.cursor.check(TokenKind::LBrace) {
            self.cursor.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)
        } else {
            Err(self.cursor.error("'{' to open constructor body"))
        }
    }

    fn skip_nested_type(&mut self) -> ParseResult<()> {
        while !self.cursor.check(TokenKind::LBrace) {
            if self.cursor.at_end() {
                return Err(self.cursor.error("'{' to open nested type body"));
            }
            self.cursor.advance();
        }
        self.cursor.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)
    }

    /// Skip to the `;` ending a declaration, stepping over balanced groups
    /// such as array initializers and anonymous class bodies
    fn skip_to_semicolon(&mut self, expected: &str) -> ParseResult<()> {
        loop {
            match self.cursor.current().kind {
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    return Ok(());
                }
                TokenKind::LBrace => self
                    .cursor
                    .skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?,
                TokenKind::LParen => self
                    .cursor
                    .skip_balanced(TokenKind::LParen, TokenKind::RParen)?,
                TokenKind::RBrace | TokenKind::Eof => return Err(self.cursor.error(expected)),
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }
}

/// Skip `@Name`, `@a.b.Name` and `@Name(...)` annotations.
///
/// Argument lists are only balanced, never validated. Returns whether any
/// annotation was skipped.
pub fn skip_annotations(cursor: &mut TokenCursor) -> ParseResult<bool> {
    let mut skipped = false;
    while cursor.check(TokenKind::At) && cursor.peek(1).kind == TokenKind::Identifier {
        cursor.advance();
        cursor.advance();
        while cursor.check(TokenKind::Dot) && cursor.peek(1).kind == TokenKind::Identifier {
            cursor.advance();
            cursor.advance();
        }
        if cursor.check(TokenKind::LParen) {
            cursor.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
        }
        skipped = true;
    }
    Ok(skipped)
}
