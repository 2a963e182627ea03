//! Character tokenizer
//!
//! Single left-to-right pass over the source text. Whitespace and comments
//! are discarded, identifier runs are checked against the keyword table and
//! every other character becomes a one-character token. The lexer never
//! fails: characters it does not know degrade to [`TokenKind::Other`] and
//! later stages decide whether the stream makes sense.

use super::token::{Token, TokenKind};

/// Tokenize source text into a flat token sequence terminated by one EOF token
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek(0) {
            let (line, column) = (self.line, self.column);

            if ch.is_whitespace() {
                self.bump();
            } else if ch == '/' && self.peek(1) == Some('/') {
                self.skip_line_comment();
            } else if ch == '/' && self.peek(1) == Some('*') {
                self.skip_block_comment();
            } else if is_ident_start(ch) {
                let word = self.take_while(is_ident_continue);
                let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
                self.push(kind, word, line, column);
            } else if ch.is_ascii_digit() {
                let number = self.take_number();
                self.push(TokenKind::NumberLiteral, number, line, column);
            } else if ch == '"' && self.peek(1) == Some('"') && self.peek(2) == Some('"') {
                let literal = self.take_text_block();
                self.push(TokenKind::StringLiteral, literal, line, column);
            } else if ch == '"' {
                let literal = self.take_quoted('"');
                self.push(TokenKind::StringLiteral, literal, line, column);
            } else if ch == '\'' {
                let literal = self.take_quoted('\'');
                self.push(TokenKind::CharLiteral, literal, line, column);
            } else if ch == '.' {
                if self.peek(1) == Some('.') && self.peek(2) == Some('.') {
                    self.bump();
                    self.bump();
                    self.bump();
                    self.push(TokenKind::Ellipsis, "...", line, column);
                } else {
                    self.bump();
                    self.push(TokenKind::Dot, ".", line, column);
                }
            } else {
                self.bump();
                self.push(TokenKind::punctuation(ch), ch.to_string(), line, column);
            }
        }

        let eof = Token::eof(self.line, self.column);
        self.tokens.push(eof);
        self.tokens
    }

    #[inline]
    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, line: u32, column: u32) {
        self.tokens.push(Token::new(kind, text, line, column));
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(ch) = self.peek(0) {
            if !pred(ch) {
                break;
            }
            out.push(ch);
            self.bump();
        }
        out
    }

    /// Digits, suffix letters, underscores and a decimal point followed by a digit
    fn take_number(&mut self) -> String {
        let mut out = String::new();
        while let Some(ch) = self.peek(0) {
            let fraction = ch == '.' && self.peek(1).is_some_and(|c| c.is_ascii_digit());
            if !(ch.is_ascii_alphanumeric() || ch == '_' || fraction) {
                break;
            }
            out.push(ch);
            self.bump();
        }
        out
    }

    /// Quoted literal including its delimiters. Stops at end of line when unterminated.
    fn take_quoted(&mut self, quote: char) -> String {
        let mut out = String::new();
        if let Some(open) = self.bump() {
            out.push(open);
        }
        while let Some(ch) = self.peek(0) {
            if ch == '\n' {
                break;
            }
            out.push(ch);
            self.bump();
            if ch == '\\' {
                if let Some(escaped) = self.peek(0).filter(|c| *c != '\n') {
                    out.push(escaped);
                    self.bump();
                }
            } else if ch == quote {
                break;
            }
        }
        out
    }

    /// `"""` text block, which may span lines. Runs to end of input when unterminated.
    fn take_text_block(&mut self) -> String {
        let mut out = String::from("\"\"\"");
        for _ in 0..3 {
            self.bump();
        }
        let mut quotes = 0;
        while let Some(ch) = self.bump() {
            out.push(ch);
            if ch == '\\' {
                quotes = 0;
                if let Some(escaped) = self.bump() {
                    out.push(escaped);
                }
            } else if ch == '"' {
                quotes += 1;
                if quotes == 3 {
                    break;
                }
            } else {
                quotes = 0;
            }
        }
        out
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek(0) {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) {
        self.bump();
        self.bump();
        while self.peek(0).is_some() {
            if self.peek(0) == Some('*') && self.peek(1) == Some('/') {
                self.bump();
                self.bump();
                return;
            }
            self.bump();
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}
