//! Token representation shared by the lexer and the cursor
//!
//! Tokens are immutable and carry their literal text together with the
//! 1-indexed line and column where they start.

use std::fmt;

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    Lt,
    Gt,
    Question,
    At,
    Assign,
    Star,
    /// Any punctuation character without a dedicated kind
    Other,

    // Visibility
    Public,
    Protected,
    Private,

    // Modifiers
    Static,
    Final,
    Abstract,
    Synchronized,
    Native,
    Transient,
    Volatile,
    Strictfp,

    // Declarations
    Class,
    Interface,
    Enum,
    Extends,
    Implements,
    Super,
    Throws,
    Package,
    Import,

    // Primitive types
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,

    // Control flow and expressions
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
    Try,
    Catch,
    Finally,
    Throw,
    New,
    This,

    // Literals
    StringLiteral,
    CharLiteral,
    NumberLiteral,

    Identifier,
    Eof,
}

impl TokenKind {
    /// Map an identifier-shaped word to its keyword kind, if it is one
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "public" => TokenKind::Public,
            "protected" => TokenKind::Protected,
            "private" => TokenKind::Private,
            "static" => TokenKind::Static,
            "final" => TokenKind::Final,
            "abstract" => TokenKind::Abstract,
            "synchronized" => TokenKind::Synchronized,
            "native" => TokenKind::Native,
            "transient" => TokenKind::Transient,
            "volatile" => TokenKind::Volatile,
            "strictfp" => TokenKind::Strictfp,
            "class" => TokenKind::Class,
            "interface" => TokenKind::Interface,
            "enum" => TokenKind::Enum,
            "extends" => TokenKind::Extends,
            "implements" => TokenKind::Implements,
            "super" => TokenKind::Super,
            "throws" => TokenKind::Throws,
            "package" => TokenKind::Package,
            "import" => TokenKind::Import,
            "void" => TokenKind::Void,
            "boolean" => TokenKind::Boolean,
            "byte" => TokenKind::Byte,
            "char" => TokenKind::Char,
            "short" => TokenKind::Short,
            "int" => TokenKind::Int,
            "long" => TokenKind::Long,
            "float" => TokenKind::Float,
            "double" => TokenKind::Double,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "switch" => TokenKind::Switch,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "return" => TokenKind::Return,
            "try" => TokenKind::Try,
            "catch" => TokenKind::Catch,
            "finally" => TokenKind::Finally,
            "throw" => TokenKind::Throw,
            "new" => TokenKind::New,
            "this" => TokenKind::This,
            _ => return None,
        };
        Some(kind)
    }

    /// Map a single punctuation character to its kind
    ///
    /// `.` is not handled here because it needs lookahead for `...`.
    pub fn punctuation(ch: char) -> TokenKind {
        match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '?' => TokenKind::Question,
            '@' => TokenKind::At,
            '=' => TokenKind::Assign,
            '*' => TokenKind::Star,
            _ => TokenKind::Other,
        }
    }

    pub fn is_access_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public | TokenKind::Protected | TokenKind::Private
        )
    }

    /// Primitive type names including `void`
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            TokenKind::Void
                | TokenKind::Boolean
                | TokenKind::Byte
                | TokenKind::Char
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Float
                | TokenKind::Double
        )
    }

    pub fn is_type_declaration(self) -> bool {
        matches!(
            self,
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum
        )
    }
}

/// Access modifiers recognised by the cursor helpers
pub const ACCESS_MODIFIERS: &[TokenKind] =
    &[TokenKind::Public, TokenKind::Protected, TokenKind::Private];

/// Member modifiers that carry no information for the extracted model
pub const IGNORED_MODIFIERS: &[TokenKind] = &[
    TokenKind::Static,
    TokenKind::Final,
    TokenKind::Abstract,
    TokenKind::Synchronized,
    TokenKind::Native,
    TokenKind::Transient,
    TokenKind::Volatile,
    TokenKind::Strictfp,
    TokenKind::Default,
];

/// A single lexical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}
