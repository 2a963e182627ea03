//! Lexical and syntactic extraction pipeline
//!
//! text → [`tokenize`] → [`TokenCursor`] → [`UnitParser`] → [`CompilationUnit`]
//!
//! [`CompilationUnit`]: crate::types::CompilationUnit

pub mod calls;
pub mod cursor;
pub mod lexer;
pub mod method_call;
pub mod signature;
pub mod token;
pub mod types;
pub mod unit;

pub use calls::track_calls;
pub use cursor::{Mark, TokenCursor};
pub use lexer::tokenize;
pub use method_call::MethodCall;
pub use signature::parse_signature;
pub use token::{Token, TokenKind};
pub use types::{TypeName, parse_type};
pub use unit::{UnitParser, parse_source, parse_unit};
