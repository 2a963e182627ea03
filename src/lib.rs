//! Structural extraction for Java-like sources: classes, method signatures,
//! call sites and a best-effort class dependency graph.
//!
//! ```
//! use classdeps::parsing::parse_source;
//!
//! let unit = parse_source("public class A { public void run() { b.go(); } }", "A.java").unwrap();
//! assert_eq!(unit.name, "A");
//! assert_eq!(unit.methods[0].calls[0].qualified_name(), "b.go");
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod indexing;
pub mod io;
pub mod parsing;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{IndexError, IndexResult, ParseError, ParseResult};
pub use indexing::{BatchAnalyzer, BatchReport, FileWalker, resolve_dependencies};
pub use parsing::{MethodCall, Token, TokenCursor, TokenKind, TypeName, parse_source, tokenize};
pub use types::{
    CompilationUnit, MethodUnit, Modifier, Parameter, ParseOutcome, SourceFile, UnitKind,
    Visibility,
};
