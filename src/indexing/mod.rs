//! Batch-level work: source discovery, parallel parsing, dependency resolution

pub mod batch;
pub mod resolver;
pub mod walker;

pub use batch::{BatchAnalyzer, BatchReport};
pub use resolver::{UnitIndex, resolve_dependencies};
pub use walker::FileWalker;
