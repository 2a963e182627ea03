//! Terminal display helpers: progress bar, summary table and colors.

pub mod progress;
pub mod tables;
pub mod theme;

pub use progress::{create_progress_bar, hidden_progress_bar};
pub use tables::create_summary_table;
pub use theme::{Status, status_line};
