//! Table formatting utilities for structured output.

use crate::indexing::BatchReport;
use comfy_table::{
    Attribute, Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

/// Create the end-of-run summary table for an analyzed batch.
pub fn create_summary_table(project_name: &str, report: &BatchReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);

    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let dependencies: usize = report.units.iter().map(|u| u.dependencies.len()).sum();

    // Plain rows; comfy-table miscounts widths of pre-colored strings
    table.add_row(vec!["Project", project_name]);
    table.add_row(vec!["Files", &report.outcomes.len().to_string()]);
    table.add_row(vec!["Classes", &report.units.len().to_string()]);
    table.add_row(vec!["Methods", &report.method_count().to_string()]);
    table.add_row(vec!["Call sites", &report.call_count().to_string()]);
    table.add_row(vec!["Dependencies", &dependencies.to_string()]);
    table.add_row(vec!["Time", &format!("{:?}", report.elapsed)]);
    table.add_row(vec![
        "Rate",
        &format!("{:.0} files/second", report.files_per_second()),
    ]);

    let failed = report.failure_count();
    let (status, color) = if failed == 0 {
        ("✓ all files parsed".to_string(), Color::Green)
    } else {
        (format!("⚠ {failed} file(s) failed to parse"), Color::Yellow)
    };
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(status).fg(color).add_attribute(Attribute::Bold),
    ]);

    table.to_string()
}
