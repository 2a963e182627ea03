//! Rendering of analysis results.
//!
//! The parsing core hands back [`CompilationUnit`]s; everything about how
//! they look on screen or on disk lives here.

use crate::error::{IndexError, IndexResult};
use crate::indexing::BatchReport;
use crate::io::format::format_utc_timestamp;
use crate::types::{CompilationUnit, ParseOutcome};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Serialized shape of a whole project analysis
#[derive(Debug, Serialize)]
pub struct ProjectReport<'a> {
    pub project_name: String,
    pub analyzed_at: String,
    pub total_classes: usize,
    pub total_methods: usize,
    pub total_dependencies: usize,
    pub classes: &'a [CompilationUnit],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<&'a ParseOutcome>,
}

impl<'a> ProjectReport<'a> {
    pub fn new(project_name: impl Into<String>, report: &'a BatchReport) -> Self {
        Self {
            project_name: project_name.into(),
            analyzed_at: format_utc_timestamp(),
            total_classes: report.units.len(),
            total_methods: report.method_count(),
            total_dependencies: report.units.iter().map(|u| u.dependencies.len()).sum(),
            classes: &report.units,
            failures: report.failures().collect(),
        }
    }
}

/// Name for a project rooted at `root`: its final directory component with
/// characters unsafe in file names replaced by `_`
pub fn project_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let raw = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let sanitized: String = raw
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect();

    if sanitized.is_empty() {
        "project".to_string()
    } else {
        sanitized
    }
}

/// Default report file name, `<project>-<yyyy-MM-dd-HHmmss>.json`
pub fn report_file_name<Tz: TimeZone>(project_name: &str, at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{project_name}-{}.json", at.format("%Y-%m-%d-%H%M%S"))
}

/// Human-readable listing of every unit
pub fn render_text(units: &[CompilationUnit]) -> String {
    let mut out = String::new();
    for unit in units {
        render_unit(&mut out, unit);
    }
    out
}

fn render_unit(out: &mut String, unit: &CompilationUnit) {
    let mut header: Vec<String> = Vec::new();
    if let Some(access) = unit.access {
        header.push(access.to_string());
    }
    header.extend(unit.modifiers.iter().map(|m| m.to_string()));
    header.push(unit.kind.to_string());
    header.push(unit.qualified_name());

    // Writing to a String never fails
    let _ = writeln!(out, "{}", header.join(" "));
    let _ = writeln!(out, "  file: {}", unit.file_path.display());

    if let Some(superclass) = &unit.superclass {
        let _ = writeln!(out, "  extends: {superclass}");
    }
    if !unit.interfaces.is_empty() {
        let names: Vec<&str> = unit.interfaces.iter().map(|i| i.as_str()).collect();
        let _ = writeln!(out, "  implements: {}", names.join(", "));
    }
    if !unit.imports.is_empty() {
        let _ = writeln!(out, "  imports:");
        for import in &unit.imports {
            let _ = writeln!(out, "    {import}");
        }
    }
    if !unit.methods.is_empty() {
        let _ = writeln!(out, "  methods:");
        for method in &unit.methods {
            let access = method
                .access
                .map(|a| format!("{a} "))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "    {access}{} {} (line {})",
                method.return_type,
                method.signature(),
                method.line
            );
            for call in &method.calls {
                let _ = writeln!(out, "      -> {} (line {})", call.qualified_name(), call.line);
            }
        }
    }
    if !unit.dependencies.is_empty() {
        let deps: Vec<&str> = unit.dependencies.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  depends on: {}", deps.join(", "));
    }
    out.push('\n');
}

/// Pretty JSON for the whole project
pub fn render_json(report: &ProjectReport<'_>) -> IndexResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| IndexError::General(format!("Failed to serialize report: {e}")))
}

/// Write `contents` to `path`, creating parent directories
pub fn write_file(path: &Path, contents: &str) -> IndexResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| IndexError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| IndexError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// One block per failed file: path, line and message
pub fn render_failure_log<'a>(failures: impl IntoIterator<Item = &'a ParseOutcome>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# classdeps parse failures, {}", format_utc_timestamp());
    for outcome in failures {
        let line = outcome
            .cause
            .as_ref()
            .map(|c| c.line().to_string())
            .unwrap_or_else(|| "?".to_string());
        let _ = writeln!(out, "{} (line {line})", outcome.file_path.display());
        if let Some(message) = &outcome.error_message {
            let _ = writeln!(out, "  {message}");
        }
    }
    out
}

/// Write the failure log for a batch. Does nothing when every file parsed.
pub fn write_failure_log(path: &Path, report: &BatchReport) -> IndexResult<bool> {
    if report.failure_count() == 0 {
        return Ok(false);
    }
    write_file(path, &render_failure_log(report.failures()))?;
    Ok(true)
}
