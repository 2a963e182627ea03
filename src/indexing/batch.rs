//! Batch driver: parse every file in parallel, then resolve dependencies
//!
//! Per-file parses share nothing, so they run on a rayon pool. A parse
//! error only fails its own file: it becomes a failed [`ParseOutcome`] and
//! the batch goes on. Resolution needs every unit, so it runs once all
//! parses are done.

use super::resolver::resolve_dependencies;
use crate::error::{IndexError, IndexResult};
use crate::parsing::parse_source;
use crate::types::{CompilationUnit, ParseOutcome, SourceFile};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of analyzing a batch of sources
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Units that parsed, in input order, with dependencies resolved
    pub units: Vec<CompilationUnit>,

    /// One outcome per input file, in input order
    pub outcomes: Vec<ParseOutcome>,

    /// Wall time for parsing and resolution
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ParseOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    /// Total methods across all parsed units
    pub fn method_count(&self) -> usize {
        self.units.iter().map(|u| u.methods.len()).sum()
    }

    /// Total call sites across all parsed units
    pub fn call_count(&self) -> usize {
        self.units.iter().map(CompilationUnit::call_count).sum()
    }

    /// Files parsed per second
    pub fn files_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.outcomes.len() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Parses sources on a dedicated thread pool
pub struct BatchAnalyzer {
    threads: usize,
    progress: Option<ProgressBar>,
}

impl BatchAnalyzer {
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            progress: None,
        }
    }

    /// Tick this bar once per parsed file
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn analyze(&self, sources: &[SourceFile]) -> IndexResult<BatchReport> {
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| IndexError::General(format!("Failed to start parser pool: {e}")))?;

        debug!(files = sources.len(), threads = self.threads, "parsing batch");

        let parsed: Vec<(ParseOutcome, Option<CompilationUnit>)> = pool.install(|| {
            sources
                .par_iter()
                .map(|source| {
                    let result = parse_one(source);
                    if let Some(progress) = &self.progress {
                        progress.inc(1);
                    }
                    result
                })
                .collect()
        });

        let mut units = Vec::with_capacity(parsed.len());
        let mut outcomes = Vec::with_capacity(parsed.len());
        for (outcome, unit) in parsed {
            outcomes.push(outcome);
            units.extend(unit);
        }

        resolve_dependencies(&mut units);

        let report = BatchReport {
            units,
            outcomes,
            elapsed: start.elapsed(),
        };
        info!(
            parsed = report.success_count(),
            failed = report.failure_count(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "batch analyzed"
        );
        Ok(report)
    }
}

fn parse_one(source: &SourceFile) -> (ParseOutcome, Option<CompilationUnit>) {
    match parse_source(&source.text, source.file_path.clone()) {
        Ok(unit) => (ParseOutcome::succeeded(source), Some(unit)),
        Err(error) => {
            warn!(file = %source.file_path.display(), %error, "parse failed");
            (ParseOutcome::failed(source, error), None)
        }
    }
}
