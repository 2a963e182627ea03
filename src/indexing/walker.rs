//! File system walker for discovering source files to analyze
//!
//! This module provides directory traversal with support for:
//! - .gitignore rules
//! - Custom ignore patterns from configuration
//! - Extension filtering
//! - Hidden file handling

use crate::Settings;
use crate::error::{IndexError, IndexResult};
use crate::types::SourceFile;
use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-directory ignore file, same syntax as .gitignore
pub const IGNORE_FILE: &str = ".classdepsignore";

/// Walks directories to find source files to analyze
#[derive(Debug)]
pub struct FileWalker {
    settings: Arc<Settings>,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Walk a directory and return matching files in path order
    pub fn walk(&self, root: &Path) -> IndexResult<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(true) // Skip hidden files and directories
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(self.settings.analysis.follow_links)
            .max_depth(None)
            .require_git(false); // Allow gitignore to work in non-git directories

        builder.add_custom_ignore_filename(IGNORE_FILE);
        builder.overrides(self.exclusions(root)?);

        let extensions = &self.settings.analysis.extensions;

        let mut files: Vec<PathBuf> = builder
            .build()
            .filter_map(Result::ok) // Skip entries we can't access
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| extensions.iter().any(|e| e == ext))
            })
            .collect();

        files.sort();
        debug!(root = %root.display(), count = files.len(), "discovered source files");
        Ok(files)
    }

    /// Configured ignore patterns as negated overrides.
    ///
    /// A plain override glob would whitelist, so each pattern gets a `!`.
    fn exclusions(&self, root: &Path) -> IndexResult<Override> {
        let mut builder = OverrideBuilder::new(root);
        for pattern in &self.settings.analysis.ignore_patterns {
            builder
                .add(&format!("!{pattern}"))
                .map_err(|e| IndexError::ConfigError {
                    reason: format!("invalid ignore pattern '{pattern}': {e}"),
                })?;
        }
        builder.build().map_err(|e| IndexError::ConfigError {
            reason: format!("failed to build ignore patterns: {e}"),
        })
    }

    /// Read every discovered file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so such files are
    /// still parsed and counted. Unreadable files are logged and left out;
    /// they never stop the walk.
    pub fn load_sources(&self, root: &Path) -> IndexResult<Vec<SourceFile>> {
        let sources = self
            .walk(root)?
            .into_iter()
            .filter_map(|path| match std::fs::read(&path) {
                Ok(bytes) => {
                    let text = match String::from_utf8(bytes) {
                        Ok(text) => text,
                        Err(e) => {
                            debug!(path = %path.display(), "replacing invalid UTF-8");
                            String::from_utf8_lossy(e.as_bytes()).into_owned()
                        }
                    };
                    Some(SourceFile::new(path, text))
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    None
                }
            })
            .collect();
        Ok(sources)
    }

    /// Count files that would be analyzed (useful for dry runs)
    pub fn count_files(&self, root: &Path) -> IndexResult<usize> {
        Ok(self.walk(root)?.len())
    }
}
