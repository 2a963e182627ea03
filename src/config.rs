//! Configuration module for the class dependency analyzer.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CD_` and use double underscores
//! to separate nested levels:
//! - `CD_ANALYSIS__PARALLEL_THREADS=8` sets `analysis.parallel_threads`
//! - `CD_OUTPUT__FORMAT=json` sets `output.format`
//! - `CD_DEBUG=true` sets `debug`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the workspace settings file
pub const CONFIG_DIR: &str = ".classdeps";

/// Name of the settings file inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .classdeps is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Source discovery and parsing
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Number of parallel parser threads
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,

    /// Source file extensions to analyze
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Follow symbolic links while walking
    #[serde(default = "default_false")]
    pub follow_links: bool,

    /// Additional gitignore-style patterns to exclude
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Default report format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Write details of files that failed to parse here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_log: Option<PathBuf>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}
fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}
fn default_false() -> bool {
    false
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel_threads: default_parallel_threads(),
            extensions: default_extensions(),
            follow_links: false,
            ignore_patterns: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            failure_log: None,
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref().to_path_buf())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: PathBuf) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscores stay
            .merge(Env::prefixed("CD_").map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }

    /// Find the workspace settings file by walking up from the current directory
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .classdeps is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.is_dir() {
                return Some(ancestor.to_path_buf());
            }
        }

        None
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(
        root: impl AsRef<Path>,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = format!(
            r#"# classdeps configuration

# Version of the configuration schema
version = 1

# Verbose logging to stderr
debug = false

[analysis]
# Number of parallel parser threads (defaults to CPU count)
# parallel_threads = {}

# Source file extensions to analyze
extensions = ["java"]

# Follow symbolic links while walking the source tree
follow_links = false

# Additional gitignore-style patterns to exclude
ignore_patterns = []

[output]
# Report format: "text" or "json"
format = "text"

# Write details of files that failed to parse to this file
# failure_log = "classdeps-failures.log"
"#,
            default_parallel_threads()
        );

        std::fs::write(&config_path, template)?;
        Ok(config_path)
    }
}
