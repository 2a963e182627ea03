//! CLI entry point for the class dependency analyzer.
//!
//! Provides commands for analyzing a source tree, creating the settings
//! file and displaying the active configuration.

use anyhow::Context;
use chrono::Local;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use classdeps::display::{Status, create_progress_bar, hidden_progress_bar, status_line};
use classdeps::io::report::{report_file_name, write_file};
use classdeps::io::{
    ExitCode, OutputFormat, OutputManager, ProjectReport, project_name, render_json,
    write_failure_log,
};
use classdeps::{BatchAnalyzer, FileWalker, IndexError, IndexResult, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{Level, debug};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Class dependency analyzer
#[derive(Parser)]
#[command(
    name = "classdeps",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract classes, methods, call sites and dependencies from Java sources",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Analyze a source tree
    #[command(
        about = "Parse every source file under PATH and report classes and dependencies",
        after_help = "Examples:\n  classdeps analyze src\n  classdeps analyze . --json --output report.json\n  classdeps analyze src --no-report --progress --failure-log failures.log\n\nUnless --output or --no-report is given, the JSON report is written to\n<project>-<yyyy-MM-dd-HHmmss>.json in the current directory."
    )]
    Analyze {
        /// Directory to analyze
        path: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Number of threads to use (overrides config)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Show progress while parsing
        #[arg(short, long)]
        progress: bool,

        /// Write details of files that failed to parse (overrides config)
        #[arg(long)]
        failure_log: Option<PathBuf>,

        /// Write the JSON report here instead of <project>-<timestamp>.json
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write a JSON report file
        #[arg(long, conflicts_with = "output")]
        no_report: bool,

        /// Only count the files that would be analyzed
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialize project
    #[command(about = "Set up .classdeps directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

fn main() {
    let cli = Cli::parse();

    let mut settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", status_line(Status::Failed, &format!("Configuration error: {e:#}")));
            std::process::exit(ExitCode::ConfigError.into());
        }
    };
    if cli.debug {
        settings.debug = true;
    }
    init_logging(settings.debug);

    let code = match cli.command {
        Commands::Init { force } => run_init(force),
        Commands::Config => run_config(&settings),
        Commands::Analyze {
            path,
            json,
            threads,
            progress,
            failure_log,
            output,
            no_report,
            dry_run,
        } => {
            if let Some(t) = threads {
                settings.analysis.parallel_threads = t;
            }
            if failure_log.is_some() {
                settings.output.failure_log = failure_log;
            }
            let options = AnalyzeOptions {
                json,
                progress,
                output,
                no_report,
                dry_run,
            };
            run_analyze(&path, settings, options)
        }
    };

    std::process::exit(code.into());
}

fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    match config {
        Some(path) => Settings::load_from(path)
            .map_err(|e| anyhow::Error::new(*e))
            .with_context(|| format!("failed to load {}", path.display())),
        None => Settings::load()
            .map_err(|e| anyhow::Error::new(*e))
            .context("failed to load settings"),
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_init(force: bool) -> ExitCode {
    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}", status_line(Status::Failed, &format!("Error: {e}")));
            return ExitCode::IoError;
        }
    };

    match Settings::init_config_file(&root, force) {
        Ok(path) => {
            eprintln!(
                "{}",
                status_line(
                    Status::Done,
                    &format!("Created configuration file at: {}", path.display())
                )
            );
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{}", status_line(Status::Failed, &format!("Error: {e}")));
            ExitCode::ConfigError
        }
    }
}

fn run_config(settings: &Settings) -> ExitCode {
    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    match toml::to_string_pretty(settings) {
        Ok(toml_str) => {
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}

struct AnalyzeOptions {
    json: bool,
    progress: bool,
    output: Option<PathBuf>,
    no_report: bool,
    dry_run: bool,
}

fn run_analyze(path: &Path, settings: Settings, options: AnalyzeOptions) -> ExitCode {
    let format = if options.json {
        Ok(OutputFormat::Json)
    } else {
        settings.output.format.parse::<OutputFormat>()
    };
    let mut output = OutputManager::new(*format.as_ref().unwrap_or(&OutputFormat::Text));

    let result = format.and_then(|_| analyze(path, settings, &options, &mut output));
    match result {
        Ok(code) => code,
        Err(error) => output.error(&error).unwrap_or(ExitCode::from_error(&error)),
    }
}

fn analyze(
    path: &Path,
    settings: Settings,
    options: &AnalyzeOptions,
    output: &mut OutputManager,
) -> IndexResult<ExitCode> {
    if !path.is_dir() {
        return Err(IndexError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let settings = Arc::new(settings);
    let walker = FileWalker::new(settings.clone());

    if options.dry_run {
        let count = walker.count_files(path)?;
        println!("{count} file(s) would be analyzed");
        return Ok(ExitCode::Success);
    }

    let sources = walker.load_sources(path)?;
    debug!(files = sources.len(), "loaded sources");
    if sources.is_empty() {
        let _ = output.info(&status_line(Status::Notice, "No source files found"));
    }

    let progress = if options.progress && !sources.is_empty() {
        create_progress_bar(sources.len() as u64, "Parsing files")
    } else {
        hidden_progress_bar(sources.len() as u64)
    };
    let analyzer =
        BatchAnalyzer::new(settings.analysis.parallel_threads).with_progress(progress.clone());
    let batch = analyzer.analyze(&sources)?;
    progress.finish_and_clear();

    let project = ProjectReport::new(project_name(path), &batch);

    let report_path = match &options.output {
        Some(path) => Some(path.clone()),
        None if options.no_report => None,
        None => Some(PathBuf::from(report_file_name(
            &project.project_name,
            Local::now(),
        ))),
    };
    if let Some(report_path) = report_path {
        write_file(&report_path, &render_json(&project)?)?;
        let _ = output.info(&format!("Report written to {}", report_path.display()));
    }

    if let Some(log_path) = &settings.output.failure_log {
        if write_failure_log(log_path, &batch)? {
            let _ = output.info(&format!("Failure log written to {}", log_path.display()));
        }
    }

    output
        .analysis(&project, &batch)
        .map_err(|e| IndexError::General(format!("Failed to write output: {e}")))
}
