// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, OutputFormat};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod lexicon;
mod scansion;

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze the meter of a poem (default command)
    #[command(alias = "scan")]
    Analyze(AnalyzeArgs),

    /// Generate shell completions for meterwise
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Poem file, directory of poem files, or '-' for stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Path to a CMU-format pronunciation lexicon
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Restrict analysis to a single zero-based line and print its
    /// syllable offsets
    #[arg(short = 'n', long)]
    line: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// meterwise - Metrical Scansion for English Verse
///
/// Analyzes poems line by line and reports stress patterns, metrical feet,
/// per-line meter classification and a poem-level summary.
#[derive(Parser, Debug)]
#[command(name = "meterwise")]
#[command(version = "1.0.0")]
#[command(about = "Metrical scansion analyzer for English verse")]
#[command(long_about = "meterwise scans poems into syllable stress patterns and classifies their meter.

EXAMPLES:
    meterwise sonnet.txt                       # Analyze using default config
    meterwise -f json sonnet.txt               # Emit the analysis as JSON
    meterwise -l cmudict.txt sonnet.txt        # Use a pronunciation lexicon
    meterwise -n 0 sonnet.txt                  # Offsets for the first line only
    meterwise --log-level debug /poems/        # Process a directory with debug logging
    meterwise - < sonnet.txt                   # Read the poem from stdin
    meterwise completions bash > meterwise.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Poem file, directory of poem files, or '-' for stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Path to a CMU-format pronunciation lexicon
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Restrict analysis to a single zero-based line and print its
    /// syllable offsets
    #[arg(short = 'n', long)]
    line: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The logger itself accepts everything; verbosity is controlled
        // through log::set_max_level so it can change after config load
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Marker for log level
    fn get_marker_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "✖ ",
            Level::Warn => "▲ ",
            Level::Info => " ",
            Level::Debug => "· ",
            Level::Trace => "· ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let marker = Self::get_marker_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {}{}\x1B[0m",
                color,
                now,
                marker,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "meterwise", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Analyze(args)) => run_analyze(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let analyze_args = AnalyzeArgs {
                input_path,
                lexicon: cli.lexicon,
                format: cli.format,
                line: cli.line,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_analyze(analyze_args)
        }
    }
}

fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create the configuration
    let mut config = Config::ensure_config_exists(&options.config_path)?;

    // Apply the configured log level unless the command line overrode it
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Command-line overrides
    if let Some(lexicon) = options.lexicon {
        config.lexicon_path = Some(lexicon);
    }
    if let Some(format) = options.format {
        config.output.format = format.into();
    }

    let controller = Controller::with_config(config)?;
    match controller.run(&options.input_path, options.line) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            Err(e)
        }
    }
}
