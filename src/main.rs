// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::preferences::{PreferenceStore, Theme};
use app_controller::Controller;

mod analysis;
mod app_config;
mod app_controller;
mod errors;
mod extraction;
mod file_utils;
mod preferences;

/// CLI Wrapper for Theme to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(cli_theme: CliTheme) -> Self {
        match cli_theme {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
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
    /// Analyze a document: summary, keywords, question answering (default command)
    #[command(alias = "analyse")]
    Analyze(AnalyzeArgs),

    /// Get or set the persisted display theme
    Theme {
        /// Theme to persist; prints the current theme when omitted
        #[arg(value_enum)]
        theme: Option<CliTheme>,
    },

    /// Generate shell completions for docintel
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Input document (.txt or .pdf) or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Question to answer from the document (repeatable)
    #[arg(short, long)]
    question: Vec<String>,

    /// Ask questions interactively after the analysis
    #[arg(short, long)]
    interactive: bool,

    /// Maximum number of sentences in the summary
    #[arg(short = 's', long)]
    max_sentences: Option<usize>,

    /// Maximum number of extracted keywords
    #[arg(short = 'k', long)]
    max_keywords: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// docintel - Document Intelligence CLI
///
/// Extracts text from .txt and .pdf documents and produces an extractive
/// summary, a ranked keyword list, and answers to keyword-matched questions.
#[derive(Parser, Debug)]
#[command(name = "docintel")]
#[command(version = "1.0.0")]
#[command(about = "Document analysis tool: summaries, keywords, Q&A")]
#[command(long_about = "docintel extracts text from documents and analyzes it locally.

EXAMPLES:
    docintel report.pdf                         # Analyze using default config
    docintel notes.txt -q \"Who wrote this?\"     # Analyze and answer a question
    docintel notes.txt --interactive            # Ask questions interactively
    docintel -s 3 -k 10 report.pdf              # Shorter summary, fewer keywords
    docintel /documents/                        # Analyze an entire directory
    docintel theme dark                         # Persist the dark display theme
    docintel completions bash > docintel.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document (.txt or .pdf) or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Question to answer from the document (repeatable)
    #[arg(short, long)]
    question: Vec<String>,

    /// Ask questions interactively after the analysis
    #[arg(short, long)]
    interactive: bool,

    /// Maximum number of sentences in the summary
    #[arg(short = 's', long)]
    max_sentences: Option<usize>,

    /// Maximum number of extracted keywords
    #[arg(short = 'k', long)]
    max_keywords: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "docintel", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Theme { theme }) => run_theme(theme),
        Some(Commands::Analyze(args)) => run_analyze(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let analyze_args = AnalyzeArgs {
                input_path,
                question: cli.question,
                interactive: cli.interactive,
                max_sentences: cli.max_sentences,
                max_keywords: cli.max_keywords,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_analyze(analyze_args).await
        }
    }
}

async fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config: Config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(max_sentences) = options.max_sentences {
        config.max_sentences = max_sentences;
    }
    if let Some(max_keywords) = options.max_keywords {
        config.max_keywords = max_keywords;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(config.log_level));
    }

    // Pick up the persisted display theme; fall back to the default on error
    let theme = match PreferenceStore::new_default().and_then(|store| store.theme()) {
        Ok(theme) => theme,
        Err(e) => {
            warn!("Could not load theme preference: {}", e);
            Theme::default()
        }
    };

    // Create controller
    let controller = Controller::new(config, theme)?;

    // Run the controller with the input file or directory
    if options.input_path.is_file() {
        controller
            .run(options.input_path.clone(), &options.question, options.interactive)
            .await
    } else if options.input_path.is_dir() {
        controller
            .run_folder(options.input_path.clone(), &options.question)
            .await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}

// Helper function to get or set the persisted theme preference
fn run_theme(theme: Option<CliTheme>) -> Result<()> {
    let store = PreferenceStore::new_default()?;

    match theme {
        Some(cli_theme) => {
            let theme: Theme = cli_theme.into();
            store.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        None => {
            println!("{}", store.theme()?);
        }
    }

    Ok(())
}

fn to_level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
