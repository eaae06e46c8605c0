//! Library interface for the `study-lens` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                       Log filter (e.g., debug, study_lens_core=trace)
    STUDY_LENS_LOG_PATH            Explicit log file path
    STUDY_LENS_LOG_DIR             Log directory
    STUDY_LENS_MIN_READABILITY     Default readability gate
    STUDY_LENS_MIN_ENGAGEMENT      Default engagement gate

Pass - as FILE to read from standard input.
";
/// Command-line interface definition for study-lens.
#[derive(Parser)]
#[command(name = "study-lens")]
#[command(about = "Study aids and difficulty signals for educational text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run every analysis and print the full report
    Analyze(commands::analyze::AnalyzeArgs),

    /// Detect the subject area
    Subject(commands::subject::SubjectArgs),

    /// Recommend learning styles
    Styles(commands::styles::StylesArgs),

    /// Score readability (0-100, higher is easier)
    Readability(commands::readability::ReadabilityArgs),

    /// Score engagement (0-100)
    Engagement(commands::engagement::EngagementArgs),

    /// Extract the most frequent keywords
    Keywords(commands::keywords::KeywordsArgs),

    /// Generate flashcards from keywords
    Flashcards(commands::flashcards::FlashcardsArgs),

    /// List self-check questions found in the text
    Questions(commands::questions::QuestionsArgs),

    /// Analyze a built-in sample text
    Demo(commands::demo::DemoArgs),

    /// Print the JSON schema of the analysis report
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
