//! Command line argument parsing for the Dragoman CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Dragoman - a rule-based voice command interpreter
#[derive(Parser, Debug, Clone)]
#[command(name = "dragoman")]
#[command(about = "A rule-based voice command interpreter for storefront navigation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Dragoman Contributors")]
#[command(long_about = None)]
pub struct DragomanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DragomanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interpret a single transcript
    Interpret(InterpretArgs),

    /// Interactive loop that carries conversation context between turns
    Repl(ReplArgs),

    /// Show the configured vocabularies
    Vocab(VocabArgs),
}

/// Arguments for interpreting one transcript
#[derive(Parser, Debug, Clone)]
pub struct InterpretArgs {
    /// Transcript text to interpret
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: String,

    /// Current UI route, consulted by the add-to-cart gate
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// Intent returned by the previous turn (e.g. CATEGORY)
    #[arg(long, value_name = "INTENT")]
    pub last_intent: Option<String>,

    /// Entity resolved by the previous turn (e.g. cement)
    #[arg(long, value_name = "ENTITY")]
    pub last_entity: Option<String>,

    /// Vocabulary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Current UI route, consulted by the add-to-cart gate
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// Vocabulary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for showing the vocabularies
#[derive(Parser, Debug, Clone)]
pub struct VocabArgs {
    /// Vocabulary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}
