//! Command line argument parsing for the Xiphos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config;
use crate::suggest::Verbosity;

/// Xiphos - A fast symmetric-delete spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "xiphos")]
#[command(about = "A fast symmetric-delete spelling corrector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Xiphos Contributors")]
#[command(long_about = None)]
pub struct XiphosArgs {
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

impl XiphosArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for a single word
    Lookup(LookupArgs),

    /// Correct a multi-word phrase
    Compound(CompoundArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Options shared by every command that loads a dictionary.
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Path to the dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Treat the dictionary file as plain text and count every token
    #[arg(long)]
    pub corpus: bool,

    /// Column holding the word in a frequency dictionary
    #[arg(long, default_value = "0")]
    pub term_column: usize,

    /// Column holding the count in a frequency dictionary
    #[arg(long, default_value = "1")]
    pub count_column: usize,

    /// Maximum edit distance the index is built for
    #[arg(short = 'd', long, default_value_t = config::DEFAULT_MAX_EDIT_DISTANCE)]
    pub max_edit_distance: usize,

    /// Number of leading chars that take part in delete generation
    #[arg(long, default_value_t = config::DEFAULT_PREFIX_LENGTH)]
    pub prefix_length: usize,

    /// Minimum count before a word becomes searchable
    #[arg(long, default_value_t = config::DEFAULT_MIN_COUNT_THRESHOLD)]
    pub min_count: u64,
}

/// Arguments for single-word lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// The word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// How many suggestions to report
    #[arg(short = 'm', long, default_value = "top")]
    pub mode: LookupMode,

    /// Edit distance bound for this query (defaults to the index bound)
    #[arg(long)]
    pub distance: Option<usize>,
}

/// Arguments for phrase correction
#[derive(Parser, Debug, Clone)]
pub struct CompoundArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// The phrase to correct
    #[arg(value_name = "PHRASE")]
    pub phrase: String,

    /// Edit distance bound per term (defaults to the index bound)
    #[arg(long)]
    pub distance: Option<usize>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Lookup result breadth
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// The single best suggestion
    Top,
    /// All suggestions at the best distance
    Closest,
    /// Every suggestion within the bound
    All,
}

impl From<LookupMode> for Verbosity {
    fn from(mode: LookupMode) -> Self {
        match mode {
            LookupMode::Top => Verbosity::Top,
            LookupMode::Closest => Verbosity::Closest,
            LookupMode::All => Verbosity::All,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
