//! Command implementations for the Xiphos CLI.

use std::time::Instant;

use crate::checker::SpellChecker;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{DEFAULT_COMPACT_LEVEL, DEFAULT_INITIAL_CAPACITY, SpellConfig};
use crate::error::{Result, XiphosError};

/// Execute a CLI command.
pub fn execute_command(args: XiphosArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => run_lookup(lookup_args.clone(), &args),
        Command::Compound(compound_args) => run_compound(compound_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build a checker and load the dictionary named on the command line.
fn load_checker(args: &DictionaryArgs, cli_args: &XiphosArgs) -> Result<(SpellChecker, u64)> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let config = SpellConfig::new(
        DEFAULT_INITIAL_CAPACITY,
        args.max_edit_distance,
        args.prefix_length,
        args.min_count,
        u64::MAX,
        DEFAULT_COMPACT_LEVEL,
    )?;
    let mut checker = SpellChecker::new(config);

    let start_time = Instant::now();
    let loaded = if args.corpus {
        checker.create_dictionary(&args.dictionary)?
    } else {
        checker.load_dictionary(&args.dictionary, args.term_column, args.count_column)?
    };
    if !loaded {
        return Err(XiphosError::dictionary(format!(
            "dictionary file not found: {}",
            args.dictionary.display()
        )));
    }

    let duration = start_time.elapsed();
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} words in {}ms",
            checker.word_count(),
            duration.as_millis()
        );
    }

    Ok((checker, duration.as_millis() as u64))
}

/// Suggest corrections for a single word.
fn run_lookup(args: LookupArgs, cli_args: &XiphosArgs) -> Result<()> {
    let (checker, _) = load_checker(&args.dictionary, cli_args)?;
    let distance = args
        .distance
        .unwrap_or(checker.config().max_dictionary_edit_distance);

    let start_time = Instant::now();
    let suggestions = checker.lookup(&args.word, args.mode.clone().into(), distance)?;
    let duration = start_time.elapsed();

    output_result(
        &format!("Looked up \"{}\"", args.word),
        &LookupResult {
            input: args.word,
            suggestions,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Correct a multi-word phrase.
fn run_compound(args: CompoundArgs, cli_args: &XiphosArgs) -> Result<()> {
    let (checker, _) = load_checker(&args.dictionary, cli_args)?;
    let distance = args
        .distance
        .unwrap_or(checker.config().max_dictionary_edit_distance);

    let start_time = Instant::now();
    let result = checker.lookup_compound(&args.phrase, distance)?;
    let duration = start_time.elapsed();

    output_result(
        &format!("Corrected \"{}\"", args.phrase),
        &CompoundResult {
            input: args.phrase,
            suggestion: result.suggestion,
            parts: result.parts,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &XiphosArgs) -> Result<()> {
    let (checker, load_duration_ms) = load_checker(&args.dictionary, cli_args)?;

    output_result(
        "Dictionary loaded",
        &DictionaryStatsResult {
            dictionary: args.dictionary.dictionary.to_string_lossy().to_string(),
            load_duration_ms,
            stats: checker.stats(),
        },
        cli_args,
    )
}
