//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::checker::SpellStats;
use crate::cli::args::{OutputFormat, XiphosArgs};
use crate::error::Result;
use crate::suggest::Suggestion;

/// Result structure for single-word lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub input: String,
    pub suggestions: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// Result structure for phrase correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompoundResult {
    pub input: String,
    pub suggestion: Suggestion,
    pub parts: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// Result structure for dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStatsResult {
    pub dictionary: String,
    pub load_duration_ms: u64,
    pub stats: SpellStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &XiphosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &XiphosArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("LookupResult") => {
            output_lookup_human(&value)
        }
        _ if std::any::type_name::<T>().contains("CompoundResult") => {
            output_compound_human(&value)
        }
        _ if std::any::type_name::<T>().contains("DictionaryStatsResult") => {
            output_stats_human(&value)
        }
        _ => output_generic_human(&value),
    }
}

/// Output lookup suggestions in human format.
fn output_lookup_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(suggestions) = obj.get("suggestions").and_then(|s| s.as_array()) {
        if suggestions.is_empty() {
            println!("No suggestions found.");
        } else {
            println!("Suggestions:");
            println!("════════════");
            for suggestion in suggestions {
                print_suggestion_line(suggestion);
            }
        }
    }

    println!();
    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Lookup time: {duration}ms");
    }

    Ok(())
}

/// Output a corrected phrase in human format.
fn output_compound_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(suggestion) = obj.get("suggestion") {
        println!("Corrected phrase:");
        println!("═════════════════");
        print_suggestion_line(suggestion);
    }

    if let Some(parts) = obj.get("parts").and_then(|p| p.as_array())
        && parts.len() > 1
    {
        println!();
        println!("Parts:");
        println!("──────");
        for part in parts {
            print_suggestion_line(part);
        }
    }

    println!();
    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Correction time: {duration}ms");
    }

    Ok(())
}

/// Output dictionary statistics in human format.
fn output_stats_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    println!("Dictionary Statistics:");
    println!("══════════════════════");
    if let Some(path) = obj.get("dictionary").and_then(|p| p.as_str()) {
        println!("Dictionary: {path}");
    }
    if let Some(stats) = obj.get("stats").and_then(|s| s.as_object()) {
        for (key, val) in stats {
            println!("{key}: {val}");
        }
    }
    if let Some(duration) = obj.get("load_duration_ms").and_then(|d| d.as_u64()) {
        println!("Load time: {duration}ms");
    }

    Ok(())
}

/// Generic fallback for other result types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            println!("{key}: {val}");
        }
    } else {
        println!("{value}");
    }
    Ok(())
}

fn print_suggestion_line(suggestion: &serde_json::Value) {
    let term = suggestion
        .get("term")
        .and_then(|t| t.as_str())
        .unwrap_or("unknown");
    let distance = suggestion
        .get("distance")
        .and_then(|d| d.as_u64())
        .unwrap_or(0);
    let count = suggestion.get("count").and_then(|c| c.as_u64()).unwrap_or(0);
    println!("{term} (distance: {distance}, count: {count})");
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &XiphosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
