use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use romans::settings::{self, ValidationMode};
use romans::{int_to_roman_with, is_valid_with, roman_to_int, NumeralTable};

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral conversion diagnostics")]
struct Cli {
    /// Path to a settings TOML file (replaces the built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Trace to stderr (needs the `trace` feature)
    #[arg(long, global = true)]
    trace: bool,
    /// Write a JSONL trace to this directory instead of stderr
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse numerals into integers
    Parse {
        /// Numerals to parse
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Format integers as numerals
    Format {
        /// Values to format
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Check whether strings are valid numerals under the configured mode
    Check {
        /// Strings to check
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the numeral table
    Table,
}

#[derive(Serialize)]
struct ParseRow<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct FormatRow {
    value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    numeral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct CheckRow<'a> {
    text: &'a str,
    valid: bool,
}

fn load_config(path: &Path) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(1);
    });
    if let Err(e) = settings::init_custom(content) {
        eprintln!("Error loading config {}: {e}", path.display());
        process::exit(1);
    }
}

fn print_json<T: Serialize>(rows: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(rows).expect("JSON serialization failed")
    );
}

fn main() {
    let cli = Cli::parse();

    if cli.trace || cli.trace_dir.is_some() {
        romans::trace_init::init_tracing(cli.trace_dir.as_deref());
    }
    if let Some(ref path) = cli.config {
        load_config(path);
    }
    let settings = settings::settings();

    let mut failed = false;
    match cli.command {
        Command::Parse { ref texts } => {
            let rows: Vec<ParseRow> = texts
                .iter()
                .map(|text| match roman_to_int(text) {
                    Ok(value) => ParseRow {
                        text,
                        value: Some(value),
                        error: None,
                    },
                    Err(e) => ParseRow {
                        text,
                        value: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();
            failed = rows.iter().any(|r| r.error.is_some());
            if cli.json {
                print_json(&rows);
            } else {
                for row in &rows {
                    match (row.value, &row.error) {
                        (Some(value), _) => println!("{}\t{value}", row.text),
                        (None, Some(e)) => eprintln!("{}: {e}", row.text),
                        (None, None) => {}
                    }
                }
            }
        }

        Command::Format { ref values } => {
            let rows: Vec<FormatRow> = values
                .iter()
                .map(|&value| match int_to_roman_with(value, &settings.format) {
                    Ok(numeral) => FormatRow {
                        value,
                        numeral: Some(numeral),
                        error: None,
                    },
                    Err(e) => FormatRow {
                        value,
                        numeral: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();
            failed = rows.iter().any(|r| r.error.is_some());
            if cli.json {
                print_json(&rows);
            } else {
                for row in &rows {
                    match (&row.numeral, &row.error) {
                        (Some(numeral), _) => println!("{}\t{numeral}", row.value),
                        (None, Some(e)) => eprintln!("{}: {e}", row.value),
                        (None, None) => {}
                    }
                }
            }
        }

        Command::Check { ref texts } => {
            let rows: Vec<CheckRow> = texts
                .iter()
                .map(|text| CheckRow {
                    text,
                    valid: is_valid_with(text, &settings.validation),
                })
                .collect();
            failed = rows.iter().any(|r| !r.valid);
            if cli.json {
                print_json(&rows);
            } else {
                let mode = match settings.validation.mode {
                    ValidationMode::Permissive => "permissive",
                    ValidationMode::RoundTrip => "round_trip",
                };
                eprintln!("mode: {mode}");
                for row in &rows {
                    let verdict = if row.valid { "valid" } else { "invalid" };
                    println!("{}\t{verdict}", row.text);
                }
            }
        }

        Command::Table => {
            let entries = NumeralTable::global().entries();
            if cli.json {
                print_json(&entries);
            } else {
                for entry in entries {
                    println!("{}\t{}", entry.symbol, entry.value);
                }
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
