use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use kazu_core::lexicon::is_kanji_numeral;
use kazu_core::{to_phrase_with, translate_with, AndStyle, Translation};

#[derive(Parser)]
#[command(name = "kazutool", about = "Kanji numeral translation diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a kanji numeral and spell its value in English
    Convert {
        /// Kanji numeral to translate
        numeral: String,
        /// Keep the historical trailing "and" on exact hundreds
        #[arg(long)]
        legacy_and: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Spell a non-negative integer in English
    Write {
        /// Value to spell out
        value: u64,
        /// Keep the historical trailing "and" on exact hundreds
        #[arg(long)]
        legacy_and: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Translate numerals from a file and record results to JSONL
    Batch {
        /// Path to the input file (one numeral per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Run translation accuracy tests from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// A single batch entry (one per input line).
#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    numeral: &'a str,
    value: u64,
    phrase: String,
}

#[derive(Debug, Serialize)]
struct ConvertReport<'a> {
    numeral: &'a str,
    value: u64,
    phrase: String,
}

// --- Accuracy types ---

#[derive(Debug, Deserialize)]
struct AccuracyCorpus {
    cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
struct AccuracyCase {
    numeral: String,
    value: u64,
    #[serde(default)]
    phrase: Option<String>,
    category: String,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct AccuracyResult {
    numeral: String,
    expected_value: u64,
    actual_value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_phrase: Option<String>,
    actual_phrase: String,
    pass: bool,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct AccuracySummary {
    total: usize,
    pass: usize,
    fail: usize,
    pass_rate: String,
}

#[derive(Debug, Serialize)]
struct AccuracyReport {
    results: Vec<AccuracyResult>,
    summary: AccuracySummary,
}

fn style_for(legacy_and: bool) -> AndStyle {
    if legacy_and {
        AndStyle::Trailing
    } else {
        AndStyle::Suppressed
    }
}

fn run_translation(numeral: &str, style: AndStyle) -> Translation {
    translate_with(numeral, style).unwrap_or_else(|e| {
        eprintln!("Translation failed for {}: {}", numeral, e);
        process::exit(1);
    })
}

fn read_numerals(input_file: &str) -> Vec<String> {
    let content = fs::read_to_string(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to read input file {}: {}", input_file, e);
        process::exit(1);
    });
    content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            numeral,
            legacy_and,
            json,
        } => {
            let stray = numeral.chars().filter(|&c| !is_kanji_numeral(c)).count();
            if stray > 0 {
                eprintln!("warning: {} unrecognized symbol(s) treated as zero", stray);
            }

            let t = run_translation(&numeral, style_for(legacy_and));
            if json {
                let report = ConvertReport {
                    numeral: &numeral,
                    value: t.value,
                    phrase: t.phrase(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                println!("value:  {}", t.value);
                println!("phrase: {}", t.phrase());
            }
        }

        Command::Write {
            value,
            legacy_and,
            json,
        } => {
            let phrase = to_phrase_with(value, style_for(legacy_and)).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "value": value,
                        "phrase": phrase,
                    }))
                    .expect("JSON serialization failed")
                );
            } else {
                println!("{}", phrase);
            }
        }

        Command::Batch {
            input_file,
            output_file,
        } => {
            let numerals = read_numerals(&input_file);

            let file = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(file);

            for numeral in &numerals {
                let t = run_translation(numeral, AndStyle::default());
                let entry = BatchEntry {
                    numeral,
                    value: t.value,
                    phrase: t.phrase(),
                };
                let line = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{}", line).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }

            eprintln!(
                "Batch written: {} numerals -> {}",
                numerals.len(),
                output_file
            );
        }

        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => {
            let corpus_content = fs::read_to_string(&corpus_file).unwrap_or_else(|e| {
                eprintln!("Failed to read corpus file {}: {}", corpus_file, e);
                process::exit(1);
            });
            let corpus: AccuracyCorpus = toml::from_str(&corpus_content).unwrap_or_else(|e| {
                eprintln!("Failed to parse corpus TOML: {}", e);
                process::exit(1);
            });

            let cases: Vec<&AccuracyCase> = corpus
                .cases
                .iter()
                .filter(|c| category.as_ref().map_or(true, |cat| c.category == *cat))
                .collect();

            if cases.is_empty() {
                eprintln!("No cases match the given filters");
                process::exit(1);
            }

            let mut results: Vec<AccuracyResult> = Vec::new();
            for case in &cases {
                let t = run_translation(&case.numeral, AndStyle::default());
                let actual_phrase = t.phrase();
                let pass = t.value == case.value
                    && case.phrase.as_ref().map_or(true, |p| *p == actual_phrase);
                results.push(AccuracyResult {
                    numeral: case.numeral.clone(),
                    expected_value: case.value,
                    actual_value: t.value,
                    expected_phrase: case.phrase.clone(),
                    actual_phrase,
                    pass,
                    category: case.category.clone(),
                    note: case.note.clone(),
                });
            }

            let total = results.len();
            let pass = results.iter().filter(|r| r.pass).count();
            let fail = total - pass;
            let summary = AccuracySummary {
                total,
                pass,
                fail,
                pass_rate: format!("{:.1}%", pass as f64 / total as f64 * 100.0),
            };

            if json {
                let report = AccuracyReport { results, summary };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
                for r in &results {
                    grouped.entry(&r.category).or_default().push(r);
                }

                for (cat, group) in &grouped {
                    println!("\n=== {} ({} cases) ===", cat, group.len());
                    for r in group {
                        if r.pass {
                            if verbose {
                                println!(
                                    "  \u{2713} {} \u{2192} {} ({})",
                                    r.numeral, r.actual_value, r.actual_phrase
                                );
                            }
                        } else if r.actual_value != r.expected_value {
                            println!(
                                "  \u{2717} {} \u{2192} {} (got: {})",
                                r.numeral, r.expected_value, r.actual_value
                            );
                        } else {
                            println!(
                                "  \u{2717} {} \u{2192} \"{}\" (got: \"{}\")",
                                r.numeral,
                                r.expected_phrase.as_deref().unwrap_or(""),
                                r.actual_phrase
                            );
                        }
                    }
                }

                println!();
                println!("=== Summary ===");
                println!("  Total:     {}", summary.total);
                println!("  Pass:      {:>3}", summary.pass);
                println!("  Fail:      {:>3}", summary.fail);
                println!("  Pass rate: {}", summary.pass_rate);
            }

            if fail > 0 {
                process::exit(1);
            }
        }
    }
}
