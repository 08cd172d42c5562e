//! CLI entry point for the statistics calculator.
//!
//! Provides subcommands for summarizing a list of numbers, shaping chart series,
//! printing worked examples, and browsing the formula reference.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use statcalc::{
    breakdown::{explain, explain_all},
    chart::{frequency_table, histogram},
    formulas,
    output::{SummaryRecord, append_record, print_json, print_pretty, summary_text},
    parser::{DEFAULT_DELIMITER, parse_numbers},
    statistic::Statistic,
    stats::compute,
};
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "statcalc")]
#[command(about = "Descriptive statistics for a list of numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute summary statistics
    Compute {
        /// Numbers as text, a path to a file containing them, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Character separating the numbers
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,

        /// How to print the results
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Optional: CSV file to append a summary row to
        #[arg(short, long)]
        output: Option<String>,

        /// Optional: label stored with the CSV row
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Print chart series as JSON
    Chart {
        #[arg(value_name = "INPUT")]
        input: String,

        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,

        /// Which series to produce
        #[arg(short, long, value_enum, default_value_t = ChartKind::Histogram)]
        kind: ChartKind,
    },
    /// Print step-by-step worked examples
    Explain {
        #[arg(value_name = "INPUT")]
        input: String,

        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,

        /// Only explain this statistic (e.g. "mean", "std-dev", "q1")
        #[arg(short, long)]
        statistic: Option<Statistic>,
    },
    /// Show the formula reference for a statistic, or list all of them
    Formula {
        #[arg(value_name = "NAME")]
        statistic: Option<Statistic>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartKind {
    Frequency,
    Histogram,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/statcalc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("statcalc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            input,
            delimiter,
            format,
            output,
            label,
        } => run_compute(&input, delimiter, format, output.as_deref(), label.as_deref())?,
        Commands::Chart {
            input,
            delimiter,
            kind,
        } => run_chart(&input, delimiter, kind)?,
        Commands::Explain {
            input,
            delimiter,
            statistic,
        } => run_explain(&input, delimiter, statistic)?,
        Commands::Formula { statistic } => match statistic {
            Some(stat) => println!("{}", formulas::reference(stat).to_text()),
            None => {
                for info in formulas::all() {
                    println!("{:<20} {}", info.statistic.key(), info.title);
                }
            }
        },
    }

    Ok(())
}

/// Resolves INPUT into text: stdin for "-", file contents for an existing path,
/// otherwise the argument itself.
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read numbers from stdin")?;
        return Ok(buf);
    }

    let path = Path::new(input);
    if path.is_file() {
        debug!(path = %path.display(), "Reading numbers from file");
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()));
    }

    Ok(input.to_string())
}

/// Reads and parses INPUT. Newlines are treated as delimiters so one-per-line files work.
fn load_sample(input: &str, delimiter: char) -> Result<Vec<f64>> {
    let text = read_input(input)?.replace(['\r', '\n'], &delimiter.to_string());
    Ok(parse_numbers(&text, delimiter)?)
}

#[tracing::instrument(skip(input))]
fn run_compute(
    input: &str,
    delimiter: char,
    format: OutputFormat,
    output: Option<&str>,
    label: Option<&str>,
) -> Result<()> {
    let sample = load_sample(input, delimiter)?;
    let results = compute(&sample)?;
    info!(count = results.count, "Statistics computed");

    match format {
        OutputFormat::Text => println!("{}", summary_text(&results)),
        OutputFormat::Json => println!("{}", print_json(&results)?),
        OutputFormat::Pretty => {
            print_pretty(&results);
            println!("{results:#?}");
        }
    }

    if let Some(path) = output {
        let mut record = SummaryRecord::from_results(&results);
        if let Some(label) = label {
            record = record.with_label(label);
        }
        append_record(path, &record)?;
    }

    Ok(())
}

#[tracing::instrument(skip(input))]
fn run_chart(input: &str, delimiter: char, kind: ChartKind) -> Result<()> {
    let sample = load_sample(input, delimiter)?;

    let json = match kind {
        ChartKind::Frequency => serde_json::to_string_pretty(&frequency_table(&sample))?,
        ChartKind::Histogram => serde_json::to_string_pretty(&histogram(&sample))?,
    };
    println!("{json}");
    Ok(())
}

#[tracing::instrument(skip(input))]
fn run_explain(input: &str, delimiter: char, statistic: Option<Statistic>) -> Result<()> {
    let sample = load_sample(input, delimiter)?;
    let results = compute(&sample)?;

    let breakdowns = match statistic {
        Some(stat) => vec![explain(stat, &sample, &results)],
        None => explain_all(&sample, &results),
    };
    for breakdown in breakdowns {
        println!("{}", breakdown.to_text());
    }
    Ok(())
}
