use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use loglens_analysis::{LogLoader, count_by_level, filter_by_level};
use loglens_report::{Report, render_counts, render_filtered};

/// Loglens - a command-line analyzer for plain-text log files
#[derive(Parser, Debug)]
#[command(name = "loglens")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the log file to analyze
    #[arg(value_name = "LOG_FILE")]
    log_file: PathBuf,

    /// Show details for this level in addition to the counts table
    #[arg(value_name = "LEVEL")]
    level: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

/// Report output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable text sections
    Table,
    /// Single JSON document
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let result = run(args, &mut stdout.lock());

    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let records = LogLoader::load(&args.log_file);

    // Nothing to report and nothing asked for
    if records.is_empty() && args.level.is_none() {
        return Ok(());
    }

    let counts = count_by_level(&records);

    match args.format {
        Format::Table => {
            writeln!(out)?;
            out.write_all(render_counts(&counts).as_bytes())?;

            if let Some(level) = &args.level {
                let matches = filter_by_level(&records, level);
                writeln!(out)?;
                out.write_all(render_filtered(&matches, level).as_bytes())?;
            }
        }
        Format::Json => {
            let filtered = args
                .level
                .as_deref()
                .map(|level| (level, filter_by_level(&records, level)));
            writeln!(out, "{}", Report::new(counts, filtered).to_json_string()?)?;
        }
    }

    Ok(())
}
