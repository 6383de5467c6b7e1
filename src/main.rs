use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use ecm::{load_csv, rank, write_report};

/// Which ECM jammers to fit and activate for a fight.
///
/// Ship name arguments are case insensitive and may be partial names,
/// e.g. 'vex' for 'Vexor'. Some ships also have alternate abbreviations,
/// e.g. 'vni' for 'Vexor Navy Issue'.
#[derive(Parser)]
#[command(name = "ecm", version, about = "ECM jammer lookup for fleet fights")]
struct Cli {
    /// Ship names (or partial names) to look up
    #[arg(required = true)]
    queries: Vec<String>,

    /// Ship database CSV file
    #[arg(short = 'f', long = "file", default_value = "ecm.csv")]
    database: PathBuf,

    /// Log timing diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let start = Instant::now();

    let records = load_csv(&cli.database)?;
    tracing::info!(
        records = records.len(),
        database = %cli.database.display(),
        "ship database loaded"
    );

    let report = rank(&records, &cli.queries);
    tracing::info!(
        matched = report.ships.len(),
        unmatched = report.unmatched().count(),
        "matching complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report)?;
    out.flush()?;

    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");

    Ok(())
}
