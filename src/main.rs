//! Command line entry point for the season rating engine
//!
//! Loads a league configuration and a season's result feed, runs the
//! rating engine over every week, prints the ranked table for the
//! requested week, and optionally exports the full snapshot history as a
//! JSON report for tables and charts.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use gridiron_elo::config::LeagueConfig;
use gridiron_elo::feed;
use gridiron_elo::season::{standings, SeasonDriver, SeasonHistory};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Gridiron Elo - season ratings with weekly snapshot history
#[derive(Parser)]
#[command(
    name = "gridiron-elo",
    version,
    about = "Elo-style season ratings with weekly snapshot history",
    long_about = "Computes Elo-style strength ratings for a fixed league roster from a \
                 chronological feed of match results, with a home-field adjustment and \
                 margin-of-victory scaling, and accumulates one snapshot of all teams' \
                 ratings per week for tables and charts."
)]
struct Args {
    /// League configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to league configuration file (TOML format)"
    )]
    config: PathBuf,

    /// Match results file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to season results file (JSON array of match results)"
    )]
    results: PathBuf,

    /// Week to display standings for (defaults to the latest week)
    #[arg(short, long, value_name = "WEEK")]
    week: Option<u32>,

    /// Write the full snapshot history as a JSON report
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    log_level: String,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and results, then exit")]
    dry_run: bool,
}

/// Exported snapshot history with provenance metadata
#[derive(Serialize)]
struct HistoryReport<'a> {
    generated_at: DateTime<Utc>,
    league: &'a str,
    season: u16,
    snapshots: &'a SeasonHistory,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Print one week's ranked table
fn print_standings(history: &SeasonHistory, week: u32) {
    let Some(snapshot) = history.week(week) else {
        warn!(week, "no snapshot for requested week");
        return;
    };

    println!("Week {} rankings", snapshot.week);
    for row in standings(snapshot) {
        println!("{:>3}  {:<16} {:>5}", row.rank, row.team, row.rating);
    }
}

/// Write the full history report to the given path
fn export_history(path: &PathBuf, config: &LeagueConfig, history: &SeasonHistory) -> Result<()> {
    let report = HistoryReport {
        generated_at: Utc::now(),
        league: &config.name,
        season: config.season,
        snapshots: history,
    };
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "wrote history report");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = LeagueConfig::from_file(&args.config)?;
    let results = feed::load_results(&args.results)?;
    info!(
        league = %config.name,
        season = config.season,
        teams = config.teams.len(),
        results = results.len(),
        "loaded input"
    );

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without processing results");
        return Ok(());
    }

    let mut driver = SeasonDriver::new(&config)?;
    if let Err(e) = driver.run(&results) {
        // The history is still valid up to the last completed week;
        // surface how far processing got before failing.
        let last_week = driver.history().latest().map(|s| s.week);
        match last_week {
            Some(week) => warn!(week, "processing stopped after this week"),
            None => warn!("processing stopped before the baseline snapshot"),
        }
        return Err(e);
    }

    let history = driver.into_history();
    let latest_week = history.latest().map(|s| s.week).unwrap_or(0);
    let display_week = args.week.unwrap_or(latest_week);
    print_standings(&history, display_week);

    if let Some(output) = &args.output {
        export_history(output, &config, &history)?;
    }

    Ok(())
}
