//! fincoach CLI - Budget usage and financial insights
//!
//! Usage:
//!   fincoach budget              Spending against each budget category
//!   fincoach summary             Totals and category breakdown
//!   fincoach goals               Goal progress
//!   fincoach insights            Prioritized insights
//!   fincoach config              Active insight thresholds

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let inputs = || {
        commands::load_inputs(
            &cli.snapshot,
            cli.config.as_deref(),
            cli.today.as_deref(),
        )
    };

    match &cli.command {
        Commands::Budget { over_only } => commands::cmd_budget(&inputs()?, *over_only, cli.json),
        Commands::Summary => commands::cmd_summary(&inputs()?, cli.json),
        Commands::Goals => commands::cmd_goals(&inputs()?, cli.json),
        Commands::Insights { rule, limit } => {
            commands::cmd_insights(&inputs()?, rule.as_deref(), *limit, cli.json)
        }
        Commands::Config => commands::cmd_config(cli.config.as_deref(), cli.json),
    }
}
