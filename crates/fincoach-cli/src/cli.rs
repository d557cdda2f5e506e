//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fincoach - Budget usage and financial insights
#[derive(Parser)]
#[command(name = "fincoach")]
#[command(about = "Budget usage, goal progress and spending insights from a ledger snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file exported by the data layer (JSON)
    #[arg(long, default_value = "snapshot.json", global = true)]
    pub snapshot: PathBuf,

    /// Insight threshold config (TOML)
    ///
    /// Defaults to ~/.local/share/fincoach/config/insights.toml when present,
    /// otherwise the built-in thresholds.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date for goal deadlines (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show spending against each budget category
    Budget {
        /// Only show categories that are over budget
        #[arg(long)]
        over_only: bool,
    },

    /// Show income, spending, savings and the category breakdown
    Summary,

    /// Show progress toward savings goals
    Goals,

    /// Show prioritized insights
    Insights {
        /// Only show insights from one rule:
        /// budget_consumption, category_budget, savings_rate, goal_progress
        #[arg(short, long)]
        rule: Option<String>,

        /// Maximum number of insights to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the active insight thresholds
    Config,
}
