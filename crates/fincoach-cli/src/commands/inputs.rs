//! Shared input loading for commands

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fincoach_core::{InsightThresholds, Snapshot, ThresholdSource};

/// Everything a command needs to run the engine
#[derive(Debug, Clone)]
pub struct Inputs {
    pub snapshot: Snapshot,
    pub today: NaiveDate,
    pub thresholds: InsightThresholds,
    pub threshold_source: ThresholdSource,
}

/// Load the snapshot, reference date and thresholds
pub fn load_inputs(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    today: Option<&str>,
) -> Result<Inputs> {
    let snapshot = load_snapshot(snapshot_path)?;
    let today = resolve_today(today)?;
    let (thresholds, threshold_source) = load_thresholds(config_path)?;

    tracing::debug!(
        transactions = snapshot.transactions.len(),
        budgets = snapshot.budgets.len(),
        goals = snapshot.goals.len(),
        %today,
        thresholds = %threshold_source,
        "Loaded inputs"
    );

    Ok(Inputs {
        snapshot,
        today,
        thresholds,
        threshold_source,
    })
}

/// Read a JSON snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot: {}", path.display()))?;
    Snapshot::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid snapshot: {}", path.display()))
}

/// Parse `--today`, falling back to the local date
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Load thresholds from `--config`, the data dir override, or the defaults
pub fn load_thresholds(config_path: Option<&Path>) -> Result<(InsightThresholds, ThresholdSource)> {
    InsightThresholds::load(config_path).context("Failed to load insight thresholds")
}
