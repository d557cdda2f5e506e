//! Config command

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use fincoach_core::{InsightThresholds, ThresholdSource};

use super::load_thresholds;

pub fn cmd_config(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (thresholds, source) = load_thresholds(config_path)?;

    if json {
        let value = serde_json::json!({
            "source": source.to_string(),
            "thresholds": thresholds,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_config(&thresholds, &source)?);
    }
    Ok(())
}

pub fn render_config(thresholds: &InsightThresholds, source: &ThresholdSource) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "⚙️  Insight Thresholds")?;
    writeln!(out, "   Source: {}", source)?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────")?;
    writeln!(out, "   Budget alert above         {:>6.1}%", thresholds.budget_alert_percent)?;
    writeln!(out, "   Budget watch above         {:>6.1}%", thresholds.budget_watch_percent)?;
    writeln!(out, "   Category alert above       {:>6.1}%", thresholds.category_alert_percent)?;
    writeln!(out, "   Great savings rate above   {:>6.1}%", thresholds.great_savings_rate_percent)?;
    writeln!(out, "   Low savings rate below     {:>6.1}%", thresholds.low_savings_rate_percent)?;
    writeln!(out, "   Goal deadline window       {:>6} days", thresholds.goal_deadline_window_days)?;
    writeln!(out, "   Goal behind progress below {:>6.1}%", thresholds.goal_behind_progress_percent)?;

    Ok(out)
}
