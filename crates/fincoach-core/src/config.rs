//! Insight threshold configuration
//!
//! The cut-offs used by the insight rules (budget alert levels, savings rate
//! bands, goal deadline window) are configurable.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/fincoach/config/insights.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Numeric cut-offs for the insight rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Overall spend percentage above which a high priority alert is raised
    pub budget_alert_percent: f64,
    /// Overall spend percentage above which a medium priority watch is raised
    pub budget_watch_percent: f64,
    /// Category spend percentage above which a category alert is raised
    pub category_alert_percent: f64,
    pub great_savings_rate_percent: f64,
    pub low_savings_rate_percent: f64,
    /// Goals due in fewer days than this are checked for progress
    pub goal_deadline_window_days: i64,
    pub goal_behind_progress_percent: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            budget_alert_percent: 90.0,
            budget_watch_percent: 75.0,
            category_alert_percent: 80.0,
            great_savings_rate_percent: 20.0,
            low_savings_rate_percent: 10.0,
            goal_deadline_window_days: 30,
            goal_behind_progress_percent: 80.0,
        }
    }
}

/// Where the active thresholds were loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ThresholdSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InsightThresholds {
    /// Load thresholds, preferring `override_path`, then the data dir override
    ///
    /// An explicit path that does not exist is an error. A missing data dir
    /// override silently falls back to the embedded defaults.
    pub fn load(override_path: Option<&Path>) -> Result<(Self, ThresholdSource)> {
        if let Some(path) = override_path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok((Self::from_file(path)?, ThresholdSource::File(path.to_path_buf())));
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                let thresholds = Self::from_file(&default_path)?;
                return Ok((thresholds, ThresholdSource::File(default_path)));
            }
        }

        Ok((Self::from_toml(DEFAULT_CONFIG)?, ThresholdSource::Embedded))
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded insight thresholds");
        Self::from_toml(&content)
    }

    /// Parse thresholds from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut thresholds = Self::default();

        if let Some(budget) = raw.budget {
            if let Some(v) = budget.alert_percent {
                thresholds.budget_alert_percent = v;
            }
            if let Some(v) = budget.watch_percent {
                thresholds.budget_watch_percent = v;
            }
            if let Some(v) = budget.category_alert_percent {
                thresholds.category_alert_percent = v;
            }
        }

        if let Some(savings) = raw.savings {
            if let Some(v) = savings.great_rate_percent {
                thresholds.great_savings_rate_percent = v;
            }
            if let Some(v) = savings.low_rate_percent {
                thresholds.low_savings_rate_percent = v;
            }
        }

        if let Some(goals) = raw.goals {
            if let Some(v) = goals.deadline_window_days {
                thresholds.goal_deadline_window_days = v;
            }
            if let Some(v) = goals.behind_progress_percent {
                thresholds.goal_behind_progress_percent = v;
            }
        }

        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reject values that would make the rules contradict each other
    pub fn validate(&self) -> Result<()> {
        let percents = [
            ("budget.alert_percent", self.budget_alert_percent),
            ("budget.watch_percent", self.budget_watch_percent),
            ("budget.category_alert_percent", self.category_alert_percent),
            ("savings.great_rate_percent", self.great_savings_rate_percent),
            ("savings.low_rate_percent", self.low_savings_rate_percent),
            ("goals.behind_progress_percent", self.goal_behind_progress_percent),
        ];
        for (key, value) in percents {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        if self.goal_deadline_window_days < 0 {
            return Err(Error::Config(format!(
                "goals.deadline_window_days must be non-negative, got {}",
                self.goal_deadline_window_days
            )));
        }

        if self.budget_watch_percent > self.budget_alert_percent {
            return Err(Error::Config(format!(
                "budget.watch_percent ({}) exceeds budget.alert_percent ({})",
                self.budget_watch_percent, self.budget_alert_percent
            )));
        }

        if self.low_savings_rate_percent > self.great_savings_rate_percent {
            return Err(Error::Config(format!(
                "savings.low_rate_percent ({}) exceeds savings.great_rate_percent ({})",
                self.low_savings_rate_percent, self.great_savings_rate_percent
            )));
        }

        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("fincoach").join("config").join("insights.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    budget: Option<RawBudget>,
    savings: Option<RawSavings>,
    goals: Option<RawGoals>,
}

#[derive(Debug, Deserialize)]
struct RawBudget {
    alert_percent: Option<f64>,
    watch_percent: Option<f64>,
    category_alert_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSavings {
    great_rate_percent: Option<f64>,
    low_rate_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawGoals {
    deadline_window_days: Option<i64>,
    behind_progress_percent: Option<f64>,
}
