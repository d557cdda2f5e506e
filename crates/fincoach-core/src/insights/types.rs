//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rules that can produce insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Overall spending against the monthly budget
    BudgetConsumption,
    /// Spending against each category allocation
    CategoryBudget,
    /// Share of income saved
    SavingsRate,
    /// Progress toward savings goals
    GoalProgress,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::BudgetConsumption => "budget_consumption",
            RuleKind::CategoryBudget => "category_budget",
            RuleKind::SavingsRate => "savings_rate",
            RuleKind::GoalProgress => "goal_progress",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget_consumption" => Ok(RuleKind::BudgetConsumption),
            "category_budget" => Ok(RuleKind::CategoryBudget),
            "savings_rate" => Ok(RuleKind::SavingsRate),
            "goal_progress" => Ok(RuleKind::GoalProgress),
            _ => Err(format!("Unknown insight rule: {}", s)),
        }
    }
}

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Success,
    Warning,
    Caution,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Success => "success",
            InsightKind::Warning => "warning",
            InsightKind::Caution => "caution",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(InsightKind::Success),
            "warning" => Ok(InsightKind::Warning),
            "caution" => Ok(InsightKind::Caution),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// How prominently an insight should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric weight for sorting (higher = shown first)
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A short advisory message produced by a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Short title (e.g., "Food Over Budget")
    pub title: String,
    /// One-line explanation (e.g., "You've exceeded your Food budget by $20.00")
    pub message: String,
    pub priority: Priority,
    /// Rule that produced this insight
    pub rule: RuleKind,
}

impl Insight {
    pub fn new(
        rule: RuleKind,
        kind: InsightKind,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            priority,
            rule,
        }
    }
}
