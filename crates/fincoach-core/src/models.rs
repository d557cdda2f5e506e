//! Domain models for fincoach

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Category name → amount allocated for the period
pub type BudgetAllocations = BTreeMap<String, f64>;

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded money movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Stored as a positive magnitude; expense sums use the absolute value
    pub amount: f64,
    /// Free-form label, only meaningful for expenses
    #[serde(default)]
    pub category: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

/// A savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    /// Goals without a deadline are never considered behind schedule
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<String>,
}

/// The profile fields the engine reads. Missing fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_budget: f64,
}

/// Actual-vs-allocated comparison for one budget category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub spent: f64,
    pub budget: f64,
    /// `budget - spent`; negative once over budget
    pub remaining: f64,
    /// Zero when the budget is not positive
    pub percentage: f64,
    pub is_over_budget: bool,
}

/// Expense total for one category seen in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    pub transaction_count: usize,
    /// Share of total spending
    pub percentage: f64,
}

/// Aggregate totals for the period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Income recorded in the ledger
    pub total_income: f64,
    /// Expenses recorded in the ledger
    pub total_spending: f64,
    pub monthly_income: f64,
    pub monthly_budget: f64,
    /// Profile income minus ledger spending
    pub monthly_savings: f64,
    pub savings_rate: f64,
    /// Share of the monthly budget already spent
    pub budget_used_percentage: f64,
}

/// Everything the engine needs, as exported by the data layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: BudgetAllocations,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a snapshot from any reader
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
