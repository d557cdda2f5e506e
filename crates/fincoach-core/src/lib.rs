//! fincoach Core Library
//!
//! The computation layer behind the finance dashboard:
//! - Ledger models supplied by the data layer (transactions, budgets, goals)
//! - Budget usage, totals and category breakdowns
//! - Rule-based insight engine with prioritized output
//! - Insight threshold configuration
//!
//! Everything here is a pure function of its inputs. Data is fetched and
//! rendered elsewhere; callers pass plain values in and get plain values back.

pub mod calculations;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;

/// Fixture builders for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use calculations::{
    calculate_budget_usage, calculate_goal_progress, calculate_monthly_savings,
    calculate_savings_rate, calculate_spending_by_category, calculate_total_income,
    calculate_total_spending, days_until, summarize,
};
pub use config::{InsightThresholds, ThresholdSource};
pub use error::{Error, Result};
pub use insights::{
    generate_ai_insights, AnalysisContext, Insight, InsightEngine, InsightKind, InsightRule,
    Priority, RuleKind,
};
pub use models::{
    BudgetAllocations, BudgetUsage, CategorySpending, FinancialSummary, Goal, Snapshot,
    Transaction, TransactionType, UserProfile,
};
