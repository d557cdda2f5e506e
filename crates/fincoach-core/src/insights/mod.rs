//! Insight Engine - Rule-based Financial Insights
//!
//! The Insight Engine turns budget usage, the ledger, the user's profile and
//! their goals into short advisory messages. Despite the "AI" in
//! `generate_ai_insights`, every insight comes from a fixed rule; nothing is
//! learned or persisted.
//!
//! ## Built-in Rules
//!
//! - **Budget Consumption** - Overall spending against the monthly budget
//! - **Category Budget** - Categories over or close to their allocation
//! - **Savings Rate** - Share of income left after spending
//! - **Goal Progress** - Reached goals and goals falling behind
//!
//! Output is sorted by priority (high first). Insights of equal priority keep
//! the order of the rules above.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fincoach_core::insights::{AnalysisContext, InsightEngine};
//!
//! let usage = calculate_budget_usage(&transactions, &budgets);
//! let ctx = AnalysisContext::new(&profile, &transactions, &usage, &goals, today)
//!     .with_thresholds(thresholds);
//! let insights = InsightEngine::new().analyze_all(&ctx);
//! ```

pub mod budget_consumption;
pub mod category_budget;
pub mod engine;
pub mod goal_progress;
pub mod savings_rate;
pub mod types;

pub use budget_consumption::BudgetConsumptionRule;
pub use category_budget::CategoryBudgetRule;
pub use engine::{generate_ai_insights, AnalysisContext, InsightEngine, InsightRule};
pub use goal_progress::GoalProgressRule;
pub use savings_rate::SavingsRateRule;
pub use types::{Insight, InsightKind, Priority, RuleKind};
