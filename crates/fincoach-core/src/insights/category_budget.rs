//! Category Budget Insight
//!
//! Walks the per-category budget usage and reports categories that are over
//! budget or close to it.

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind, Priority, RuleKind};

/// Rule that flags individual budget categories
pub struct CategoryBudgetRule;

impl CategoryBudgetRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CategoryBudgetRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for CategoryBudgetRule {
    fn id(&self) -> RuleKind {
        RuleKind::CategoryBudget
    }

    fn name(&self) -> &'static str {
        "Category Budget"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut insights = Vec::new();

        for (category, usage) in ctx.budget_usage {
            if usage.is_over_budget {
                insights.push(Insight::new(
                    self.id(),
                    InsightKind::Warning,
                    Priority::High,
                    format!("{} Over Budget", category),
                    format!(
                        "You've exceeded your {} budget by ${:.2}",
                        category,
                        usage.spent - usage.budget
                    ),
                ));
            } else if usage.percentage > ctx.thresholds.category_alert_percent {
                insights.push(Insight::new(
                    self.id(),
                    InsightKind::Caution,
                    Priority::Medium,
                    format!("{} Budget Alert", category),
                    format!(
                        "You've used {:.0}% of your {} budget, ${:.2} left",
                        usage.percentage, category, usage.remaining
                    ),
                ));
            }
        }

        insights
    }
}
