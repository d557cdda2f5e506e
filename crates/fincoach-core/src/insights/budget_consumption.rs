//! Budget Consumption Insight
//!
//! Compares everything spent in the ledger against the profile's monthly
//! budget and raises an alert or a watch when most of it is gone.

use crate::calculations::{calculate_total_spending, percent_of};

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind, Priority, RuleKind};

/// Rule that flags overall budget consumption
pub struct BudgetConsumptionRule;

impl BudgetConsumptionRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BudgetConsumptionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for BudgetConsumptionRule {
    fn id(&self) -> RuleKind {
        RuleKind::BudgetConsumption
    }

    fn name(&self) -> &'static str {
        "Budget Consumption"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let total_spent = calculate_total_spending(ctx.transactions);
        let spent_percentage = percent_of(total_spent, ctx.profile.monthly_budget);

        let insight = if spent_percentage > ctx.thresholds.budget_alert_percent {
            Insight::new(
                self.id(),
                InsightKind::Warning,
                Priority::High,
                "Budget Alert",
                format!(
                    "You've used {:.0}% of your monthly budget. Consider reducing spending for the rest of the month.",
                    spent_percentage
                ),
            )
        } else if spent_percentage > ctx.thresholds.budget_watch_percent {
            Insight::new(
                self.id(),
                InsightKind::Caution,
                Priority::Medium,
                "Budget Watch",
                format!(
                    "You've used {:.0}% of your monthly budget. Keep an eye on spending.",
                    spent_percentage
                ),
            )
        } else {
            return vec![];
        };

        vec![insight]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, expense, profile};
    use std::collections::BTreeMap;

    fn evaluate(monthly_budget: f64, spent: f64) -> Vec<Insight> {
        let profile = profile(0.0, monthly_budget);
        let transactions = vec![expense("Food", spent)];
        let usage = BTreeMap::new();
        let ctx = AnalysisContext::new(&profile, &transactions, &usage, &[], date(2026, 10, 19));
        BudgetConsumptionRule::new().evaluate(&ctx)
    }

    #[test]
    fn test_budget_alert_above_ninety_percent() {
        let insights = evaluate(1000.0, 950.0);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Budget Alert");
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].priority, Priority::High);
        assert!(insights[0].message.contains("95%"));
    }

    #[test]
    fn test_budget_watch_between_thresholds() {
        let insights = evaluate(1000.0, 800.0);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Budget Watch");
        assert_eq!(insights[0].kind, InsightKind::Caution);
        assert_eq!(insights[0].priority, Priority::Medium);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly 90% is a watch, exactly 75% is nothing
        assert_eq!(evaluate(1000.0, 900.0)[0].title, "Budget Watch");
        assert!(evaluate(1000.0, 750.0).is_empty());
    }

    #[test]
    fn test_no_budget_no_insight() {
        assert!(evaluate(0.0, 5000.0).is_empty());
        assert!(evaluate(-100.0, 5000.0).is_empty());
    }
}
