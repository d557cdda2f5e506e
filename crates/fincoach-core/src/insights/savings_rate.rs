//! Savings Rate Insight
//!
//! Savings are the profile's monthly income minus everything spent in the
//! ledger. A high rate earns praise, a low one a warning.

use crate::calculations::{
    calculate_monthly_savings, calculate_savings_rate, calculate_total_spending,
};

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind, Priority, RuleKind};

/// Rule that grades the share of income saved
pub struct SavingsRateRule;

impl SavingsRateRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsRateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SavingsRateRule {
    fn id(&self) -> RuleKind {
        RuleKind::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let monthly_income = ctx.profile.monthly_income;
        let monthly_savings =
            calculate_monthly_savings(monthly_income, calculate_total_spending(ctx.transactions));
        let savings_rate = calculate_savings_rate(monthly_income, monthly_savings);

        if savings_rate > ctx.thresholds.great_savings_rate_percent {
            vec![Insight::new(
                self.id(),
                InsightKind::Success,
                Priority::Low,
                "Great Savings Rate",
                format!(
                    "You're saving {:.0}% of your income. Keep up the good work!",
                    savings_rate
                ),
            )]
        } else if savings_rate < ctx.thresholds.low_savings_rate_percent && monthly_income > 0.0 {
            vec![Insight::new(
                self.id(),
                InsightKind::Warning,
                Priority::High,
                "Low Savings Rate",
                format!(
                    "You're saving {:.0}% of your income. Try to save at least {:.0}%.",
                    savings_rate, ctx.thresholds.low_savings_rate_percent
                ),
            )]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, expense, profile};
    use std::collections::BTreeMap;

    fn evaluate(monthly_income: f64, spent: f64) -> Vec<Insight> {
        let profile = profile(monthly_income, 0.0);
        let transactions = vec![expense("Rent", spent)];
        let usage = BTreeMap::new();
        let ctx = AnalysisContext::new(&profile, &transactions, &usage, &[], date(2026, 10, 19));
        SavingsRateRule::new().evaluate(&ctx)
    }

    #[test]
    fn test_low_savings_rate() {
        let insights = evaluate(1000.0, 950.0);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Low Savings Rate");
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].priority, Priority::High);
        assert!(insights[0].message.contains("5%"));
    }

    #[test]
    fn test_great_savings_rate() {
        let insights = evaluate(1000.0, 700.0);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Great Savings Rate");
        assert_eq!(insights[0].kind, InsightKind::Success);
        assert_eq!(insights[0].priority, Priority::Low);
    }

    #[test]
    fn test_middle_band_is_silent() {
        assert!(evaluate(1000.0, 850.0).is_empty());
        assert!(evaluate(1000.0, 800.0).is_empty());
        assert!(evaluate(1000.0, 900.0).is_empty());
    }

    #[test]
    fn test_overspending_is_low_rate() {
        let insights = evaluate(1000.0, 1500.0);
        assert_eq!(insights[0].title, "Low Savings Rate");
    }

    #[test]
    fn test_no_income_no_insight() {
        assert!(evaluate(0.0, 300.0).is_empty());
    }
}
