//! Insight Engine - runs the registered rules and orders their output

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::InsightThresholds;
use crate::models::{BudgetUsage, Goal, Transaction, UserProfile};

use super::types::{Insight, RuleKind};
use super::{BudgetConsumptionRule, CategoryBudgetRule, GoalProgressRule, SavingsRateRule};

/// Inputs shared by every insight rule
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub profile: &'a UserProfile,
    pub transactions: &'a [Transaction],
    /// Output of `calculate_budget_usage` for the same ledger
    pub budget_usage: &'a BTreeMap<String, BudgetUsage>,
    pub goals: &'a [Goal],
    /// Reference date for goal deadlines
    pub today: NaiveDate,
    pub thresholds: InsightThresholds,
}

impl<'a> AnalysisContext<'a> {
    /// Create a context with default thresholds
    pub fn new(
        profile: &'a UserProfile,
        transactions: &'a [Transaction],
        budget_usage: &'a BTreeMap<String, BudgetUsage>,
        goals: &'a [Goal],
        today: NaiveDate,
    ) -> Self {
        Self {
            profile,
            transactions,
            budget_usage,
            goals,
            today,
            thresholds: InsightThresholds::default(),
        }
    }

    /// Replace the thresholds used by the rules
    pub fn with_thresholds(mut self, thresholds: InsightThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// A rule that inspects the context and produces zero or more insights
pub trait InsightRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule. Rules never fail; missing data yields no insights.
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// The main insight engine that orchestrates rule evaluation
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new insight engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self::empty();

        // Registration order is the tie-break order in the output
        engine.register(Box::new(BudgetConsumptionRule::new()));
        engine.register(Box::new(CategoryBudgetRule::new()));
        engine.register(Box::new(SavingsRateRule::new()));
        engine.register(Box::new(GoalProgressRule::new()));

        engine
    }

    /// Create an engine with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule and return all insights, highest priority first
    ///
    /// The sort is stable: insights of equal priority keep the order in which
    /// their rules were registered and emitted them.
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut all_insights = vec![];

        for rule in &self.rules {
            let insights = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.id().as_str(),
                count = insights.len(),
                "Insight rule evaluated"
            );
            all_insights.extend(insights);
        }

        all_insights.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));

        tracing::debug!(total = all_insights.len(), "Insight analysis complete");
        all_insights
    }

    /// Get list of registered rules
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

/// Evaluate the built-in rules with default thresholds
///
/// `budget_usage` is expected to come from `calculate_budget_usage` over the
/// same `transactions`.
pub fn generate_ai_insights(
    profile: &UserProfile,
    transactions: &[Transaction],
    budget_usage: &BTreeMap<String, BudgetUsage>,
    goals: &[Goal],
    today: NaiveDate,
) -> Vec<Insight> {
    let ctx = AnalysisContext::new(profile, transactions, budget_usage, goals, today);
    InsightEngine::new().analyze_all(&ctx)
}
