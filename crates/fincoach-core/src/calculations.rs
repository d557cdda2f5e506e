//! Budget and ledger calculations
//!
//! Stateless aggregations over an already-fetched ledger. None of these fail:
//! zero or negative denominators yield 0 instead of an error, and empty
//! inputs yield zero totals.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{
    BudgetAllocations, BudgetUsage, CategorySpending, FinancialSummary, Goal, Transaction,
    UserProfile,
};

/// Label for expenses recorded without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// `part / whole * 100`, or 0 when `whole` is not positive
pub(crate) fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Compare spending against each budget allocation
///
/// The result has exactly the keys of `budget_allocations`. Expenses in
/// categories without an allocation are not reported.
pub fn calculate_budget_usage(
    transactions: &[Transaction],
    budget_allocations: &BudgetAllocations,
) -> BTreeMap<String, BudgetUsage> {
    let mut spending: HashMap<&str, f64> = budget_allocations
        .keys()
        .map(|category| (category.as_str(), 0.0))
        .collect();

    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        if let Some(category) = tx.category.as_deref() {
            *spending.entry(category).or_insert(0.0) += tx.amount.abs();
        }
    }

    budget_allocations
        .iter()
        .map(|(category, &budget)| {
            if budget < 0.0 {
                tracing::warn!(category = %category, budget, "Negative budget allocation");
            }

            let spent = spending.get(category.as_str()).copied().unwrap_or(0.0);
            let usage = BudgetUsage {
                spent,
                budget,
                remaining: budget - spent,
                percentage: percent_of(spent, budget),
                is_over_budget: spent > budget,
            };
            (category.clone(), usage)
        })
        .collect()
}

/// Sum of absolute expense amounts
pub fn calculate_total_spending(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_expense())
        .map(|tx| tx.amount.abs())
        .sum()
}

/// Sum of income amounts
pub fn calculate_total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_income())
        .map(|tx| tx.amount)
        .sum()
}

/// Income left after expenses (may be negative)
pub fn calculate_monthly_savings(monthly_income: f64, total_expenses: f64) -> f64 {
    monthly_income - total_expenses
}

/// Share of income saved, or 0 without positive income
pub fn calculate_savings_rate(monthly_income: f64, monthly_savings: f64) -> f64 {
    percent_of(monthly_savings, monthly_income)
}

/// Percent of the goal's target reached, clamped to [0, 100]
pub fn calculate_goal_progress(goal: &Goal) -> f64 {
    if goal.target_amount > 0.0 {
        (goal.current_amount / goal.target_amount * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Whole days from `today` until `deadline`; negative once overdue
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Expense totals for every category in the ledger, largest first
pub fn calculate_spending_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        let category = tx.category.as_deref().unwrap_or(UNCATEGORIZED);
        let entry = totals.entry(category).or_insert((0.0, 0));
        entry.0 += tx.amount.abs();
        entry.1 += 1;
    }

    let total: f64 = totals.values().map(|(amount, _)| amount).sum();

    let mut categories: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategorySpending {
            category: category.to_string(),
            amount,
            transaction_count: count,
            percentage: percent_of(amount, total),
        })
        .collect();

    categories.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    categories
}

/// Aggregate totals for a profile and its ledger
pub fn summarize(profile: &UserProfile, transactions: &[Transaction]) -> FinancialSummary {
    let total_spending = calculate_total_spending(transactions);
    let monthly_savings = calculate_monthly_savings(profile.monthly_income, total_spending);

    FinancialSummary {
        total_income: calculate_total_income(transactions),
        total_spending,
        monthly_income: profile.monthly_income,
        monthly_budget: profile.monthly_budget,
        monthly_savings,
        savings_rate: calculate_savings_rate(profile.monthly_income, monthly_savings),
        budget_used_percentage: percent_of(total_spending, profile.monthly_budget),
    }
}
