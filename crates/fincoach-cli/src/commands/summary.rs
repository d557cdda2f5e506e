//! Summary command

use std::fmt::Write;

use anyhow::Result;
use fincoach_core::{calculate_spending_by_category, summarize, CategorySpending, FinancialSummary};

use super::{money, truncate, Inputs};

pub fn cmd_summary(inputs: &Inputs, json: bool) -> Result<()> {
    let snapshot = &inputs.snapshot;
    let summary = summarize(&snapshot.profile, &snapshot.transactions);
    let categories = calculate_spending_by_category(&snapshot.transactions);

    if json {
        let value = serde_json::json!({
            "summary": summary,
            "categories": categories,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_summary(&summary, &categories)?);
    }
    Ok(())
}

/// Render totals followed by the spending breakdown
pub fn render_summary(summary: &FinancialSummary, categories: &[CategorySpending]) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "📊 Financial Summary")?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────")?;
    writeln!(out, "   Monthly income:   {:>12}", money(summary.monthly_income))?;
    writeln!(out, "   Monthly budget:   {:>12}", money(summary.monthly_budget))?;
    writeln!(out, "   Income recorded:  {:>12}", money(summary.total_income))?;
    writeln!(out, "   Total spending:   {:>12}", money(summary.total_spending))?;
    writeln!(out, "   Monthly savings:  {:>12}", money(summary.monthly_savings))?;
    writeln!(out, "   Savings rate:     {:>11.1}%", summary.savings_rate)?;
    writeln!(out, "   Budget used:      {:>11.1}%", summary.budget_used_percentage)?;

    if categories.is_empty() {
        writeln!(out)?;
        writeln!(out, "   No spending recorded.")?;
        return Ok(out);
    }

    writeln!(out)?;
    writeln!(
        out,
        "   {:25} │ {:>10} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    )?;
    writeln!(out, "   ──────────────────────────┼────────────┼────────┼───────")?;
    for cat in categories {
        writeln!(
            out,
            "   {:25} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            truncate(&cat.category, 25),
            cat.amount,
            cat.percentage,
            cat.transaction_count
        )?;
    }

    Ok(out)
}
