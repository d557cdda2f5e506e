//! Budget usage command

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use fincoach_core::{calculate_budget_usage, BudgetUsage};

use super::{money, truncate, Inputs};

pub fn cmd_budget(inputs: &Inputs, over_only: bool, json: bool) -> Result<()> {
    let snapshot = &inputs.snapshot;
    let mut usage = calculate_budget_usage(&snapshot.transactions, &snapshot.budgets);
    if over_only {
        usage.retain(|_, u| u.is_over_budget);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&usage)?);
    } else {
        print!("{}", render_budget(&usage)?);
    }
    Ok(())
}

/// Render budget usage as a table
pub fn render_budget(usage: &BTreeMap<String, BudgetUsage>) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "💰 Budget Usage")?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────────")?;

    if usage.is_empty() {
        writeln!(out, "   No budget categories to show.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "   {:20} │ {:>10} │ {:>10} │ {:>11} │ {:>6}",
        "Category", "Spent", "Budget", "Remaining", "%"
    )?;
    writeln!(out, "   ─────────────────────┼────────────┼────────────┼─────────────┼───────")?;

    for (category, u) in usage {
        let marker = if u.is_over_budget { " ⚠" } else { "" };
        writeln!(
            out,
            "   {:20} │ {:>10} │ {:>10} │ {:>11} │ {:>5.0}%{}",
            truncate(category, 20),
            money(u.spent),
            money(u.budget),
            money(u.remaining),
            u.percentage,
            marker
        )?;
    }

    let over = usage.values().filter(|u| u.is_over_budget).count();
    if over > 0 {
        writeln!(out)?;
        writeln!(out, "   {} of {} categories over budget", over, usage.len())?;
    }

    Ok(out)
}
