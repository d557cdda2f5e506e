//! Insights command

use std::fmt::Write;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use fincoach_core::{
    calculate_budget_usage, AnalysisContext, Insight, InsightEngine, InsightKind, RuleKind,
};

use super::Inputs;

pub fn cmd_insights(
    inputs: &Inputs,
    rule: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let insights = collect_insights(inputs, rule, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        print!("{}", render_insights(&insights)?);
    }
    Ok(())
}

/// Run the engine over the inputs, then apply the rule filter and limit
pub fn collect_insights(
    inputs: &Inputs,
    rule: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Insight>> {
    let rule = rule
        .map(|r| RuleKind::from_str(r).map_err(|e| anyhow!(e)))
        .transpose()?;

    let snapshot = &inputs.snapshot;
    let usage = calculate_budget_usage(&snapshot.transactions, &snapshot.budgets);
    let ctx = AnalysisContext::new(
        &snapshot.profile,
        &snapshot.transactions,
        &usage,
        &snapshot.goals,
        inputs.today,
    )
    .with_thresholds(inputs.thresholds);

    let mut insights = InsightEngine::new().analyze_all(&ctx);

    if let Some(rule) = rule {
        insights.retain(|i| i.rule == rule);
    }
    if let Some(limit) = limit {
        insights.truncate(limit);
    }

    Ok(insights)
}

/// Render insights, highest priority first
pub fn render_insights(insights: &[Insight]) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "💡 Insights")?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────")?;

    if insights.is_empty() {
        writeln!(out, "   Nothing to report. Spending, savings and goals look steady.")?;
        return Ok(out);
    }

    for insight in insights {
        let icon = match insight.kind {
            InsightKind::Success => "✅",
            InsightKind::Warning => "🚨",
            InsightKind::Caution => "⚠️ ",
        };
        writeln!(
            out,
            "   {} {} [{}]",
            icon, insight.title, insight.priority
        )?;
        writeln!(out, "      {}", insight.message)?;
    }

    Ok(out)
}
