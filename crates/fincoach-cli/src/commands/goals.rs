//! Goal progress command

use std::fmt::Write;

use anyhow::Result;
use chrono::NaiveDate;
use fincoach_core::{calculate_goal_progress, days_until, Goal};

use super::{money, truncate, Inputs};

pub fn cmd_goals(inputs: &Inputs, json: bool) -> Result<()> {
    let goals = &inputs.snapshot.goals;

    if json {
        let rows: Vec<serde_json::Value> = goals
            .iter()
            .map(|goal| {
                serde_json::json!({
                    "goal": goal,
                    "progress": calculate_goal_progress(goal),
                    "days_left": goal.deadline.map(|d| days_until(d, inputs.today)),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_goals(goals, inputs.today)?);
    }
    Ok(())
}

/// Render goal progress with a bar and time remaining
pub fn render_goals(goals: &[Goal], today: NaiveDate) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "🎯 Goals")?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────")?;

    if goals.is_empty() {
        writeln!(out, "   No goals set.")?;
        return Ok(out);
    }

    for goal in goals {
        let progress = calculate_goal_progress(goal);
        let due = match goal.deadline {
            Some(deadline) => {
                let days = days_until(deadline, today);
                if days < 0 {
                    format!("overdue by {} days", -days)
                } else {
                    format!("{} days left", days)
                }
            }
            None => "no deadline".to_string(),
        };

        writeln!(
            out,
            "   {:24} {} {:>5.1}%  {} of {}  ({})",
            truncate(&goal.title, 24),
            progress_bar(progress, 20),
            progress,
            money(goal.current_amount),
            money(goal.target_amount),
            due
        )?;
    }

    Ok(out)
}

/// A fixed-width bar for a percentage in [0, 100]
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
