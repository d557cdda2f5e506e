//! Goal Progress Insight
//!
//! Celebrates reached goals and warns about goals that are due soon with too
//! little saved. Overdue goals fall under the same warning.

use crate::calculations::{calculate_goal_progress, days_until};

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind, Priority, RuleKind};

/// Rule that tracks savings goals
pub struct GoalProgressRule;

impl GoalProgressRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoalProgressRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for GoalProgressRule {
    fn id(&self) -> RuleKind {
        RuleKind::GoalProgress
    }

    fn name(&self) -> &'static str {
        "Goal Progress"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut insights = Vec::new();

        for goal in ctx.goals {
            let progress = calculate_goal_progress(goal);

            if progress >= 100.0 {
                insights.push(Insight::new(
                    self.id(),
                    InsightKind::Success,
                    Priority::Low,
                    "Goal Achieved!",
                    format!("Congratulations! You've reached your \"{}\" goal.", goal.title),
                ));
                continue;
            }

            let Some(deadline) = goal.deadline else {
                continue;
            };
            let days_left = days_until(deadline, ctx.today);

            if days_left < ctx.thresholds.goal_deadline_window_days
                && progress < ctx.thresholds.goal_behind_progress_percent
            {
                let timing = if days_left >= 0 {
                    format!("{} days left", days_left)
                } else {
                    format!("{} days past the deadline", -days_left)
                };
                insights.push(Insight::new(
                    self.id(),
                    InsightKind::Warning,
                    Priority::Medium,
                    "Goal Behind Schedule",
                    format!(
                        "\"{}\" is {:.0}% funded with {}.",
                        goal.title, progress, timing
                    ),
                ));
            }
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, UserProfile};
    use crate::test_utils::{date, goal};
    use std::collections::BTreeMap;

    fn evaluate(goals: &[Goal]) -> Vec<Insight> {
        let profile = UserProfile::default();
        let usage = BTreeMap::new();
        let ctx = AnalysisContext::new(&profile, &[], &usage, goals, date(2026, 10, 19));
        GoalProgressRule::new().evaluate(&ctx)
    }

    #[test]
    fn test_goal_achieved() {
        let insights = evaluate(&[goal(500.0, 600.0, Some(date(2026, 10, 25)))]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Goal Achieved!");
        assert_eq!(insights[0].kind, InsightKind::Success);
        assert_eq!(insights[0].priority, Priority::Low);
    }

    #[test]
    fn test_goal_behind_schedule() {
        let insights = evaluate(&[goal(1000.0, 500.0, Some(date(2026, 10, 29)))]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Goal Behind Schedule");
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].priority, Priority::Medium);
        assert!(insights[0].message.contains("10 days left"));
    }

    #[test]
    fn test_overdue_goal_uses_same_warning() {
        let insights = evaluate(&[goal(1000.0, 100.0, Some(date(2026, 10, 1)))]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Goal Behind Schedule");
        assert!(insights[0].message.contains("18 days past the deadline"));
    }

    #[test]
    fn test_distant_or_on_track_goals_are_silent() {
        let insights = evaluate(&[
            goal(1000.0, 100.0, Some(date(2027, 6, 1))),
            goal(1000.0, 850.0, Some(date(2026, 10, 22))),
            goal(1000.0, 100.0, None),
            goal(0.0, 0.0, None),
        ]);

        assert!(insights.is_empty());
    }

    #[test]
    fn test_window_boundary() {
        // 30 days out is outside the window, 29 is inside
        assert!(evaluate(&[goal(1000.0, 0.0, Some(date(2026, 11, 18)))]).is_empty());
        assert_eq!(
            evaluate(&[goal(1000.0, 0.0, Some(date(2026, 11, 17)))]).len(),
            1
        );
    }

    #[test]
    fn test_each_goal_contributes() {
        let insights = evaluate(&[
            goal(100.0, 100.0, None),
            goal(1000.0, 10.0, Some(date(2026, 10, 20))),
            goal(200.0, 250.0, None),
        ]);

        let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Goal Achieved!", "Goal Behind Schedule", "Goal Achieved!"]
        );
    }
}
