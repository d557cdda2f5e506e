//! Integration tests for fincoach-core
//!
//! These tests exercise the full snapshot → budget usage → insights workflow.

use chrono::NaiveDate;
use fincoach_core::{
    calculate_budget_usage, calculate_goal_progress, calculate_total_spending,
    generate_ai_insights, summarize, AnalysisContext, InsightEngine, InsightKind,
    InsightThresholds, Priority, RuleKind, Snapshot,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// A month of household data as the data layer would export it
fn household_snapshot() -> &'static str {
    r#"{
        "profile": { "monthly_income": 5200, "monthly_budget": 3500 },
        "transactions": [
            { "id": "1", "type": "income", "amount": 5200, "date": "2026-10-01", "description": "Payroll" },
            { "id": "2", "type": "expense", "amount": 1800, "category": "Rent", "date": "2026-10-01" },
            { "id": "3", "type": "expense", "amount": -210.40, "category": "Groceries", "date": "2026-10-04" },
            { "id": "4", "type": "expense", "amount": 96.15, "category": "Groceries", "date": "2026-10-11" },
            { "id": "5", "type": "expense", "amount": 64.00, "category": "Transport", "date": "2026-10-06" },
            { "id": "6", "type": "expense", "amount": 185.00, "category": "Dining", "date": "2026-10-09" },
            { "id": "7", "type": "expense", "amount": 430.00, "category": "Electronics", "date": "2026-10-12" },
            { "id": "8", "type": "expense", "amount": 12.99, "date": "2026-10-14" }
        ],
        "budgets": { "Rent": 1800, "Groceries": 450, "Transport": 150, "Dining": 150, "Utilities": 200 },
        "goals": [
            { "id": "g1", "title": "Vacation", "target_amount": 2000, "current_amount": 400, "deadline": "2026-11-05" },
            { "id": "g2", "title": "New Tires", "target_amount": 600, "current_amount": 650, "deadline": "2026-12-01" },
            { "id": "g3", "title": "House Deposit", "target_amount": 40000, "current_amount": 9000, "deadline": "2029-01-01" }
        ]
    }"#
}

#[test]
fn test_full_insight_workflow() {
    let snapshot = Snapshot::from_json(household_snapshot()).expect("Failed to parse snapshot");
    assert_eq!(snapshot.transactions.len(), 8);

    let usage = calculate_budget_usage(&snapshot.transactions, &snapshot.budgets);
    assert_eq!(usage.len(), 5);
    assert_eq!(usage["Utilities"].spent, 0.0);
    assert!((usage["Groceries"].spent - 306.55).abs() < 1e-9);
    assert!(usage["Dining"].is_over_budget);
    assert!(!usage.contains_key("Electronics"));

    let insights = generate_ai_insights(
        &snapshot.profile,
        &snapshot.transactions,
        &usage,
        &snapshot.goals,
        today(),
    );

    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Dining Over Budget",
            "Budget Watch",
            "Rent Budget Alert",
            "Goal Behind Schedule",
            "Great Savings Rate",
            "Goal Achieved!",
        ]
    );

    // Overall spending is 2798.54 of 3500 (~80%); a higher watch level silences it
    let ctx = AnalysisContext::new(
        &snapshot.profile,
        &snapshot.transactions,
        &usage,
        &snapshot.goals,
        today(),
    )
    .with_thresholds(InsightThresholds {
        budget_watch_percent: 85.0,
        ..InsightThresholds::default()
    });
    let relaxed = InsightEngine::new().analyze_all(&ctx);
    assert_eq!(relaxed.len(), insights.len() - 1);
    assert!(!relaxed
        .iter()
        .any(|i| i.rule == RuleKind::BudgetConsumption));
}

#[test]
fn test_summary_matches_insight_inputs() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();

    let summary = summarize(&snapshot.profile, &snapshot.transactions);

    assert_eq!(summary.total_income, 5200.0);
    assert!((summary.total_spending - 2798.54).abs() < 1e-9);
    assert!((summary.monthly_savings - 2401.46).abs() < 1e-9);
    assert!(summary.savings_rate > 46.0 && summary.savings_rate < 46.2);
    assert_eq!(
        summary.total_spending,
        calculate_total_spending(&snapshot.transactions)
    );
}

#[test]
fn test_budget_usage_keys_always_match_allocations() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();

    let ledgers = [
        vec![],
        snapshot.transactions.clone(),
        snapshot.transactions[..3].to_vec(),
    ];

    for ledger in &ledgers {
        let usage = calculate_budget_usage(ledger, &snapshot.budgets);
        let usage_keys: Vec<&String> = usage.keys().collect();
        let budget_keys: Vec<&String> = snapshot.budgets.keys().collect();
        assert_eq!(usage_keys, budget_keys);

        for entry in usage.values() {
            assert!(entry.spent >= 0.0);
            if entry.budget == 0.0 {
                assert_eq!(entry.percentage, 0.0);
            }
        }
    }
}

#[test]
fn test_outputs_are_deterministic() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();

    let run = || {
        let usage = calculate_budget_usage(&snapshot.transactions, &snapshot.budgets);
        let insights = generate_ai_insights(
            &snapshot.profile,
            &snapshot.transactions,
            &usage,
            &snapshot.goals,
            today(),
        );
        (usage, insights)
    };

    assert_eq!(run(), run());
}

#[test]
fn test_goal_progress_always_within_bounds() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();

    for goal in &snapshot.goals {
        let progress = calculate_goal_progress(goal);
        assert!((0.0..=100.0).contains(&progress), "{} out of range", progress);
    }
}

#[test]
fn test_insight_priorities_never_increase() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();
    let usage = calculate_budget_usage(&snapshot.transactions, &snapshot.budgets);

    // Tight thresholds so that every rule fires
    let ctx = AnalysisContext::new(
        &snapshot.profile,
        &snapshot.transactions,
        &usage,
        &snapshot.goals,
        today(),
    )
    .with_thresholds(InsightThresholds {
        budget_alert_percent: 50.0,
        budget_watch_percent: 40.0,
        category_alert_percent: 10.0,
        ..InsightThresholds::default()
    });
    let insights = InsightEngine::new().analyze_all(&ctx);

    assert!(insights.len() >= 6);
    for pair in insights.windows(2) {
        assert!(pair[0].priority.weight() >= pair[1].priority.weight());
    }
    assert_eq!(insights[0].priority, Priority::High);
    assert_eq!(insights.last().unwrap().kind, InsightKind::Success);
}

#[test]
fn test_insights_serialize_for_presentation() {
    let snapshot = Snapshot::from_json(household_snapshot()).unwrap();
    let usage = calculate_budget_usage(&snapshot.transactions, &snapshot.budgets);
    let insights = generate_ai_insights(
        &snapshot.profile,
        &snapshot.transactions,
        &usage,
        &snapshot.goals,
        today(),
    );

    let json = serde_json::to_value(&insights).unwrap();
    assert_eq!(json[0]["type"], "warning");
    assert_eq!(json[0]["priority"], "high");
    assert_eq!(json[0]["title"], "Dining Over Budget");
}
