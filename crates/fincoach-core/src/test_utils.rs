//! Test fixture builders
//!
//! Available to this crate's tests and, with the `test-utils` feature, to
//! downstream crates.
//!
//! ```rust,ignore
//! use fincoach_core::test_utils::{allocations, expense, income};
//!
//! let budgets = allocations(&[("Food", 300.0)]);
//! let ledger = vec![income(2500.0), expense("Food", 42.0)];
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;

use crate::models::{BudgetAllocations, Goal, Snapshot, Transaction, TransactionType, UserProfile};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> String {
    format!("{}_{}", prefix, NEXT_ID.fetch_add(1, Ordering::SeqCst))
}

/// Build a calendar date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// An expense in `category` dated at the start of October 2026
pub fn expense(category: &str, amount: f64) -> Transaction {
    Transaction {
        id: next_id("tx"),
        kind: TransactionType::Expense,
        amount,
        category: Some(category.to_string()),
        date: date(2026, 10, 1),
        description: None,
    }
}

/// An uncategorized income transaction
pub fn income(amount: f64) -> Transaction {
    Transaction {
        id: next_id("tx"),
        kind: TransactionType::Income,
        amount,
        category: None,
        date: date(2026, 10, 1),
        description: Some("Salary".to_string()),
    }
}

/// A goal with the given target, saved amount and optional deadline
pub fn goal(target_amount: f64, current_amount: f64, deadline: Option<NaiveDate>) -> Goal {
    Goal {
        id: Some(next_id("goal")),
        title: "Emergency Fund".to_string(),
        target_amount,
        current_amount,
        deadline,
        category: Some("Savings".to_string()),
    }
}

/// Budget allocations from `(category, amount)` pairs
pub fn allocations(pairs: &[(&str, f64)]) -> BudgetAllocations {
    pairs
        .iter()
        .map(|(category, amount)| (category.to_string(), *amount))
        .collect()
}

/// A profile with the given income and budget
pub fn profile(monthly_income: f64, monthly_budget: f64) -> UserProfile {
    UserProfile {
        monthly_income,
        monthly_budget,
    }
}

/// A small but complete snapshot: one overspent category, one nearly full,
/// a low savings rate and a goal that is both close and behind
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        profile: profile(3000.0, 2000.0),
        transactions: vec![
            income(3000.0),
            expense("Rent", 1500.0),
            expense("Food", 520.0),
            expense("Transport", 170.0),
            expense("Shopping", 600.0),
        ],
        budgets: allocations(&[("Rent", 1500.0), ("Food", 400.0), ("Transport", 200.0)]),
        goals: vec![
            goal(1000.0, 300.0, Some(date(2026, 10, 29))),
            Goal {
                id: Some(next_id("goal")),
                title: "Laptop".to_string(),
                target_amount: 1200.0,
                current_amount: 1200.0,
                deadline: Some(date(2027, 3, 1)),
                category: None,
            },
        ],
    }
}
