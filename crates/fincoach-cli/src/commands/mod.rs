//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `inputs` - Shared input loading (snapshot, reference date, thresholds)
//! - `budget` - Per-category budget usage
//! - `summary` - Totals and category breakdown
//! - `goals` - Goal progress
//! - `insights` - Prioritized insights
//! - `config` - Active insight thresholds

pub mod budget;
pub mod config;
pub mod goals;
pub mod inputs;
pub mod insights;
pub mod summary;

// Re-export command functions for main.rs
pub use budget::*;
pub use config::*;
pub use goals::*;
pub use inputs::*;
pub use insights::*;
pub use summary::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount as dollars, with the sign in front
pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}
