//! Display formatting for terminal output
//!
//! Provides utilities for formatting session data for terminal display.

pub mod category;
pub mod notification;
pub mod transaction;

pub use category::{format_category_list, format_category_menu, format_limit};
pub use notification::format_notification_list;
pub use transaction::{format_totals, format_transaction_register};

/// Truncate a string for column display, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
