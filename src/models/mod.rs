//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the tracker's
//! domain: amounts, categories, transactions and notifications.

pub mod amount;
pub mod category;
pub mod ids;
pub mod notification;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use category::{Category, CategoryValidationError, DefaultCategory};
pub use ids::TransactionId;
pub use notification::Notification;
pub use transaction::{Transaction, TransactionKind, INCOME_CATEGORY};

/// Cut `text` down to at most `max_chars` characters, on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
