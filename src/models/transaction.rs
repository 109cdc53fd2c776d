//! Transaction model
//!
//! Transactions are immutable once created. Income is always filed under the
//! sentinel category [`INCOME_CATEGORY`]; expenses name the category they
//! were posted against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::TransactionId;

/// Category name recorded on every income transaction
pub const INCOME_CATEGORY: &str = "Income";

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Always positive; the direction lives in `kind`
    pub amount: Amount,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Category the transaction is filed under
    pub category_name: String,

    /// When the transaction was recorded
    pub timestamp: DateTime<Utc>,

    pub kind: TransactionKind,
}

impl Transaction {
    /// Create an income transaction
    pub fn income(amount: Amount, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            category_name: INCOME_CATEGORY.to_string(),
            timestamp: Utc::now(),
            kind: TransactionKind::Income,
        }
    }

    /// Create an expense transaction against a category
    pub fn expense(
        amount: Amount,
        description: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            category_name: category_name.into(),
            timestamp: Utc::now(),
            kind: TransactionKind::Expense,
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.amount, self.category_name)
    }
}
