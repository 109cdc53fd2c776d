//! In-memory transaction ledger
//!
//! Append-only, bounded sequence of transactions with running totals for
//! income and expenses.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Transaction, TransactionId};

/// Running income and expense totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub total_income: Amount,
    pub total_expenses: Amount,
}

impl LedgerTotals {
    /// Income minus expenses
    pub fn net_balance(&self) -> Amount {
        self.total_income - self.total_expenses
    }
}

/// Append-only store of transactions
#[derive(Debug, Clone)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    totals: LedgerTotals,
    max_transactions: usize,
}

impl TransactionLedger {
    /// Create an empty ledger holding at most `max_transactions`
    pub fn new(max_transactions: usize) -> Self {
        Self {
            transactions: Vec::new(),
            totals: LedgerTotals::default(),
            max_transactions,
        }
    }

    /// Append a transaction and update the running totals
    ///
    /// Nothing changes if the ledger is full or the amount is not positive.
    pub fn append(&mut self, transaction: Transaction) -> TrackerResult<TransactionId> {
        if self.is_full() {
            return Err(TrackerError::ledger_full(self.max_transactions));
        }
        if !transaction.amount.is_positive() {
            return Err(TrackerError::InvalidAmount(format!(
                "transaction amount must be positive, got {}",
                transaction.amount.value()
            )));
        }

        if transaction.is_income() {
            self.totals.total_income += transaction.amount;
        } else {
            self.totals.total_expenses += transaction.amount;
        }

        let id = transaction.id;
        self.transactions.push(transaction);

        debug_assert_eq!(self.totals, self.recompute_totals());
        Ok(id)
    }

    fn recompute_totals(&self) -> LedgerTotals {
        LedgerTotals {
            total_income: self
                .transactions
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount)
                .sum(),
            total_expenses: self
                .transactions
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount)
                .sum(),
        }
    }

    /// All transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    pub fn total_income(&self) -> Amount {
        self.totals.total_income
    }

    pub fn total_expenses(&self) -> Amount {
        self.totals.total_expenses
    }

    /// Number of transactions recorded
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Check if another append would be rejected
    pub fn is_full(&self) -> bool {
        self.transactions.len() >= self.max_transactions
    }

    /// Number of appends left before the ledger is full
    pub fn remaining_capacity(&self) -> usize {
        self.max_transactions.saturating_sub(self.transactions.len())
    }

    pub fn capacity(&self) -> usize {
        self.max_transactions
    }
}
