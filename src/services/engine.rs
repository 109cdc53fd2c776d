//! Budget engine
//!
//! Orchestrates the category store, transaction ledger and notification log.
//! Every operation validates its input before touching any container, so a
//! rejected call leaves the session exactly as it was.

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{truncate_chars, Amount, Category, Notification, Transaction, TransactionId};
use crate::storage::{CategoryStore, LedgerTotals, NotificationLog, TransactionLedger};

/// Message pushed when a new engine is created
pub const INITIALIZED_MESSAGE: &str = "Tracker initialized with default categories.";

/// Result of a successfully recorded expense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseOutcome {
    /// ID of the new transaction
    pub id: TransactionId,
    /// Whether the expense left its category above a positive limit
    pub budget_exceeded: bool,
}

/// The bookkeeping engine for one session
#[derive(Debug, Clone)]
pub struct BudgetEngine {
    categories: CategoryStore,
    ledger: TransactionLedger,
    notifications: NotificationLog,
    settings: Settings,
}

impl BudgetEngine {
    /// Create an engine with the default categories
    pub fn new(settings: Settings) -> TrackerResult<Self> {
        settings.validate()?;

        let mut categories = CategoryStore::new(settings.max_categories, settings.max_name_length);
        categories.initialize_defaults()?;

        let mut notifications =
            NotificationLog::new(settings.max_notifications, settings.max_message_length);
        notifications.push(INITIALIZED_MESSAGE);

        Ok(Self {
            categories,
            ledger: TransactionLedger::new(settings.max_transactions),
            notifications,
            settings,
        })
    }

    /// Settings the engine was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Record an income transaction
    pub fn record_income(
        &mut self,
        amount: Amount,
        description: &str,
    ) -> TrackerResult<TransactionId> {
        ensure_positive(amount)?;

        let description = truncate_chars(description, self.settings.max_description_length);
        let id = self
            .ledger
            .append(Transaction::income(amount, description))
            .inspect_err(|e| warn!(error = %e, "Income rejected"))?;

        info!(%id, amount = amount.value(), "Income recorded");
        Ok(id)
    }

    /// Record an expense against the category at `category_index`
    ///
    /// Pushes a notification every time the expense leaves the category above
    /// its positive limit.
    pub fn record_expense(
        &mut self,
        category_index: usize,
        amount: Amount,
        description: &str,
    ) -> TrackerResult<ExpenseOutcome> {
        ensure_positive(amount)?;
        let category_name = self.categories.check_index(category_index)?.name.clone();

        if self.ledger.is_full() {
            let err = TrackerError::ledger_full(self.ledger.capacity());
            warn!(error = %err, "Expense rejected");
            return Err(err);
        }

        let budget_exceeded = self.categories.record_expense(category_index, amount)?;
        if budget_exceeded {
            let message = budget_exceeded_message(
                &self.categories.list()[category_index],
                &self.settings.currency_symbol,
            );
            warn!(category = %category_name, "{}", message);
            self.notifications.push(message);
        }

        let description = truncate_chars(description, self.settings.max_description_length);
        let id = self
            .ledger
            .append(Transaction::expense(amount, description, category_name.as_str()))?;

        info!(%id, category = %category_name, amount = amount.value(), "Expense recorded");
        Ok(ExpenseOutcome {
            id,
            budget_exceeded,
        })
    }

    /// Replace a category's budget limit (0 removes the limit)
    pub fn set_category_limit(
        &mut self,
        category_index: usize,
        limit: Amount,
    ) -> TrackerResult<()> {
        self.categories.set_limit(category_index, limit)?;
        info!(
            category = %self.categories.list()[category_index].name,
            limit = limit.value(),
            "Budget limit updated"
        );
        Ok(())
    }

    /// Index of a category by name (case-insensitive)
    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.find_by_name(name)
    }

    /// Get a category by index
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// All transactions in the order they were recorded
    pub fn list_transactions(&self) -> &[Transaction] {
        self.ledger.list()
    }

    /// All categories in display order
    pub fn list_categories(&self) -> &[Category] {
        self.categories.list()
    }

    /// Notifications oldest-first
    pub fn list_notifications(&self) -> impl ExactSizeIterator<Item = &Notification> + '_ {
        self.notifications.list()
    }

    /// Running income and expense totals
    pub fn totals(&self) -> LedgerTotals {
        self.ledger.totals()
    }

    /// Number of transactions that can still be recorded
    pub fn remaining_transaction_capacity(&self) -> usize {
        self.ledger.remaining_capacity()
    }
}

fn budget_exceeded_message(category: &Category, symbol: &str) -> String {
    format!(
        "Exceeded budget for {}: spent {} of {} limit",
        category.name,
        category.current_spent.format_with_symbol(symbol),
        category.budget_limit.format_with_symbol(symbol)
    )
}

fn ensure_positive(amount: Amount) -> TrackerResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(TrackerError::InvalidAmount(format!(
            "amount must be a positive number, got {}",
            amount.value()
        )))
    }
}
