//! Storage layer for the budget tracker
//!
//! In-memory, bounded containers for categories, transactions and
//! notifications. Each is owned exclusively by one engine for the lifetime
//! of a session; nothing here is written to disk.

pub mod categories;
pub mod notifications;
pub mod transactions;

pub use categories::CategoryStore;
pub use notifications::NotificationLog;
pub use transactions::{LedgerTotals, TransactionLedger};
