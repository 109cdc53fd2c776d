//! Service layer for the budget tracker
//!
//! The service layer provides the bookkeeping logic on top of the in-memory
//! storage containers.

pub mod engine;

pub use engine::{BudgetEngine, ExpenseOutcome, INITIALIZED_MESSAGE};
