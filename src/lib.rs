//! Budget tracker - in-memory personal finance tracking
//!
//! This library records income and expense transactions, keeps per-category
//! budget limits with running spend totals, and raises notifications when a
//! category goes over its limit. All data lives for one session only.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, categories, transactions, notifications)
//! - `storage`: Bounded in-memory containers
//! - `services`: The budget engine
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export of a session
//! - `cli`: Validated input and the interactive menu
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::config::Settings;
//! use budget_tracker::models::Amount;
//! use budget_tracker::services::BudgetEngine;
//!
//! let mut engine = BudgetEngine::new(Settings::default()).unwrap();
//! engine.record_income(Amount::new(1000.0), "salary").unwrap();
//!
//! let food = engine.category_index("Food").unwrap();
//! engine.set_category_limit(food, Amount::new(100.0)).unwrap();
//! let outcome = engine.record_expense(food, Amount::new(120.0), "groceries").unwrap();
//! assert!(outcome.budget_exceeded);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
