//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the tracker using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// A non-positive or non-finite amount where a positive amount is required
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Category index outside the category store
    #[error("Invalid category: index {index} is out of range (0..{count})")]
    InvalidCategory { index: usize, count: usize },

    /// A bounded store is full
    #[error("{store} capacity exceeded (max {max})")]
    CapacityExceeded { store: &'static str, max: usize },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "capacity exceeded" error for the transaction ledger
    pub fn ledger_full(max: usize) -> Self {
        Self::CapacityExceeded {
            store: "Transaction",
            max,
        }
    }

    /// Create a "capacity exceeded" error for the category store
    pub fn categories_full(max: usize) -> Self {
        Self::CapacityExceeded {
            store: "Category",
            max,
        }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is an invalid category error
    pub fn is_invalid_category(&self) -> bool {
        matches!(self, Self::InvalidCategory { .. })
    }

    /// Check if this is a capacity error
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
