//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Capacity bounds and display preferences

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
