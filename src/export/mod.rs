//! Export module for the budget tracker
//!
//! Writes the current session out in several formats:
//! - CSV: the transaction register (spreadsheet-compatible)
//! - JSON: full session snapshot, machine-readable
//! - YAML: full session snapshot, human-readable
//!
//! Exports are output only; nothing reads them back in.

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_session_json, SessionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_session_yaml;

use crate::error::{TrackerError, TrackerResult};
use crate::services::BudgetEngine;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(TrackerError::Validation(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export the session in the given format
pub fn export_session<W: Write>(
    engine: &BudgetEngine,
    format: ExportFormat,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(engine.list_transactions(), writer),
        ExportFormat::Json => export_session_json(engine, writer),
        ExportFormat::Yaml => export_session_yaml(engine, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/session.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_path(Path::new("session")), None);
    }
}
