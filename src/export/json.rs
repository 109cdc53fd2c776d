//! JSON Export functionality
//!
//! Dumps a snapshot of the current session to JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Notification, Transaction};
use crate::services::BudgetEngine;
use crate::storage::LedgerTotals;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub totals: LedgerTotals,

    pub categories: Vec<Category>,

    pub transactions: Vec<Transaction>,

    pub notifications: Vec<Notification>,
}

impl SessionExport {
    /// Capture the engine's current state
    pub fn from_engine(engine: &BudgetEngine) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            totals: engine.totals(),
            categories: engine.list_categories().to_vec(),
            transactions: engine.list_transactions().to_vec(),
            notifications: engine.list_notifications().cloned().collect(),
        }
    }
}

/// Export the session to pretty-printed JSON
pub fn export_session_json<W: Write>(engine: &BudgetEngine, writer: &mut W) -> TrackerResult<()> {
    let export = SessionExport::from_engine(engine);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Amount;

    #[test]
    fn test_json_export() {
        let mut engine = BudgetEngine::new(Settings::default()).unwrap();
        engine.record_income(Amount::new(250.0), "gift").unwrap();

        let mut buffer = Vec::new();
        export_session_json(&engine, &mut buffer).unwrap();

        let parsed: SessionExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions.len(), 1);
        assert_eq!(parsed.transactions[0].description, "gift");
        assert_eq!(parsed.categories.len(), 8);
        assert_eq!(parsed.notifications.len(), 1);
        assert_eq!(parsed.totals.total_income, Amount::new(250.0));
    }
}
