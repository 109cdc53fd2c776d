//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::SessionExport;
use crate::services::BudgetEngine;

/// Export the session to YAML
pub fn export_session_yaml<W: Write>(engine: &BudgetEngine, writer: &mut W) -> TrackerResult<()> {
    let export = SessionExport::from_engine(engine);

    writeln!(writer, "# Budget tracker session export")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Amount;

    #[test]
    fn test_yaml_export() {
        let mut engine = BudgetEngine::new(Settings::default()).unwrap();
        let food = engine.category_index("Food").unwrap();
        engine
            .record_expense(food, Amount::new(9.99), "pizza")
            .unwrap();

        let mut buffer = Vec::new();
        export_session_yaml(&engine, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# Budget tracker session export"));
        assert!(output.contains("pizza"));

        let parsed: SessionExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.transactions.len(), 1);
        assert_eq!(parsed.transactions[0].category_name, "Food");
    }
}
