//! CSV Export functionality
//!
//! Exports the transaction register in a spreadsheet-compatible form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 6] = ["ID", "Timestamp", "Type", "Category", "Amount", "Description"];

/// Export transactions to CSV, oldest first
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.timestamp.to_rfc3339(),
                txn.kind.to_string(),
                txn.category_name.clone(),
                format!("{:.2}", txn.amount.value()),
                txn.description.clone(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
