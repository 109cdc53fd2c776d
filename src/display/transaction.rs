//! Transaction display formatting
//!
//! Renders the transaction register and the running totals for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::storage::LedgerTotals;

use super::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of transactions as a register, oldest first
pub fn format_transaction_register(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        category: truncate(&txn.category_name, 20),
        amount: txn.amount.format_with_symbol(currency_symbol),
        kind: txn.kind.to_string(),
        description: truncate(&txn.description, 30),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("Transactions:\n{}\n", table)
}

/// Format the running totals
pub fn format_totals(totals: &LedgerTotals, currency_symbol: &str) -> String {
    format!(
        "Total income:   {:>12}\nTotal expenses: {:>12}\nNet balance:    {:>12}\n",
        totals.total_income.format_with_symbol(currency_symbol),
        totals.total_expenses.format_with_symbol(currency_symbol),
        totals.net_balance().format_with_symbol(currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], "$"),
            "No transactions recorded.\n"
        );
    }

    #[test]
    fn test_register_rows() {
        let transactions = vec![
            Transaction::income(Amount::new(1000.0), "salary"),
            Transaction::expense(Amount::new(12.5), "lunch", "Food"),
        ];

        let output = format_transaction_register(&transactions, "$");
        assert!(output.starts_with("Transactions:"));
        assert!(output.contains("Category"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("Income"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("Expense"));
        assert!(output.contains("lunch"));

        let income_pos = output.find("salary").unwrap();
        let expense_pos = output.find("lunch").unwrap();
        assert!(income_pos < expense_pos);
    }

    #[test]
    fn test_totals() {
        let totals = LedgerTotals {
            total_income: Amount::new(100.0),
            total_expenses: Amount::new(150.0),
        };
        let output = format_totals(&totals, "$");
        assert!(output.contains("$100.00"));
        assert!(output.contains("$150.00"));
        assert!(output.contains("-$50.00"));
    }
}
