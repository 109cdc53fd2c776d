//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format categories as a numbered table (numbers start at 1)
pub fn format_category_list(categories: &[Category], currency_symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().enumerate().map(|(i, c)| CategoryRow {
        number: i + 1,
        name: c.name.clone(),
        limit: format_limit(c, currency_symbol),
        spent: c.current_spent.format_with_symbol(currency_symbol),
        status: if c.is_over_budget() { "OVER" } else { "" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a numbered selection menu of category names
pub fn format_category_menu(categories: &[Category]) -> String {
    categories
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}\n", i + 1, c.name))
        .collect()
}

/// Limit as shown to the user; zero reads as "no limit"
pub fn format_limit(category: &Category, currency_symbol: &str) -> String {
    if category.has_limit() {
        category.budget_limit.format_with_symbol(currency_symbol)
    } else {
        "no limit".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, DefaultCategory};

    fn defaults() -> Vec<Category> {
        DefaultCategory::all().iter().map(|d| d.to_category()).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[], "$"), "No categories found.\n");
    }

    #[test]
    fn test_category_list() {
        let mut categories = defaults();
        categories[3].budget_limit = Amount::new(100.0);
        categories[3].current_spent = Amount::new(110.0);

        let output = format_category_list(&categories, "$");
        assert!(output.contains("Salary"));
        assert!(output.contains("no limit"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("$110.00"));
        assert!(output.contains("OVER"));
    }

    #[test]
    fn test_category_menu() {
        let menu = format_category_menu(&defaults());
        assert!(menu.starts_with("1. Salary\n2. Freelance\n"));
        assert!(menu.ends_with("8. Entertainment\n"));
    }
}
