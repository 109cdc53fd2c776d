//! Category model
//!
//! A category is a named bucket expenses are posted against. Each one carries
//! an optional spending ceiling (0 means unlimited) and the running spend for
//! the session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// A budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within the store
    pub name: String,

    /// Spending ceiling; zero means no limit
    pub budget_limit: Amount,

    /// Total of all expenses posted against this category
    pub current_spent: Amount,
}

impl Category {
    /// Create a new category with no limit and nothing spent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget_limit: Amount::zero(),
            current_spent: Amount::zero(),
        }
    }

    /// Check whether a positive limit is set
    pub fn has_limit(&self) -> bool {
        self.budget_limit.is_positive()
    }

    /// Spend strictly above a positive limit
    pub fn is_over_budget(&self) -> bool {
        self.has_limit() && self.current_spent > self.budget_limit
    }

    /// Validate the category
    pub fn validate(&self, max_name_length: usize) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > max_name_length {
            return Err(CategoryValidationError::NameTooLong {
                len,
                max: max_name_length,
            });
        }

        if !self.budget_limit.is_valid_limit() {
            return Err(CategoryValidationError::InvalidLimit);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The categories every new session starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Salary,
    Freelance,
    Investments,
    Food,
    Transport,
    Utilities,
    Rent,
    Entertainment,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Freelance,
            Self::Investments,
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Rent,
            Self::Entertainment,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investments => "Investments",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::new(self.name())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong { len: usize, max: usize },
    InvalidLimit,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "Category name too long ({} chars, max {})", len, max)
            }
            Self::InvalidLimit => write!(f, "Budget limit must be a non-negative number"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food");
        assert_eq!(category.name, "Food");
        assert!(category.budget_limit.is_zero());
        assert!(category.current_spent.is_zero());
        assert!(!category.has_limit());
    }

    #[test]
    fn test_over_budget() {
        let mut category = Category::new("Food");
        category.current_spent = Amount::new(500.0);
        assert!(!category.is_over_budget());

        category.budget_limit = Amount::new(500.0);
        assert!(!category.is_over_budget());

        category.current_spent = Amount::new(500.01);
        assert!(category.is_over_budget());
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Valid");
        assert!(category.validate(50).is_ok());

        category.name = "   ".into();
        assert_eq!(category.validate(50), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert_eq!(
            category.validate(50),
            Err(CategoryValidationError::NameTooLong { len: 51, max: 50 })
        );

        category.name = "Valid".into();
        category.budget_limit = Amount::new(-1.0);
        assert_eq!(category.validate(50), Err(CategoryValidationError::InvalidLimit));
    }

    #[test]
    fn test_defaults() {
        let defaults = DefaultCategory::all();
        assert_eq!(defaults.len(), 8);
        assert_eq!(defaults[0].name(), "Salary");
        assert_eq!(defaults[3].name(), "Food");
        assert_eq!(defaults[7].to_category().name, "Entertainment");
    }
}
