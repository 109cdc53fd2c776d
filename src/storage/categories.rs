//! In-memory category store
//!
//! An ordered, bounded list of budget categories. Categories are addressed by
//! their position, which is also the order they are shown in.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Category, DefaultCategory};

/// Ordered store of budget categories
#[derive(Debug, Clone)]
pub struct CategoryStore {
    categories: Vec<Category>,
    max_categories: usize,
    max_name_length: usize,
}

impl CategoryStore {
    /// Create an empty category store
    pub fn new(max_categories: usize, max_name_length: usize) -> Self {
        Self {
            categories: Vec::new(),
            max_categories,
            max_name_length,
        }
    }

    /// Populate the store with the default categories
    ///
    /// Fails without adding anything if the defaults do not fit.
    pub fn initialize_defaults(&mut self) -> TrackerResult<()> {
        let defaults = DefaultCategory::all();
        if self.categories.len() + defaults.len() > self.max_categories {
            return Err(TrackerError::categories_full(self.max_categories));
        }

        for default in defaults {
            self.insert(default.to_category())?;
        }

        debug!(count = self.categories.len(), "Default categories initialized");
        Ok(())
    }

    fn insert(&mut self, category: Category) -> TrackerResult<()> {
        if self.categories.len() >= self.max_categories {
            return Err(TrackerError::categories_full(self.max_categories));
        }

        category
            .validate(self.max_name_length)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if self.find_by_name(&category.name).is_some() {
            return Err(TrackerError::Validation(format!(
                "Category already exists: {}",
                category.name
            )));
        }

        self.categories.push(category);
        Ok(())
    }

    /// All categories in display order
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Get a category by index
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Get a category by index, failing if the index is out of range
    pub fn check_index(&self, index: usize) -> TrackerResult<&Category> {
        self.categories
            .get(index)
            .ok_or(TrackerError::InvalidCategory {
                index,
                count: self.categories.len(),
            })
    }

    /// Find the index of a category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Replace the budget limit of a category
    pub fn set_limit(&mut self, index: usize, new_limit: Amount) -> TrackerResult<()> {
        self.check_index(index)?;
        if !new_limit.is_valid_limit() {
            return Err(TrackerError::InvalidAmount(format!(
                "budget limit must be zero or positive, got {}",
                new_limit.value()
            )));
        }

        self.categories[index].budget_limit = new_limit;
        Ok(())
    }

    /// Post an expense against a category
    ///
    /// Returns `true` when the new spend is strictly above a positive limit.
    pub fn record_expense(&mut self, index: usize, amount: Amount) -> TrackerResult<bool> {
        self.check_index(index)?;
        if !amount.is_positive() {
            return Err(TrackerError::InvalidAmount(format!(
                "expense must be positive, got {}",
                amount.value()
            )));
        }

        let category = &mut self.categories[index];
        category.current_spent += amount;
        Ok(category.is_over_budget())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CategoryStore {
        let mut store = CategoryStore::new(50, 50);
        store.initialize_defaults().unwrap();
        store
    }

    #[test]
    fn test_initialize_defaults() {
        let store = store();
        assert_eq!(store.len(), 8);
        assert_eq!(store.list()[0].name, "Salary");
        assert_eq!(store.list()[7].name, "Entertainment");
        assert!(store
            .list()
            .iter()
            .all(|c| c.budget_limit.is_zero() && c.current_spent.is_zero()));
    }

    #[test]
    fn test_defaults_exceed_capacity() {
        let mut store = CategoryStore::new(5, 50);
        let err = store.initialize_defaults().unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert!(store.is_empty());
    }

    #[test]
    fn test_defaults_twice_rejected_as_duplicates() {
        let mut store = store();
        let err = store.initialize_defaults().unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    #[test]
    fn test_find_by_name() {
        let store = store();
        assert_eq!(store.find_by_name("Food"), Some(3));
        assert_eq!(store.find_by_name("food"), Some(3));
        assert_eq!(store.find_by_name("Travel"), None);
    }

    #[test]
    fn test_set_limit() {
        let mut store = store();
        store.set_limit(3, Amount::new(100.0)).unwrap();
        assert_eq!(store.get(3).unwrap().budget_limit, Amount::new(100.0));

        let err = store.set_limit(8, Amount::new(1.0)).unwrap_err();
        assert_eq!(err, TrackerError::InvalidCategory { index: 8, count: 8 });

        let err = store.set_limit(3, Amount::new(-5.0)).unwrap_err();
        assert!(err.is_invalid_amount());
        assert_eq!(store.get(3).unwrap().budget_limit, Amount::new(100.0));
    }

    #[test]
    fn test_record_expense_unlimited_never_exceeds() {
        let mut store = store();
        for _ in 0..10 {
            assert!(!store.record_expense(3, Amount::new(1_000.0)).unwrap());
        }
        assert_eq!(store.get(3).unwrap().current_spent, Amount::new(10_000.0));
    }

    #[test]
    fn test_record_expense_crossing_limit() {
        let mut store = store();
        store.set_limit(3, Amount::new(100.0)).unwrap();

        assert!(!store.record_expense(3, Amount::new(80.0)).unwrap());
        assert!(!store.record_expense(3, Amount::new(20.0)).unwrap());
        assert!(store.record_expense(3, Amount::new(0.5)).unwrap());
        assert!(store.record_expense(3, Amount::new(1.0)).unwrap());
    }

    #[test]
    fn test_record_expense_rejects_bad_input() {
        let mut store = store();
        assert!(store
            .record_expense(99, Amount::new(1.0))
            .unwrap_err()
            .is_invalid_category());
        assert!(store
            .record_expense(0, Amount::zero())
            .unwrap_err()
            .is_invalid_amount());
        assert!(store.get(0).unwrap().current_spent.is_zero());
    }
}
