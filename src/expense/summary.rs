//! Spending totals derived from a list of expenses.

use std::collections::HashMap;

use serde::Serialize;

use crate::expense::{Expense, FilterMode};

/// The summed amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category name as stored on the expenses.
    pub category: String,
    /// The sum of the amounts in the category.
    pub total: f64,
}

/// Everything the summary view shows for one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// The active filter.
    pub filter: FilterMode,
    /// The display label of the active filter.
    pub label: &'static str,
    /// Total spent within the filter.
    pub total: f64,
    /// Per-category totals within the filter.
    pub categories: Vec<CategoryTotal>,
}

/// The sum of the expense amounts, `0.0` if there are none.
pub fn total_spending<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses.into_iter().map(|expense| expense.amount).sum()
}

/// Sum the expense amounts per category.
///
/// Categories appear in the order they are first seen. Categories without any
/// expenses are not included.
pub fn totals_by_category<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        match positions.get(expense.category.as_str()) {
            Some(&position) => totals[position].total += expense.amount,
            None => {
                positions.insert(&expense.category, totals.len());
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                });
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::expense::{
        Expense, FilterMode,
        summary::{CategoryTotal, SpendingSummary, total_spending, totals_by_category},
    };

    fn create_test_expense(amount: f64, category: &str) -> Expense {
        Expense {
            id: 0,
            amount,
            category: category.to_owned(),
            note: None,
            date: date!(2025 - 06 - 18),
        }
    }

    #[test]
    fn totals_food_and_books() {
        let expenses = vec![
            create_test_expense(10.0, "Food"),
            create_test_expense(5.0, "Food"),
            create_test_expense(20.0, "Books"),
        ];

        assert_eq!(total_spending(&expenses), 35.0);
        assert_eq!(
            totals_by_category(&expenses),
            vec![
                CategoryTotal {
                    category: "Food".to_owned(),
                    total: 15.0
                },
                CategoryTotal {
                    category: "Books".to_owned(),
                    total: 20.0
                },
            ]
        );
    }

    #[test]
    fn empty_input_gives_zero_and_no_categories() {
        let expenses: Vec<Expense> = vec![];

        assert_eq!(total_spending(&expenses), 0.0);
        assert!(totals_by_category(&expenses).is_empty());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let expenses = vec![
            create_test_expense(1.0, "Transport"),
            create_test_expense(2.0, "Food"),
            create_test_expense(3.0, "Transport"),
        ];

        let categories: Vec<_> = totals_by_category(&expenses)
            .into_iter()
            .map(|total| total.category)
            .collect();

        assert_eq!(categories, vec!["Transport", "Food"]);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let expenses = vec![
            create_test_expense(1.0, "food"),
            create_test_expense(2.0, "Food"),
        ];

        assert_eq!(totals_by_category(&expenses).len(), 2);
    }

    #[test]
    fn summary_serializes_filter_in_kebab_case() {
        let expenses = vec![create_test_expense(1.5, "Food")];
        let summary = SpendingSummary {
            filter: FilterMode::Week,
            label: FilterMode::Week.label(),
            total: total_spending(&expenses),
            categories: totals_by_category(&expenses),
        };

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "filter": "week",
                "label": "This week",
                "total": 1.5,
                "categories": [{ "category": "Food", "total": 1.5 }],
            })
        );
    }
}
