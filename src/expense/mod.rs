//! Expense management for the expense tracker.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the table it is stored in
//! - The `ExpenseStore` trait and its SQLite implementation
//! - Date filtering and spending summaries
//! - The expense form and the view model that ties them together

mod core;
mod filter;
mod form;
mod sqlite;
mod store;
mod summary;
mod view_model;

pub use self::core::{Expense, ExpenseUpdate, NewExpense, create_expense_table, map_expense_row};
pub use filter::{DateRange, FilterMode, compute_range, filter_expenses};
pub use form::{ExpenseForm, ValidatedExpense, ValidationError};
pub use sqlite::SQLiteExpenseStore;
pub use store::{ExpenseStore, RowsAffected};
pub use summary::{CategoryTotal, SpendingSummary, total_spending, totals_by_category};
pub use view_model::{Command, CommandOutcome, ExpenseViewModel, SubmitOutcome};
