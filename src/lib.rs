//! Expense tracker is a small tool for recording day-to-day spending.
//!
//! This library provides the expense view model that sits between a
//! presentation layer and the SQLite database: it validates the expense form,
//! writes changes to the store, reloads the stored expenses and derives the
//! weekly, monthly and all-time summaries.

#![warn(missing_docs)]

mod clock;
mod currency;
mod database_id;
mod db;
mod expense;
mod logging;

pub use clock::{Clock, FixedClock, LocalClock};
pub use currency::format_currency;
pub use database_id::ExpenseId;
pub use db::initialize as initialize_db;
pub use expense::{
    CategoryTotal, Command, CommandOutcome, DateRange, Expense, ExpenseForm, ExpenseStore,
    ExpenseUpdate, ExpenseViewModel, FilterMode, NewExpense, RowsAffected, SQLiteExpenseStore,
    SpendingSummary, SubmitOutcome, ValidatedExpense, ValidationError, compute_range,
    filter_expenses, total_spending, totals_by_category,
};
pub use logging::setup_logging;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The log file could not be opened or the global subscriber was already set.
    #[error("could not set up logging: {0}")]
    LoggingError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
