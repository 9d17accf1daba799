//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{
        Expense, ExpenseUpdate, NewExpense, map_expense_row,
        store::{ExpenseStore, RowsAffected},
    },
};

/// Stores expenses in a SQLite database.
///
/// The expense table must exist, see [initialize_db](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| {
            tracing::error!("The database lock was poisoned");
            Error::DatabaseLockError
        })
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Retrieve all expenses, newest first.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn query_all(&self) -> Result<Vec<Expense>, Error> {
        self.connection()?
            .prepare("SELECT id, amount, category, note, date FROM expense ORDER BY id DESC")?
            .query_map([], map_expense_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect()
    }

    /// Insert a new expense.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn insert(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        let expense = self
            .connection()?
            .prepare(
                "INSERT INTO expense (amount, category, note, date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, amount, category, note, date",
            )?
            .query_row(
                (expense.amount, expense.category, expense.note, expense.date),
                map_expense_row,
            )?;

        Ok(expense)
    }

    /// Update the editable fields of the expense `id`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> Result<RowsAffected, Error> {
        self.connection()?
            .execute(
                "UPDATE expense SET amount = ?1, category = ?2, note = ?3 WHERE id = ?4",
                (update.amount, update.category, update.note, id),
            )
            .map_err(Error::from)
    }

    /// Delete the expense `id`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn delete_by_id(&mut self, id: ExpenseId) -> Result<RowsAffected, Error> {
        self.connection()?
            .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])
            .map_err(Error::from)
    }
}
