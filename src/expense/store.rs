//! Defines the expense store trait.

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{Expense, ExpenseUpdate, NewExpense},
};

/// The number of rows changed by a write.
pub type RowsAffected = usize;

/// Handles the durable storage of expenses.
pub trait ExpenseStore {
    /// Retrieve every expense in the store, newest ID first.
    fn query_all(&self) -> Result<Vec<Expense>, Error>;

    /// Add a new expense to the store and assign it a new, unique ID.
    fn insert(&mut self, expense: NewExpense) -> Result<Expense, Error>;

    /// Overwrite the amount, category and note of the expense `id`.
    ///
    /// Implementers must leave the ID and date untouched and treat a missing
    /// `id` as a no-op that affects zero rows.
    fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> Result<RowsAffected, Error>;

    /// Remove the expense `id` from the store.
    ///
    /// Deleting a missing `id` is a no-op that affects zero rows.
    fn delete_by_id(&mut self, id: ExpenseId) -> Result<RowsAffected, Error>;
}
