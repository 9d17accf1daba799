//! Defines the core data models and table schema for expenses.

use rusqlite::{Connection, Row};
use time::Date;

use crate::database_id::ExpenseId;

// ============================================================================
// MODELS
// ============================================================================

/// A record of money that was spent.
///
/// Expenses are created through an [ExpenseStore](crate::ExpenseStore), which
/// assigns the ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense. IDs are never reused, even after a delete.
    pub id: ExpenseId,
    /// The amount of money spent, always greater than zero.
    pub amount: f64,
    /// What the money was spent on, e.g. "Groceries".
    pub category: String,
    /// An optional free-text note. Never an empty string.
    pub note: Option<String>,
    /// The day the expense was recorded.
    ///
    /// Set when the expense is created and never changed by edits.
    pub date: Date,
}

/// The fields needed to insert a new [Expense].
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The amount of money spent.
    pub amount: f64,
    /// What the money was spent on.
    pub category: String,
    /// An optional note.
    pub note: Option<String>,
    /// The day the expense is recorded, normally today.
    pub date: Date,
}

/// The fields of an [Expense] that an edit may change.
///
/// The ID and date are deliberately absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseUpdate {
    /// The new amount.
    pub amount: f64,
    /// The new category.
    pub category: String,
    /// The new note.
    pub note: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                note TEXT,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to an [Expense].
///
/// Expects the columns `id, amount, category, note, date` in that order.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let note = row.get(3)?;
    let date = row.get(4)?;

    Ok(Expense {
        id,
        amount,
        category,
        note,
        date,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{db::initialize, expense::core::map_expense_row};

    #[test]
    fn date_is_stored_as_iso_text() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        conn.execute(
            "INSERT INTO expense (amount, category, note, date) VALUES (?1, ?2, ?3, ?4)",
            (4.5, "Coffee", None::<String>, date!(2025 - 03 - 09)),
        )
        .unwrap();

        let stored: String = conn
            .query_row("SELECT date FROM expense", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, "2025-03-09");

        let expense = conn
            .query_row(
                "SELECT id, amount, category, note, date FROM expense",
                [],
                map_expense_row,
            )
            .unwrap();
        assert_eq!(expense.date, date!(2025 - 03 - 09));
        assert_eq!(expense.note, None);
    }
}
