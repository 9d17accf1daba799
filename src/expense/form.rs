//! The add/edit expense form and its validation rules.

use time::Date;

use crate::{
    database_id::ExpenseId,
    expense::{Expense, ExpenseUpdate, NewExpense},
};

/// The raw, unvalidated contents of the expense form.
///
/// When `editing` is `Some`, submitting the form updates that expense,
/// otherwise a new expense is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    /// The amount as typed by the user.
    pub amount: String,
    /// The category as typed by the user.
    pub category: String,
    /// The note as typed by the user, may be empty.
    pub note: String,
    /// The expense being edited, if any.
    pub editing: Option<ExpenseId>,
}

/// The reasons a form submission is rejected.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// The amount could not be read as a number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The amount was zero, negative or not finite.
    #[error("the amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    /// The category was empty or only whitespace.
    #[error("the category cannot be empty")]
    EmptyCategory,
}

/// Form fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    /// A finite amount greater than zero.
    pub amount: f64,
    /// A non-empty, trimmed category.
    pub category: String,
    /// A trimmed note, `None` instead of an empty string.
    pub note: Option<String>,
}

impl ExpenseForm {
    /// Create a form for a new expense.
    pub fn new(amount: &str, category: &str, note: &str) -> Self {
        Self {
            amount: amount.to_owned(),
            category: category.to_owned(),
            note: note.to_owned(),
            editing: None,
        }
    }

    /// Create a form pre-filled with the fields of `expense` for editing.
    pub fn for_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            note: expense.note.clone().unwrap_or_default(),
            editing: Some(expense.id),
        }
    }

    /// Reset every field, including the expense being edited.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the raw fields and normalize them.
    ///
    /// # Errors
    /// Returns a [ValidationError] if the amount is not a positive number or
    /// the category is blank.
    pub fn validate(&self) -> Result<ValidatedExpense, ValidationError> {
        let amount = parse_amount(&self.amount)?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let note = match self.note.trim() {
            "" => None,
            note => Some(note.to_owned()),
        };

        Ok(ValidatedExpense {
            amount,
            category: category.to_owned(),
            note,
        })
    }
}

impl ValidatedExpense {
    /// Turn the fields into a new expense recorded on `date`.
    pub fn into_new_expense(self, date: Date) -> NewExpense {
        NewExpense {
            amount: self.amount,
            category: self.category,
            note: self.note,
            date,
        }
    }

    /// Turn the fields into an update for an existing expense.
    pub fn into_update(self) -> ExpenseUpdate {
        ExpenseUpdate {
            amount: self.amount,
            category: self.category,
            note: self.note,
        }
    }
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_owned()))?;

    // NaN fails this comparison too.
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ValidationError::NonPositiveAmount(amount))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::expense::{
        Expense,
        form::{ExpenseForm, ValidatedExpense, ValidationError},
    };

    #[test]
    fn valid_form_is_trimmed() {
        let form = ExpenseForm::new(" 12.5 ", "  Food ", "  lunch  ");

        assert_eq!(
            form.validate(),
            Ok(ValidatedExpense {
                amount: 12.5,
                category: "Food".to_owned(),
                note: Some("lunch".to_owned()),
            })
        );
    }

    #[test]
    fn blank_note_becomes_none() {
        let form = ExpenseForm::new("3", "Coffee", "   ");

        assert_eq!(form.validate().map(|expense| expense.note), Ok(None));
    }

    #[test]
    fn rejects_unparseable_amounts() {
        for amount in ["", "abc", "12abc", "1,000", "$5"] {
            let form = ExpenseForm::new(amount, "Food", "");

            assert_eq!(
                form.validate(),
                Err(ValidationError::InvalidAmount(amount.to_owned())),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_positive_and_non_finite_amounts() {
        for amount in ["0", "-0", "-5", "inf", "NaN"] {
            let form = ExpenseForm::new(amount, "Food", "");

            assert!(
                matches!(form.validate(), Err(ValidationError::NonPositiveAmount(_))),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_blank_category() {
        for category in ["", "   ", "\t\n"] {
            let form = ExpenseForm::new("10", category, "");

            assert_eq!(form.validate(), Err(ValidationError::EmptyCategory));
        }
    }

    #[test]
    fn for_expense_fills_fields_and_target() {
        let expense = Expense {
            id: 3,
            amount: 7.25,
            category: "Books".to_owned(),
            note: None,
            date: date!(2025 - 06 - 18),
        };

        let form = ExpenseForm::for_expense(&expense);

        assert_eq!(form.amount, "7.25");
        assert_eq!(form.category, "Books");
        assert_eq!(form.note, "");
        assert_eq!(form.editing, Some(3));
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = ExpenseForm::new("1", "Food", "note");
        form.editing = Some(9);

        form.clear();

        assert_eq!(form, ExpenseForm::default());
    }
}
