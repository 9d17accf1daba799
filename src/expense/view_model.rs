//! The expense view model: in-memory expenses, form state and summaries.
//!
//! Every command that writes to the store finishes by reloading all expenses
//! from the store. The in-memory list is never patched in place, so it always
//! reflects the store of record.

use crate::{
    Error,
    clock::Clock,
    database_id::ExpenseId,
    expense::{
        CategoryTotal, Expense, ExpenseForm, FilterMode, SpendingSummary, ValidationError,
        filter_expenses, store::ExpenseStore, total_spending, totals_by_category,
    },
};

/// A user action on the expense screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Validate the form and create or update an expense.
    Submit,
    /// Delete an expense.
    Delete(ExpenseId),
    /// Change the time window of the summaries.
    SetFilter(FilterMode),
    /// Load an expense into the form for editing.
    StartEdit(ExpenseId),
    /// Clear the form and stop editing.
    CancelEdit,
}

/// The result of a [Command::Submit].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new expense was stored with this ID.
    Created(ExpenseId),
    /// The expense with this ID was updated.
    Updated(ExpenseId),
    /// The form was invalid. Nothing was written and the form is unchanged.
    Rejected(ValidationError),
}

/// What happened after dispatching a [Command].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// See [SubmitOutcome].
    Submitted(SubmitOutcome),
    /// The delete was sent to the store and the expenses were reloaded.
    Deleted,
    /// The filter was changed.
    FilterChanged,
    /// The form now holds the expense for editing.
    EditStarted,
    /// The expense to edit is not in the current list; nothing changed.
    UnknownExpense(ExpenseId),
    /// The form was cleared.
    EditCancelled,
}

/// Holds the state of the expense screen and mediates all writes to the store.
#[derive(Debug)]
pub struct ExpenseViewModel<S, C> {
    store: S,
    clock: C,
    expenses: Vec<Expense>,
    filter: FilterMode,
    form: ExpenseForm,
}

impl<S: ExpenseStore, C: Clock> ExpenseViewModel<S, C> {
    /// Create a view model with an empty list.
    ///
    /// Call [ExpenseViewModel::load] to read the stored expenses.
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            expenses: Vec::new(),
            filter: FilterMode::default(),
            form: ExpenseForm::default(),
        }
    }

    /// Replace the in-memory expenses with everything in the store.
    ///
    /// # Errors
    /// Returns the store's error, in which case the previous list is kept.
    pub fn load(&mut self) -> Result<(), Error> {
        let expenses = self.store.query_all().inspect_err(|error| {
            tracing::error!("Could not load expenses: {error}");
        })?;

        tracing::debug!("Loaded {} expenses", expenses.len());
        self.expenses = expenses;

        Ok(())
    }

    /// Run `command` against the view model.
    ///
    /// # Errors
    /// Returns an error if a store call made by the command fails.
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome, Error> {
        match command {
            Command::Submit => self.submit().map(CommandOutcome::Submitted),
            Command::Delete(id) => self.delete(id).map(|_| CommandOutcome::Deleted),
            Command::SetFilter(mode) => {
                self.set_filter(mode);
                Ok(CommandOutcome::FilterChanged)
            }
            Command::StartEdit(id) => {
                if self.start_edit(id) {
                    Ok(CommandOutcome::EditStarted)
                } else {
                    Ok(CommandOutcome::UnknownExpense(id))
                }
            }
            Command::CancelEdit => {
                self.cancel_edit();
                Ok(CommandOutcome::EditCancelled)
            }
        }
    }

    /// Validate the form, then create or update an expense.
    ///
    /// A new expense is dated today. An edit keeps the expense's ID and date.
    /// On success the form is cleared and the expenses are reloaded. An
    /// invalid form is rejected without touching the store.
    ///
    /// # Errors
    /// Returns the store's error if the write or the reload fails.
    pub fn submit(&mut self) -> Result<SubmitOutcome, Error> {
        let validated = match self.form.validate() {
            Ok(validated) => validated,
            Err(error) => {
                tracing::debug!("Rejected expense form: {error}");
                return Ok(SubmitOutcome::Rejected(error));
            }
        };

        let outcome = match self.form.editing {
            None => {
                let new_expense = validated.into_new_expense(self.clock.today());
                let expense = self.store.insert(new_expense).inspect_err(|error| {
                    tracing::error!("Could not create expense: {error}");
                })?;

                tracing::info!("Created expense {}", expense.id);
                SubmitOutcome::Created(expense.id)
            }
            Some(id) => {
                let rows = self
                    .store
                    .update(id, validated.into_update())
                    .inspect_err(|error| {
                        tracing::error!("Could not update expense {id}: {error}");
                    })?;

                tracing::info!("Updated expense {id} ({rows} rows affected)");
                SubmitOutcome::Updated(id)
            }
        };

        self.form.clear();
        self.load()?;

        Ok(outcome)
    }

    /// Delete the expense `id` and reload.
    ///
    /// Deleting an expense that does not exist is not an error. If the
    /// expense was being edited, the form is cleared.
    ///
    /// # Errors
    /// Returns the store's error if the delete or the reload fails.
    pub fn delete(&mut self, id: ExpenseId) -> Result<(), Error> {
        let rows = self.store.delete_by_id(id).inspect_err(|error| {
            tracing::error!("Could not delete expense {id}: {error}");
        })?;

        if rows == 0 {
            tracing::debug!("Expense {id} was already deleted");
        } else {
            tracing::info!("Deleted expense {id}");
        }

        if self.form.editing == Some(id) {
            self.form.clear();
        }

        self.load()
    }

    /// Change the time window used by the summaries.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Fill the form with the expense `id` for editing.
    ///
    /// Returns `false`, leaving the form as is, if `id` is not in the list.
    pub fn start_edit(&mut self, id: ExpenseId) -> bool {
        match self.expenses.iter().find(|expense| expense.id == id) {
            Some(expense) => {
                self.form = ExpenseForm::for_expense(expense);
                true
            }
            None => {
                tracing::debug!("Cannot edit expense {id}, it is not loaded");
                false
            }
        }
    }

    /// Clear the form and stop editing.
    pub fn cancel_edit(&mut self) {
        self.form.clear();
    }

    /// All loaded expenses, newest first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The current form contents.
    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    /// The form, for the presentation layer to write user input into.
    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.form
    }

    /// The selected filter.
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// The display label of the selected filter.
    pub fn filter_label(&self) -> &'static str {
        self.filter.label()
    }

    /// The loaded expenses that fall within the selected filter as of today.
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        filter_expenses(&self.expenses, self.filter, self.clock.today())
    }

    /// The total spent within the selected filter.
    pub fn total_spending(&self) -> f64 {
        total_spending(self.filtered_expenses())
    }

    /// The totals per category within the selected filter.
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        totals_by_category(self.filtered_expenses())
    }

    /// The filter, total and category totals in one value.
    pub fn summary(&self) -> SpendingSummary {
        let filtered = self.filtered_expenses();

        SpendingSummary {
            filter: self.filter,
            label: self.filter_label(),
            total: total_spending(filtered.iter().copied()),
            categories: totals_by_category(filtered),
        }
    }
}
