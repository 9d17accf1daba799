use std::{
    error::Error,
    path::PathBuf,
    process::exit,
    sync::{Arc, Mutex},
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rusqlite::Connection;

use expense_tracker::{
    Command, CommandOutcome, ExpenseForm, ExpenseViewModel, FilterMode, LocalClock,
    SQLiteExpenseStore, SubmitOutcome, format_currency, initialize_db, setup_logging,
};

/// Record expenses and see where the money went.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File path to the application SQLite database.
    #[arg(long, env = "EXPENSES_DB_PATH")]
    db_path: PathBuf,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    #[arg(long, env = "EXPENSES_TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,

    /// Also write debug logs to this file.
    #[arg(long, env = "EXPENSES_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Record a new expense dated today.
    Add {
        /// The amount spent, e.g. 12.50.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// What the money was spent on.
        #[arg(long)]
        category: String,

        /// An optional note.
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Change the amount, category or note of an expense.
    Edit {
        /// The ID of the expense to edit.
        #[arg(long)]
        id: i64,

        /// The new amount.
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// The new category.
        #[arg(long)]
        category: Option<String>,

        /// The new note. Pass an empty string to remove the note.
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete an expense.
    Delete {
        /// The ID of the expense to delete.
        #[arg(long)]
        id: i64,
    },
    /// List the expenses within a time window, followed by the totals.
    List(FilterArgs),
    /// Show only the totals within a time window.
    Summary {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// The time window to show.
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FilterArg {
    All,
    Week,
    Month,
}

impl From<FilterArg> for FilterMode {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => FilterMode::All,
            FilterArg::Week => FilterMode::Week,
            FilterArg::Month => FilterMode::Month,
        }
    }
}

type ViewModel = ExpenseViewModel<SQLiteExpenseStore, LocalClock>;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    setup_logging(cli.log_file.as_deref())?;

    let conn = Connection::open(&cli.db_path)?;
    initialize_db(&conn)?;

    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));
    let clock = LocalClock::new(&cli.timezone)?;
    let mut view_model = ExpenseViewModel::new(store, clock);
    view_model.load()?;

    match cli.action {
        Action::Add {
            amount,
            category,
            note,
        } => {
            *view_model.form_mut() = ExpenseForm::new(&amount, &category, &note);
            submit(&mut view_model)?;
        }
        Action::Edit {
            id,
            amount,
            category,
            note,
        } => {
            if let CommandOutcome::UnknownExpense(id) =
                view_model.dispatch(Command::StartEdit(id))?
            {
                eprintln!("There is no expense with the ID {id}.");
                exit(1);
            }

            let form = view_model.form_mut();
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(note) = note {
                form.note = note;
            }

            submit(&mut view_model)?;
        }
        Action::Delete { id } => {
            view_model.dispatch(Command::Delete(id))?;
            println!("Deleted expense {id}.");
        }
        Action::List(FilterArgs { filter }) => {
            view_model.dispatch(Command::SetFilter(filter.into()))?;
            print_expenses(&view_model);
            print_totals(&view_model);
        }
        Action::Summary {
            filter: FilterArgs { filter },
            json,
        } => {
            view_model.dispatch(Command::SetFilter(filter.into()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&view_model.summary())?);
            } else {
                print_totals(&view_model);
            }
        }
    }

    Ok(())
}

fn submit(view_model: &mut ViewModel) -> Result<(), Box<dyn Error>> {
    match view_model.dispatch(Command::Submit)? {
        CommandOutcome::Submitted(SubmitOutcome::Created(id)) => {
            println!("Added expense {id}.");
        }
        CommandOutcome::Submitted(SubmitOutcome::Updated(id)) => {
            println!("Updated expense {id}.");
        }
        CommandOutcome::Submitted(SubmitOutcome::Rejected(error)) => {
            eprintln!("Nothing was saved: {error}.");
            exit(1);
        }
        outcome => tracing::warn!("Unexpected outcome for submit: {outcome:?}"),
    }

    Ok(())
}

fn print_expenses(view_model: &ViewModel) {
    let expenses = view_model.filtered_expenses();

    println!("{}", view_model.filter_label());

    if expenses.is_empty() {
        println!("  No expenses.");
        return;
    }

    for expense in expenses {
        let note = expense.note.as_deref().unwrap_or("");
        println!(
            "  #{:<5} {}  {:>12}  {:<16} {}",
            expense.id,
            expense.date,
            format_currency(expense.amount),
            expense.category,
            note
        );
    }
}

fn print_totals(view_model: &ViewModel) {
    let summary = view_model.summary();

    println!();
    println!("Total ({}): {}", summary.label, format_currency(summary.total));

    for category_total in summary.categories {
        println!(
            "  {:<16} {:>12}",
            category_total.category,
            format_currency(category_total.total)
        );
    }
}
