//! Date-range filters for the expense summaries.

use serde::Serialize;
use time::{Date, Duration};

use crate::expense::Expense;

/// The time window used to filter the expenses shown in the summaries.
///
/// The filter only changes what is displayed, never what is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Every expense.
    #[default]
    All,
    /// Expenses from Sunday of the current week up to today.
    Week,
    /// Expenses from the first of the current month up to today.
    Month,
}

impl FilterMode {
    /// A human readable name for the filter.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::Week => "This week",
            Self::Month => "This month",
        }
    }
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first date in the range.
    pub start: Date,
    /// The last date in the range.
    pub end: Date,
}

impl DateRange {
    /// Whether `date` falls within the range, including both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The date range for `mode` as seen on `today`.
///
/// Returns `None` for [FilterMode::All], which has no bounds.
pub fn compute_range(mode: FilterMode, today: Date) -> Option<DateRange> {
    match mode {
        FilterMode::All => None,
        FilterMode::Week => Some(DateRange {
            start: week_start(today),
            end: today,
        }),
        FilterMode::Month => Some(DateRange {
            start: month_start(today),
            end: today,
        }),
    }
}

/// Select the expenses dated within the `mode` window as seen on `today`.
///
/// The original order of `expenses` is preserved.
pub fn filter_expenses(expenses: &[Expense], mode: FilterMode, today: Date) -> Vec<&Expense> {
    match compute_range(mode, today) {
        None => expenses.iter().collect(),
        Some(range) => expenses
            .iter()
            .filter(|expense| range.contains(expense.date))
            .collect(),
    }
}

/// Weeks start on Sunday.
fn week_start(today: Date) -> Date {
    today - Duration::days(today.weekday().number_days_from_sunday() as i64)
}

fn month_start(today: Date) -> Date {
    today - Duration::days(today.day() as i64 - 1)
}

#[cfg(test)]
mod tests {
    use time::{Date, Duration, macros::date};

    use crate::expense::{
        Expense,
        filter::{DateRange, FilterMode, compute_range, filter_expenses, week_start},
    };

    fn expense_on(id: i64, date: Date) -> Expense {
        Expense {
            id,
            amount: 1.0,
            category: "Food".to_owned(),
            note: None,
            date,
        }
    }

    fn ids(expenses: Vec<&Expense>) -> Vec<i64> {
        expenses.iter().map(|expense| expense.id).collect()
    }

    #[test]
    fn week_starts_on_most_recent_sunday() {
        // 2025-06-18 is a Wednesday.
        let range = compute_range(FilterMode::Week, date!(2025 - 06 - 18));

        assert_eq!(
            range,
            Some(DateRange {
                start: date!(2025 - 06 - 15),
                end: date!(2025 - 06 - 18),
            })
        );
    }

    #[test]
    fn week_on_a_sunday_is_a_single_day() {
        let range = compute_range(FilterMode::Week, date!(2025 - 06 - 15));

        assert_eq!(
            range,
            Some(DateRange {
                start: date!(2025 - 06 - 15),
                end: date!(2025 - 06 - 15),
            })
        );
    }

    #[test]
    fn week_can_span_month_boundary() {
        // 2025-07-02 is a Wednesday, so the week started in June.
        assert_eq!(week_start(date!(2025 - 07 - 02)), date!(2025 - 06 - 29));
    }

    #[test]
    fn month_starts_on_the_first() {
        let range = compute_range(FilterMode::Month, date!(2024 - 02 - 29));

        assert_eq!(
            range,
            Some(DateRange {
                start: date!(2024 - 02 - 01),
                end: date!(2024 - 02 - 29),
            })
        );
    }

    #[test]
    fn all_has_no_range() {
        assert_eq!(compute_range(FilterMode::All, date!(2025 - 06 - 18)), None);
    }

    #[test]
    fn week_filter_includes_today_and_yesterday_but_not_last_week() {
        let today = date!(2025 - 06 - 18);
        let start_of_week = week_start(today);
        let expenses = vec![
            expense_on(1, today),
            expense_on(2, today - Duration::days(1)),
            expense_on(3, start_of_week - Duration::days(1)),
        ];

        assert_eq!(
            ids(filter_expenses(&expenses, FilterMode::Week, today)),
            vec![1, 2]
        );
        assert_eq!(
            ids(filter_expenses(&expenses, FilterMode::All, today)),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn month_filter_excludes_previous_month() {
        let today = date!(2025 - 06 - 01);
        let expenses = vec![
            expense_on(1, today),
            expense_on(2, date!(2025 - 05 - 31)),
        ];

        assert_eq!(
            ids(filter_expenses(&expenses, FilterMode::Month, today)),
            vec![1]
        );
    }

    #[test]
    fn future_dates_are_outside_week_and_month() {
        let today = date!(2025 - 06 - 18);
        let expenses = vec![expense_on(1, date!(2025 - 06 - 19))];

        assert!(filter_expenses(&expenses, FilterMode::Week, today).is_empty());
        assert!(filter_expenses(&expenses, FilterMode::Month, today).is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(FilterMode::All.label(), "All time");
        assert_eq!(FilterMode::Week.label(), "This week");
        assert_eq!(FilterMode::Month.label(), "This month");
    }
}
