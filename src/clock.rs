//! Supplies "today" as a local calendar date.

use std::fmt;

use time::{Date, OffsetDateTime};
use time_tz::{Offset, TimeZone, Tz};

use crate::Error;

/// A source for the current local date.
pub trait Clock {
    /// The current calendar date in the user's timezone.
    fn today(&self) -> Date;
}

/// Reads the system time and converts it to the date in a fixed timezone.
#[derive(Clone, Copy)]
pub struct LocalClock {
    timezone: &'static Tz,
}

impl fmt::Debug for LocalClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalClock")
            .field("timezone", &self.timezone.name())
            .finish()
    }
}

impl LocalClock {
    /// Create a clock for `canonical_timezone`, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
    /// known timezone name.
    pub fn new(canonical_timezone: &str) -> Result<Self, Error> {
        let timezone = time_tz::timezones::get_by_name(canonical_timezone).ok_or_else(|| {
            tracing::error!("Invalid timezone {}", canonical_timezone);
            Error::InvalidTimezoneError(canonical_timezone.to_owned())
        })?;

        Ok(Self { timezone })
    }
}

impl Clock for LocalClock {
    fn today(&self) -> Date {
        let now = OffsetDateTime::now_utc();
        let offset = self.timezone.get_offset_utc(&now).to_utc();

        now.to_offset(offset).date()
    }
}

/// A clock that is stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
