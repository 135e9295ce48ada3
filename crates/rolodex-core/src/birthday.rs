//! Month/day window used by the upcoming-birthdays query.
//!
//! Both ends of the window are reduced to zero-padded `"MM-DD"` strings and a
//! birthday matches when its own `"MM-DD"` sorts between them (inclusive).
//! The comparison is lexicographic, so a window that crosses New Year
//! (`"12-28"` to `"01-07"`) has `start > end` and matches nothing. Callers
//! can detect that case with [`BirthdayWindow::wraps_year`].

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::defaults::MONTH_DAY_FORMAT;
use crate::error::{Error, Result};

/// Closed `"MM-DD"` range of upcoming birthdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayWindow {
    /// Month/day of the first day in the window.
    pub start: String,
    /// Month/day of the last day in the window.
    pub end: String,
}

impl BirthdayWindow {
    /// Build the window covering `today` through `today + days_ahead`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the end date falls outside the
    /// range `chrono` can represent.
    pub fn starting(today: NaiveDate, days_ahead: i64) -> Result<Self> {
        let last_day = Duration::try_days(days_ahead)
            .and_then(|span| today.checked_add_signed(span))
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "birthday window of {} days from {} is out of range",
                    days_ahead, today
                ))
            })?;

        Ok(Self {
            start: month_day(today),
            end: month_day(last_day),
        })
    }

    /// Whether `date`'s month/day falls inside the window.
    ///
    /// Mirrors `to_char(birthday, 'MM-DD') BETWEEN start AND end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let key = month_day(date);
        self.start.as_str() <= key.as_str() && key.as_str() <= self.end.as_str()
    }

    /// Whether the window crosses a year boundary and therefore matches nothing.
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }
}

/// Reduce a date to its zero-padded `"MM-DD"` form.
pub fn month_day(date: NaiveDate) -> String {
    date.format(MONTH_DAY_FORMAT).to_string()
}
