//! Birthday value object and the date arithmetic around it.

use super::errors::ValidationError;
use super::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The fixed textual form birthdays are parsed from and rendered to.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono's `%Y-%m-%d` also takes signs, padding and single-digit fields
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Wrapping a [`NaiveDate`] means the value is always a real calendar date.
/// Text input goes through [`Birthday::parse`], which only accepts the
/// `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a Birthday from a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a Birthday from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the components do not
    /// name a real date (e.g. April 31st or February 29th of 2023).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::InvalidBirthday(format!("{:04}-{:02}-{:02}", year, month, day))
            })
    }

    /// Parse a `YYYY-MM-DD` birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `input` is not a valid
    /// date in that format.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(input) {
            return Err(ValidationError::InvalidBirthday(input.to_string()));
        }
        NaiveDate::parse_from_str(input, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The first anniversary of this birthday falling on or after `today`.
    ///
    /// A February 29th birthday is observed on February 28th in years
    /// without a leap day.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    /// Whole days from `today` until the next anniversary; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
