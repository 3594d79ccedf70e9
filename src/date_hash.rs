//! The `{year, month, date}` triple every calendar function works on.

use crate::error::CalendarError;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `YYYY-MM-DD` where every field may carry its own sign, e.g. `2010--1-05`.
static DATE_HASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+)-(-?\d+)-(-?\d+)$").expect("valid date hash pattern"));

/// A calendar day as plain fields.
///
/// `month` is 1-based. Fields are not range checked: a `DateHash` such as
/// `{2010, 13, 0}` is a valid value that the calendar functions normalize
/// (here to 2010-12-31) when they materialize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateHash {
    pub year: i32,
    pub month: i32,
    pub date: i32,
}

impl DateHash {
    /// Build a hash from raw fields, verbatim.
    #[must_use]
    pub const fn from_fields(year: i32, month: i32, date: i32) -> Self {
        Self { year, month, date }
    }

    /// Extract the fields of any chrono date-like value.
    ///
    /// The fields are read as the value stores them: a `DateTime<Utc>` gives
    /// the UTC calendar day. Use [`DateHash::from_local`] for the local day.
    #[must_use]
    pub fn from_native_date<D: Datelike>(d: &D) -> Self {
        Self {
            year: d.year(),
            month: d.month() as i32,
            date: d.day() as i32,
        }
    }

    /// The local calendar day of an instant in any timezone.
    #[must_use]
    pub fn from_local<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_native_date(&dt.with_timezone(&Local))
    }
}

impl From<NaiveDate> for DateHash {
    fn from(d: NaiveDate) -> Self {
        Self::from_native_date(&d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateHash {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from_local(&dt)
    }
}

impl fmt::Display for DateHash {
    /// `YYYY-MM-DD`. Out-of-range fields keep their sign, so `{2010, -1, 5}`
    /// prints as `2010--1-05` and parses back unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.date)
    }
}

impl FromStr for DateHash {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`. Any field may start with `-`, a leading one marks
    /// a negative (astronomical) year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_HASH_PATTERN
            .captures(s.trim())
            .ok_or_else(|| CalendarError::Parse(s.to_string()))?;

        let field = |i: usize| caps[i].parse::<i32>().map_err(|_| CalendarError::Parse(s.to_string()));

        Ok(Self {
            year: field(1)?,
            month: field(2)?,
            date: field(3)?,
        })
    }
}
