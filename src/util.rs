//! [`DateHashUtil`], the calendar helper set bundled with a clock and a week
//! start.

use crate::calendar::{self, WeekStart};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::date_hash::DateHash;
use crate::error::CalendarError;
use crate::grid::{self, Week};
use crate::utils::{datetime, text};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use regex::Regex;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Date-hash helpers for one calendar.
///
/// The clock decides what "today" is; the week start decides which weekday
/// sits in column 0 for [`first_weekday`](Self::first_weekday),
/// [`last_weekday`](Self::last_weekday), [`week_count`](Self::week_count) and
/// [`month_grid`](Self::month_grid).
#[derive(Debug, Clone, Default)]
pub struct DateHashUtil<C = SystemClock> {
    clock: C,
    week_start: WeekStart,
}

impl DateHashUtil<SystemClock> {
    /// Helpers reading the host clock, weeks starting on Sunday
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Helpers reading the host clock, configured from `config`
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_week_start(config.calendar.week_start)
    }
}

impl<C: Clock> DateHashUtil<C> {
    /// Helpers reading `clock`, weeks starting on Sunday
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            week_start: WeekStart::default(),
        }
    }

    /// Same helpers with `week_start` in column 0
    #[must_use]
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// First column of this calendar's weeks
    #[must_use]
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Today's date according to the clock
    #[must_use]
    pub fn today(&self) -> DateHash {
        DateHash::from(self.clock.today())
    }

    /// Fields of a chrono date-like value, as stored (see [`DateHash::from_native_date`])
    #[must_use]
    pub fn from_native_date<D: Datelike>(&self, d: &D) -> DateHash {
        DateHash::from_native_date(d)
    }

    /// Local calendar day of an instant in any timezone
    #[must_use]
    pub fn from_local<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> DateHash {
        DateHash::from_local(dt)
    }

    /// Raw fields, verbatim
    #[must_use]
    pub fn from_fields(&self, year: i32, month: i32, date: i32) -> DateHash {
        DateHash::from_fields(year, month, date)
    }

    /// Column (0-6) of the 1st of `month`
    pub fn first_weekday(&self, year: i32, month: i32) -> Result<u32, CalendarError> {
        calendar::first_weekday_with(year, month, self.week_start)
    }

    /// Column (0-6) of the last day of `month`
    pub fn last_weekday(&self, year: i32, month: i32) -> Result<u32, CalendarError> {
        calendar::last_weekday_with(year, month, self.week_start)
    }

    /// Number of days in `month`
    pub fn last_date(&self, year: i32, month: i32) -> Result<u32, CalendarError> {
        calendar::last_date(year, month)
    }

    /// Grid rows needed to show `month`
    pub fn week_count(&self, year: i32, month: i32) -> Result<u32, CalendarError> {
        calendar::week_count_with(year, month, self.week_start)
    }

    /// Local midnight of `hash` in milliseconds since the epoch
    pub fn to_epoch_millis(&self, hash: DateHash) -> Result<i64, CalendarError> {
        calendar::to_epoch_millis(hash)
    }

    /// Midnight of `hash` in `tz`, in milliseconds since the epoch
    pub fn to_epoch_millis_in<Tz: TimeZone>(&self, hash: DateHash, tz: &Tz) -> Result<i64, CalendarError> {
        calendar::to_epoch_millis_in(hash, tz)
    }

    /// Materialize `hash`, carrying out-of-range fields
    pub fn to_native_date(&self, hash: DateHash) -> Result<NaiveDate, CalendarError> {
        calendar::to_native_date(hash)
    }

    /// Materialize raw fields, carrying out-of-range values
    pub fn to_native_date_from_fields(&self, year: i32, month: i32, date: i32) -> Result<NaiveDate, CalendarError> {
        calendar::to_native_date_from_fields(year, month, date)
    }

    /// Shift each field of `base` and renormalize
    pub fn offset_date(
        &self,
        delta_year: i32,
        delta_month: i32,
        delta_date: i32,
        base: DateHash,
    ) -> Result<DateHash, CalendarError> {
        calendar::offset_date(delta_year, delta_month, delta_date, base)
    }

    /// Two-digit padding for single digits
    #[must_use]
    pub fn pad_zero<N: Into<i64>>(&self, number: N) -> String {
        text::pad_zero(number)
    }

    /// Replace `pattern` matches with their substitution, or nothing
    #[must_use]
    pub fn apply_template<K, V>(&self, text: &str, substitutions: &HashMap<K, V>, pattern: &Regex) -> String
    where
        K: Borrow<str> + Eq + Hash,
        V: AsRef<str>,
    {
        text::apply_template(text, substitutions, pattern)
    }

    /// Rows of seven cells for `month`, in this calendar's week start
    pub fn month_grid(&self, year: i32, month: i32) -> Result<Vec<Week>, CalendarError> {
        grid::month_grid(year, month, self.week_start)
    }

    /// Fill a month title template such as `yyyy.mm`
    pub fn format_title(&self, year: i32, month: i32, title_format: &str) -> Result<String, CalendarError> {
        datetime::format_title(year, month, title_format)
    }
}
