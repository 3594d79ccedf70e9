//! Calendar arithmetic on [`DateHash`] values.
//!
//! Every function here funnels through [`to_native_date_from_fields`], which
//! accepts out-of-range fields and carries them the way a calendar does:
//! month 13 is January of the next year, day 0 is the last day of the
//! previous month, and so on. No other validation is performed.
//!
//! Weekday indices count from the start of the week. The plain functions use
//! a Sunday start; the `_with` variants take an explicit [`WeekStart`].

use crate::date_hash::DateHash;
use crate::error::CalendarError;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

/// First column of a week in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0-6) of `weekday` in a week starting on `self`
    #[must_use]
    pub fn weekday_index(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Weekday shown in the first column
    #[must_use]
    pub fn first_day(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Carry possibly out-of-range fields into a real date.
///
/// Months are folded into the year with euclidean division; the day offset is
/// then added to the first of the resulting month.
fn normalize(year: i64, month: i64, date: i64) -> Result<NaiveDate, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange { year, month, date };

    let month0 = month - 1;
    let carried_year = year + month0.div_euclid(12);
    let carried_month = month0.rem_euclid(12) as u32 + 1;

    let first = i32::try_from(carried_year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, carried_month, 1))
        .ok_or_else(out_of_range)?;

    let normalized = Duration::try_days(date - 1)
        .and_then(|offset| first.checked_add_signed(offset))
        .ok_or_else(out_of_range)?;

    if (normalized.year() as i64, normalized.month() as i64, normalized.day() as i64) != (year, month, date) {
        log::trace!(
            "Carried {}-{}-{} to {}",
            year,
            month,
            date,
            normalized.format("%Y-%m-%d")
        );
    }

    Ok(normalized)
}

/// Materialize a date from raw fields. `month` is 1-based.
pub fn to_native_date_from_fields(year: i32, month: i32, date: i32) -> Result<NaiveDate, CalendarError> {
    normalize(year.into(), month.into(), date.into())
}

/// Materialize a date hash, carrying out-of-range fields.
pub fn to_native_date(hash: DateHash) -> Result<NaiveDate, CalendarError> {
    to_native_date_from_fields(hash.year, hash.month, hash.date)
}

/// Weekday of the 1st of `month`, Sunday = 0
pub fn first_weekday(year: i32, month: i32) -> Result<u32, CalendarError> {
    first_weekday_with(year, month, WeekStart::Sunday)
}

/// Weekday index of the 1st of `month` for the given week start
pub fn first_weekday_with(year: i32, month: i32, week_start: WeekStart) -> Result<u32, CalendarError> {
    let first = to_native_date_from_fields(year, month, 1)?;
    Ok(week_start.weekday_index(first.weekday()))
}

/// Weekday of the last day of `month`, Sunday = 0
pub fn last_weekday(year: i32, month: i32) -> Result<u32, CalendarError> {
    last_weekday_with(year, month, WeekStart::Sunday)
}

/// Weekday index of the last day of `month` for the given week start
pub fn last_weekday_with(year: i32, month: i32, week_start: WeekStart) -> Result<u32, CalendarError> {
    let last = last_day_of_month(year, month)?;
    Ok(week_start.weekday_index(last.weekday()))
}

/// Number of days in `month` (28-31)
pub fn last_date(year: i32, month: i32) -> Result<u32, CalendarError> {
    Ok(last_day_of_month(year, month)?.day())
}

/// Rows a 7-column grid needs to show `month`, Sunday first (4-6)
pub fn week_count(year: i32, month: i32) -> Result<u32, CalendarError> {
    week_count_with(year, month, WeekStart::Sunday)
}

/// Rows a 7-column grid needs to show `month` for the given week start
pub fn week_count_with(year: i32, month: i32, week_start: WeekStart) -> Result<u32, CalendarError> {
    let leading = first_weekday_with(year, month, week_start)?;
    let days = last_date(year, month)?;
    Ok((leading + days).div_ceil(7))
}

// Day 0 of the next month.
fn last_day_of_month(year: i32, month: i32) -> Result<NaiveDate, CalendarError> {
    normalize(year.into(), i64::from(month) + 1, 0)
}

/// Milliseconds since the Unix epoch of local midnight on `hash`
pub fn to_epoch_millis(hash: DateHash) -> Result<i64, CalendarError> {
    to_epoch_millis_in(hash, &Local)
}

/// Milliseconds since the Unix epoch of midnight on `hash` in `tz`
///
/// An ambiguous midnight resolves to the earliest instant. A midnight that
/// falls in a DST gap resolves to the first valid quarter hour after it.
pub fn to_epoch_millis_in<Tz: TimeZone>(hash: DateHash, tz: &Tz) -> Result<i64, CalendarError> {
    let midnight = to_native_date(hash)?.and_time(NaiveTime::MIN);

    if let Some(instant) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(instant.timestamp_millis());
    }

    log::warn!("Local midnight of {} does not exist, using the first valid time after it", hash);
    (1..=24 * 4)
        .find_map(|quarter| {
            let shifted = midnight + Duration::minutes(15 * quarter);
            tz.from_local_datetime(&shifted).earliest()
        })
        .map(|instant| instant.timestamp_millis())
        .ok_or(CalendarError::OutOfRange {
            year: hash.year.into(),
            month: hash.month.into(),
            date: hash.date.into(),
        })
}

/// Shift each field of `base` by a signed delta and renormalize
///
/// # Examples
/// ```
/// use datehash::{calendar::offset_date, DateHash};
/// let base = DateHash::from_fields(2010, 1, 1);
/// assert_eq!(offset_date(0, 0, -1, base).unwrap(), DateHash::from_fields(2009, 12, 31));
/// ```
pub fn offset_date(
    delta_year: i32,
    delta_month: i32,
    delta_date: i32,
    base: DateHash,
) -> Result<DateHash, CalendarError> {
    let shifted = normalize(
        i64::from(base.year) + i64::from(delta_year),
        i64::from(base.month) + i64::from(delta_month),
        i64::from(base.date) + i64::from(delta_date),
    )?;
    Ok(DateHash::from(shifted))
}
