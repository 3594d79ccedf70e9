//! Month grids as drawn by a 7-column calendar.

use crate::calendar::{self, WeekStart};
use crate::constants::WEEKDAY_LABELS;
use crate::date_hash::DateHash;
use crate::error::CalendarError;
use chrono::Datelike;

/// One row of a month grid. Cells outside the month are `None`.
pub type Week = [Option<DateHash>; 7];

/// Lay out `month` in rows of seven days
///
/// The grid has [`calendar::week_count_with`] rows. The month is normalized
/// first, so `(2010, 13)` lays out January 2011.
pub fn month_grid(year: i32, month: i32, week_start: WeekStart) -> Result<Vec<Week>, CalendarError> {
    let first = calendar::to_native_date_from_fields(year, month, 1)?;
    let (year, month) = (first.year(), first.month() as i32);

    let leading = calendar::first_weekday_with(year, month, week_start)? as usize;
    let days = calendar::last_date(year, month)?;
    let weeks = calendar::week_count_with(year, month, week_start)? as usize;

    let mut grid = vec![[None; 7]; weeks];
    for date in 1..=days {
        let cell = leading + date as usize - 1;
        grid[cell / 7][cell % 7] = Some(DateHash::from_fields(year, month, date as i32));
    }

    Ok(grid)
}

/// Column headers for a grid starting on `week_start`
#[must_use]
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    let first = week_start.first_day().num_days_from_sunday() as usize;
    std::array::from_fn(|col| WEEKDAY_LABELS[(first + col) % 7])
}
