//! Error types for date-hash arithmetic.

/// Errors produced by the calendar functions.
///
/// Out-of-range fields are normally carried into neighbouring months and
/// years, so the only arithmetic failure is a date chrono cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Date out of representable range: {year}-{month}-{date}")]
    OutOfRange { year: i64, month: i64, date: i64 },

    #[error("Invalid date hash: {0}")]
    Parse(String),

    #[error("Invalid date format string: {0}")]
    Format(String),
}
