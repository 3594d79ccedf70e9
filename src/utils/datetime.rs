//! Date formatting helpers
//!
//! Thin wrappers that turn a [`DateHash`] into display strings with chrono
//! format strings, and fill month-title templates such as `yyyy.mm`.

use crate::calendar;
use crate::date_hash::DateHash;
use crate::error::CalendarError;
use crate::utils::text::{apply_template, pad_zero};
use chrono::format::{Item, StrftimeItems};
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write;

/// Default date format for display and config files
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default month title template
pub const DEFAULT_TITLE_FORMAT: &str = "yyyy.mm";

/// Tokens recognized in month title templates. Longer tokens come first so
/// `yyyy` is never read as two `yy`.
static TITLE_TOKENS: Lazy<Regex> = Lazy::new(|| Regex::new("yyyy|yy|mm|m").expect("valid title token pattern"));

/// Check that a chrono format string has no invalid specifiers
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Format a date hash with a chrono format string
///
/// The hash is normalized first, so `{2010, 13, 1}` formats as January 2011.
///
/// # Arguments
/// * `hash` - Date to format
/// * `fmt` - chrono `strftime`-style format string
///
/// # Returns
/// * `Result<String, CalendarError>` - Formatted date, or an error for an
///   unrepresentable date or a bad format string
pub fn format_date(hash: DateHash, fmt: &str) -> Result<String, CalendarError> {
    let date = calendar::to_native_date(hash)?;
    let mut out = String::new();
    write!(out, "{}", date.format(fmt)).map_err(|_| CalendarError::Format(fmt.to_string()))?;
    Ok(out)
}

/// Format a date hash as `YYYY-MM-DD`
pub fn format_ymd(hash: DateHash) -> Result<String, CalendarError> {
    format_date(hash, DEFAULT_DATE_FORMAT)
}

/// Fill a month title template
///
/// Recognized tokens are `yyyy` (full year), `yy` (two-digit year), `mm`
/// (zero-padded month) and `m` (month). The month is normalized first.
pub fn format_title(year: i32, month: i32, title_format: &str) -> Result<String, CalendarError> {
    let first = calendar::to_native_date_from_fields(year, month, 1)?;
    let month = first.month();

    let mut substitutions = HashMap::new();
    substitutions.insert("yyyy", first.year().to_string());
    substitutions.insert("yy", pad_zero(first.year().rem_euclid(100)));
    substitutions.insert("mm", pad_zero(month));
    substitutions.insert("m", month.to_string());

    Ok(apply_template(title_format, &substitutions, &TITLE_TOKENS))
}
