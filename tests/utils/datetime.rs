use datehash::utils::datetime::*;
use datehash::{CalendarError, DateHash};

#[test]
fn test_format_ymd() {
    let date = DateHash::from_fields(2025, 1, 15);
    assert_eq!(format_ymd(date).unwrap(), "2025-01-15");
}

#[test]
fn test_format_ymd_normalizes() {
    let date = DateHash::from_fields(2025, 1, 0);
    assert_eq!(format_ymd(date).unwrap(), "2024-12-31");
}

#[test]
fn test_format_date_custom() {
    let date = DateHash::from_fields(2023, 12, 25);
    assert_eq!(format_date(date, "%d/%m/%Y").unwrap(), "25/12/2023");
    assert_eq!(format_date(date, "%b %d").unwrap(), "Dec 25");
}

#[test]
fn test_format_date_rejects_bad_format() {
    let date = DateHash::from_fields(2023, 12, 25);
    assert_eq!(
        format_date(date, "%Q").unwrap_err(),
        CalendarError::Format("%Q".to_string())
    );
}

#[test]
fn test_is_valid_format() {
    assert!(is_valid_format(DEFAULT_DATE_FORMAT));
    assert!(is_valid_format("%A, %B %e"));
    assert!(!is_valid_format("%Q"));
}

#[test]
fn test_format_title_tokens() {
    assert_eq!(format_title(2010, 5, "yyyy.mm").unwrap(), "2010.05");
    assert_eq!(format_title(2010, 5, "m/yy").unwrap(), "5/10");
    assert_eq!(format_title(2005, 11, "yyyy년 m월").unwrap(), "2005년 11월");
}

#[test]
fn test_format_title_default() {
    assert_eq!(format_title(2024, 2, DEFAULT_TITLE_FORMAT).unwrap(), "2024.02");
}
