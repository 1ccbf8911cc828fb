//! Per-field type coercion
//!
//! - int: base-10 signed 64-bit, surrounding whitespace ignored
//! - text: passthrough, never fails
//! - date: permissive parse, time of day discarded

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::errors::ConversionError;
use super::value::Value;
use crate::schema::FieldType;

/// `%Y` also accepts one to three digits; a parsed year below this came
/// from a short year token and is rejected so a `%y` layout can claim it.
const MIN_FULL_YEAR: i32 = 1000;

/// Date-time layouts tried after RFC 3339 and RFC 2822. Only the date part
/// is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%y %I:%M%p",
    "%B %d %Y %H:%M",
    "%B %d %Y %I:%M %p",
    "%B %d %Y %I:%M%p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M%p",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

/// Date-only layouts, month-first before day-first.
///
/// `%B` and `%A` accept both full and abbreviated names. Two-digit years
/// (`%y`) resolve to 1970-2069.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d-%B-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %d %B %Y",
    "%A %d %B %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%m-%d-%y",
    "%d-%m-%y",
    "%y-%m-%d",
    "%m.%d.%y",
    "%d.%m.%y",
    "%d %B %y",
    "%d-%B-%y",
    "%B %d, %y",
    "%B %d %y",
];

/// Converts one raw token to the declared type.
pub fn convert(raw: &str, field_type: FieldType) -> Result<Value, ConversionError> {
    match field_type {
        FieldType::Int => parse_int(raw).map(Value::Int),
        FieldType::Text => Ok(Value::Text(raw.to_string())),
        FieldType::Date => parse_date(raw).map(Value::Date),
    }
}

pub fn parse_int(raw: &str) -> Result<i64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }
    Ok(trimmed.parse::<i64>()?)
}

/// Parses a calendar date from ISO, US, day-first, and month-name layouts.
///
/// The first layout yielding a four-digit year wins.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }

    let zoned = DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
        .ok()
        .map(|dt| dt.date_naive());
    let local = DATETIME_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date());
    let plain = DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok());

    zoned
        .into_iter()
        .chain(local)
        .chain(plain)
        .find(|date| date.year() >= MIN_FULL_YEAR)
        .ok_or(ConversionError::UnrecognizedDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("1234567"), Ok(1234567));
        assert_eq!(parse_int(" 21 "), Ok(21));
        assert_eq!(parse_int("-8"), Ok(-8));
        assert_eq!(parse_int("+8"), Ok(8));
    }

    #[test]
    fn test_parse_int_failures() {
        assert_eq!(parse_int(""), Err(ConversionError::Empty));
        assert!(matches!(parse_int("21A"), Err(ConversionError::InvalidInt(_))));
        assert!(matches!(parse_int("1.5"), Err(ConversionError::InvalidInt(_))));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2023-05-15"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("2023/05/15"), Ok(ymd(2023, 5, 15)));
    }

    #[test]
    fn test_parse_date_drops_time_of_day() {
        assert_eq!(parse_date("2023-05-15T23:59:59"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("2023-05-15 08:30"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("2023-05-15T10:30:00+02:00"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("05/15/2023 12:00:00 AM"), Ok(ymd(2023, 5, 15)));
    }

    #[test]
    fn test_parse_us_date() {
        assert_eq!(parse_date("05/15/2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("5/15/2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("05-15-2023"), Ok(ymd(2023, 5, 15)));
    }

    #[test]
    fn test_parse_two_digit_years() {
        assert_eq!(parse_date("5/15/23"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("05/15/23"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("15-May-23"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("1/2/3"), Ok(ymd(2003, 1, 2)));
        assert_eq!(parse_date("99-01-01"), Ok(ymd(1999, 1, 1)));
    }

    #[test]
    fn test_short_year_never_lands_in_first_millennium() {
        assert_eq!(parse_date("5/15/023"), Err(ConversionError::UnrecognizedDate));
        assert_eq!(parse_date("0023-05-15"), Err(ConversionError::UnrecognizedDate));
    }

    #[test]
    fn test_parse_day_first_and_compact_dates() {
        assert_eq!(parse_date("20230515"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("15/05/2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("15.05.2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("15-05-2023"), Ok(ymd(2023, 5, 15)));
        // Ambiguous day and month read month-first
        assert_eq!(parse_date("05/06/2023"), Ok(ymd(2023, 5, 6)));
    }

    #[test]
    fn test_parse_month_name_dates() {
        assert_eq!(parse_date("15 May 2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("May 15, 2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("September 3 2021"), Ok(ymd(2021, 9, 3)));
        assert_eq!(parse_date("03-Sep-2021"), Ok(ymd(2021, 9, 3)));
        assert_eq!(parse_date("Mon, 15 May 2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("Monday, May 15, 2023"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("May 15 2023 10:30AM"), Ok(ymd(2023, 5, 15)));
        assert_eq!(parse_date("May 15, 2023 10:30 PM"), Ok(ymd(2023, 5, 15)));
        assert_eq!(
            parse_date("Mon, 15 May 2023 10:30:00 +0000"),
            Ok(ymd(2023, 5, 15))
        );
    }

    #[test]
    fn test_parse_date_failures() {
        assert_eq!(parse_date("not a date"), Err(ConversionError::UnrecognizedDate));
        assert_eq!(parse_date("2023-13-45"), Err(ConversionError::UnrecognizedDate));
        assert_eq!(parse_date("  "), Err(ConversionError::Empty));
    }

    #[test]
    fn test_text_never_fails() {
        assert_eq!(convert("", FieldType::Text), Ok(Value::Text(String::new())));
        assert_eq!(
            convert(" No Parking", FieldType::Text),
            Ok(Value::Text(" No Parking".into()))
        );
    }

    #[test]
    fn test_convert_dispatches_on_type() {
        assert_eq!(convert("21", FieldType::Int), Ok(Value::Int(21)));
        assert_eq!(
            convert("2023-05-16", FieldType::Date),
            Ok(Value::Date(ymd(2023, 5, 16)))
        );
        assert!(convert("21", FieldType::Date).is_err());
    }
}
