//! Date conversions between HTML inputs, the backend wire format
//! (`DD-MM-YYYY HH:mm:ss`) and what the tables display.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Wire format for dates sent to the backend.
pub const API_DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
/// Format of `<input type="datetime-local">`.
pub const INPUT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Format of `<input type="date">`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of a date-range filter a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    StartOfDay,
    EndOfDay,
    /// `23:59:59.999`, used by the transport search.
    EndOfDayMillis,
}

fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    // datetime-local values carry a time part we do not need here
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, INPUT_DATE_FORMAT).ok()
}

/// `2024-01-31` + `EndOfDay` -> `31-01-2024 23:59:59`.
/// Returns `None` for empty or unparsable input.
pub fn format_range_bound(raw: &str, bound: DateBound) -> Option<String> {
    let date = parse_input_date(raw)?;
    let day = date.format("%d-%m-%Y");
    let time = match bound {
        DateBound::StartOfDay => "00:00:00",
        DateBound::EndOfDay => "23:59:59",
        DateBound::EndOfDayMillis => "23:59:59.999",
    };
    Some(format!("{day} {time}"))
}

pub fn parse_input_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, INPUT_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// `2024-03-15T14:02` -> `15-03-2024 14:02:00`.
pub fn format_api_datetime(raw: &str) -> Option<String> {
    parse_input_datetime(raw).map(|dt| dt.format(API_DATETIME_FORMAT).to_string())
}

/// Date-only input sent with a midnight time (employee joining date).
pub fn format_api_date_midnight(raw: &str) -> Option<String> {
    let date = parse_input_date(raw)?;
    Some(date.and_time(NaiveTime::MIN).format(API_DATETIME_FORMAT).to_string())
}

/// Converts a server timestamp to `DD-MM-YYYY HH:mm:ss` in `tz`.
///
/// Accepts RFC 3339, naive ISO timestamps and the wire format itself.
/// Anything else is returned unchanged.
pub fn format_display_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.with_timezone(tz).format(API_DATETIME_FORMAT).to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", API_DATETIME_FORMAT] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return naive.format(API_DATETIME_FORMAT).to_string();
        }
    }
    raw.to_string()
}

pub fn format_display(raw: &str) -> String {
    format_display_in(raw, &Local)
}

/// Current local time as a `datetime-local` input value.
pub fn local_input_now() -> String {
    Local::now().format(INPUT_DATETIME_FORMAT).to_string()
}

/// Wire value back into a `datetime-local` input value (edit forms).
pub fn api_to_input_datetime(raw: &str) -> String {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, API_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|dt| dt.format(INPUT_DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Wire value back into a `date` input value.
pub fn api_to_input_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date_part = trimmed.split([' ', 'T']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(date_part, INPUT_DATE_FORMAT))
        .map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn range_bounds() {
        assert_eq!(
            format_range_bound("2024-01-01", DateBound::StartOfDay).as_deref(),
            Some("01-01-2024 00:00:00")
        );
        assert_eq!(
            format_range_bound("2024-01-31", DateBound::EndOfDay).as_deref(),
            Some("31-01-2024 23:59:59")
        );
        assert_eq!(
            format_range_bound("2024-01-31", DateBound::EndOfDayMillis).as_deref(),
            Some("31-01-2024 23:59:59.999")
        );
    }

    #[test]
    fn invalid_range_bound_is_none() {
        assert_eq!(format_range_bound("", DateBound::StartOfDay), None);
        assert_eq!(format_range_bound("31/01/2024", DateBound::EndOfDay), None);
    }

    #[test]
    fn input_datetime_to_wire() {
        assert_eq!(
            format_api_datetime("2024-03-15T14:02").as_deref(),
            Some("15-03-2024 14:02:00")
        );
        assert_eq!(format_api_datetime("yesterday"), None);
    }

    #[test]
    fn joining_date_at_midnight() {
        assert_eq!(
            format_api_date_midnight("2023-07-09").as_deref(),
            Some("09-07-2023 00:00:00")
        );
    }

    #[test]
    fn display_converts_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            format_display_in("2024-03-15T10:00:00Z", &ist),
            "15-03-2024 15:30:00"
        );
    }

    #[test]
    fn display_keeps_garbage() {
        assert_eq!(format_display("not a date"), "not a date");
    }

    #[test]
    fn wire_back_to_inputs() {
        assert_eq!(api_to_input_datetime("15-03-2024 14:02:00"), "2024-03-15T14:02");
        assert_eq!(api_to_input_date("09-07-2023 00:00:00"), "2023-07-09");
        assert_eq!(api_to_input_date(""), "");
    }
}
