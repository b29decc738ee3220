use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{DashboardError, Result};

/// Short elapsed-time label such as `"2d 3h 15m"`, `"4h 0m"`, `"1m 30s"` or `"5s"`.
///
/// Each unit is a separate truncating difference over the whole span, then reduced
/// into its sub-range (hours mod 24, minutes and seconds mod 60). Once the span
/// reaches an hour the minutes are always printed, even when they are zero.
/// Returns `None` when either end is missing.
pub fn humanize_time_delta(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Option<String> {
    let (start, end) = (start?, end?);
    let span = end.signed_duration_since(start);

    let days = span.num_days();
    let hours = span.num_hours() % 24;
    let minutes = span.num_minutes() % 60;
    let seconds = span.num_seconds() % 60;

    if days >= 1 {
        let mut result = format!("{}d", days);
        if hours >= 1 {
            result.push_str(&format!(" {}h", hours));
        }
        if minutes >= 1 {
            result.push_str(&format!(" {}m", minutes));
        }
        return Some(result);
    }

    if hours >= 1 {
        return Some(format!("{}h {}m", hours, minutes));
    }

    if minutes >= 1 {
        let mut result = format!("{}m", minutes);
        if seconds >= 1 {
            result.push_str(&format!(" {}s", seconds));
        }
        return Some(result);
    }

    Some(format!("{}s", seconds))
}

/// [`humanize_time_delta`] over API timestamps. A present but unparseable value is an error.
pub fn humanize_time_delta_str(start: Option<&str>, end: Option<&str>) -> Result<Option<String>> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    Ok(humanize_time_delta(Some(start), Some(end)))
}

/// Parses RFC 3339, or a naive date-time / date which is taken as UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(DashboardError::invalid_timestamp(input))
}

/// Long English date, e.g. `"Monday, January 1, 2024"`.
pub fn format_long_date(date: DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
