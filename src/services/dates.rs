//! Brazilian date formatting
//!
//! The store keeps plain dates (`2024-03-17`) and instants in UTC
//! (`2024-03-17T22:00:00Z`). Pages show them as `dd/mm/yyyy`, and instants
//! additionally with the São Paulo wall-clock time.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Shown when a record has no date at all
pub const MISSING_DATE: &str = "Data não definida";
/// Shown when the stored value cannot be parsed
pub const INVALID_DATE: &str = "Data inválida";

/// São Paulo has had no daylight saving time since 2019
const BRASILIA_OFFSET_SECS: i32 = -3 * 3600;

fn brasilia() -> FixedOffset {
    FixedOffset::east_opt(BRASILIA_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse a stored date or instant into a point in time
pub fn parse_instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// `dd/mm/yyyy`, or a fallback label
///
/// Plain dates are shown as stored, without any timezone shift.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return MISSING_DATE.to_string();
    };
    if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    match parse_instant(raw) {
        Some(instant) => instant.with_timezone(&brasilia()).format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// `dd/mm/yyyy HH:MM` in Brasília time, or a fallback label
pub fn format_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return MISSING_DATE.to_string();
    };
    match parse_instant(raw) {
        Some(instant) => instant
            .with_timezone(&brasilia())
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Day and month of a birth date, `dd/mm`
pub fn format_day_month(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    let date = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;
    Some(date.format("%d/%m").to_string())
}

/// Two-digit number of the current month in Brasília
pub fn current_month() -> String {
    Utc::now().with_timezone(&brasilia()).format("%m").to_string()
}
