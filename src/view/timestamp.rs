use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::{Display, Write};

use crate::error::{Result, StatusError};

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Renders backend timestamps in a fixed display format.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    format: String,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl TimestampFormatter {
    pub fn new(format: &str) -> Result<Self> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(StatusError::Config(format!(
                "invalid timestamp format: {format}"
            )));
        }
        Ok(Self {
            format: format.to_string(),
        })
    }

    /// Format in the machine's local time zone.
    pub fn format(&self, value: Option<&str>) -> String {
        self.format_in(value, &Local)
    }

    /// Absent or empty input gives "N/A"; text that is not a date gives
    /// "Invalid Date" instead of an error.
    pub fn format_in<Tz>(&self, value: Option<&str>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let value = match value.map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => return NOT_AVAILABLE.to_string(),
        };

        match parse_in(value, tz) {
            Some(date) => {
                let mut out = String::new();
                match write!(out, "{}", date.format(&self.format)) {
                    Ok(()) => out,
                    Err(_) => INVALID_DATE.to_string(),
                }
            }
            None => INVALID_DATE.to_string(),
        }
    }
}

fn parse_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(tz));
    }

    // Date-times without an offset are wall-clock time where the viewer is
    for pattern in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
            return from_wall_clock(&naive, tz);
        }
    }

    // A bare date means midnight UTC
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// A wall-clock time skipped by a forward DST shift is moved past the gap.
fn from_wall_clock<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(date) = tz.from_local_datetime(naive).earliest() {
        return Some(date);
    }
    let shifted = *naive + Duration::hours(1);
    let date = tz
        .from_local_datetime(&shifted)
        .earliest()
        .unwrap_or_else(|| Utc.from_utc_datetime(naive).with_timezone(tz));
    Some(date)
}
