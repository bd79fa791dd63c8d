//! Display formatting for the feed's date columns.
//!
//! Dates are rendered the way a Korean locale prints a calendar date
//! (`2023. 5. 17.`), in Korea Standard Time.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use serde_json::Value;
use tracing::debug;

const KST_OFFSET_HOURS: i64 = 9;

pub fn display_date(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(n)) => {
            let parsed = match n.as_i64() {
                Some(raw) => from_number(raw),
                None => n.as_f64().and_then(|raw| from_number(raw as i64)),
            };
            parsed.map(format_date).unwrap_or_else(|| {
                debug!(value = %n, "unrecognized numeric date");
                n.to_string()
            })
        }
        Some(Value::String(s)) if s.trim().is_empty() => String::new(),
        Some(Value::String(s)) => parse_text(s.trim()).map(format_date).unwrap_or_else(|| {
            debug!(value = %s, "unrecognized date text, keeping it verbatim");
            s.clone()
        }),
        Some(other) => other.to_string(),
    }
}

/// Today's date in the same display form, used to stamp edited racks.
pub fn today() -> String {
    format_date(kst_date(Utc::now()))
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}. {}. {}.", date.year(), date.month(), date.day())
}

fn kst_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant.naive_utc() + TimeDelta::hours(KST_OFFSET_HOURS)).date()
}

/// Numbers are either `yyyymmdd` written as an integer or epoch milliseconds.
fn from_number(raw: i64) -> Option<NaiveDate> {
    if (10000101..=99991231).contains(&raw)
        && let Some(date) = from_compact(raw)
    {
        return Some(date);
    }
    DateTime::<Utc>::from_timestamp_millis(raw).map(kst_date)
}

fn from_compact(raw: i64) -> Option<NaiveDate> {
    let year = i32::try_from(raw / 10_000).ok()?;
    let month = u32::try_from(raw / 100 % 100).ok()?;
    let day = u32::try_from(raw % 100).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(kst_date(instant.with_timezone(&Utc)));
    }
    if text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().ok().and_then(from_compact);
    }
    ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(text, format).ok().or_else(|| {
                chrono::NaiveDateTime::parse_from_str(text, format)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
}
