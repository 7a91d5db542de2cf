//! Per-value coercions applied while building the derived tables.
//!
//! All coercions here are total: an unrecognized categorical value becomes
//! false, an unparseable month/day combination becomes `None`. Failing rows
//! are a parser or extraction concern, never a coercion one.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static DOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.").expect("valid literal pattern"));

/// Fixed calendar year for synthesized contact dates. The source data
/// carries only month and day.
const CONTACT_YEAR: &str = "2022";

/// Extract a scalar JSON value as a string.
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// True iff the value is exactly `truthy` (case-sensitive).
///
/// Anything else, including a missing or mistyped value, is false. This
/// mirrors the source system, which coerces rather than validates.
pub fn flag(value: &Value, truthy: &str) -> bool {
    as_string(value).map(|s| s == truthy).unwrap_or(false)
}

/// Replace every "." with "_".
pub fn underscore_dots(value: &str) -> String {
    DOTS.replace_all(value, "_").to_string()
}

/// Map the literal "unknown" to `None`, keeping every other value.
pub fn optional_category(value: &str) -> Option<String> {
    match value {
        "unknown" => None,
        other => Some(other.to_string()),
    }
}

/// Synthesize a contact date from an abbreviated month name and a
/// day-of-month, with the year fixed at 2022.
///
/// The composed string `"{month}{day:02}{year}"` is parsed with the
/// `%b%d%Y` format; any combination that fails to parse (unknown month,
/// day outside the month, non-numeric day) yields `None`.
pub fn contact_date(month: &Value, day: &Value) -> Option<NaiveDate> {
    let month = as_string(month)?;
    let day: u32 = as_string(day)?.trim().parse().ok()?;
    let composed = format!("{}{:02}{}", month, day, CONTACT_YEAR);

    NaiveDate::parse_from_str(&composed, "%b%d%Y").ok()
}
