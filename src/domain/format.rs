// src/domain/format.rs

use crate::domain::application::Status;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const MISSING: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

/// Parses whatever date representation the store hands back: a plain
/// calendar day, an RFC 3339 timestamp, or a naive timestamp.
pub fn parse_store_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Long display form ("March 9, 2024").
///
/// Absent dates read "N/A"; anything unparsable reads "Invalid Date" rather
/// than failing the page.
pub fn format_long_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => MISSING.to_string(),
        Some(s) => match parse_store_date(s) {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => {
                tracing::debug!(raw = s, "unparsable application date");
                INVALID_DATE.to_string()
            }
        },
    }
}

/// Value for an `<input type="date">`: the calendar-day part of a stored date.
pub fn date_input_value(raw: Option<&str>) -> String {
    raw.and_then(|s| s.split('T').next())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// CSS class for a status badge; unknown statuses get no category.
pub fn status_badge_class(status: &str) -> &'static str {
    match Status::from_label_ignore_case(status) {
        Some(Status::Applied) => "status-applied",
        Some(Status::Interviewing) => "status-interviewing",
        Some(Status::Offer) => "status-offer",
        Some(Status::Rejected) => "status-rejected",
        None => "",
    }
}

pub fn status_label(status: &str) -> &str {
    if status.is_empty() {
        MISSING
    } else {
        status
    }
}
