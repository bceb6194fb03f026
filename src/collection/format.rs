use chrono::{DateTime, TimeDelta, Utc};

/// Shown wherever a date is missing or does not parse.
pub const UNKNOWN_DATE: &str = "Unknown";

/// Short textual date, e.g. "Oct 18, 2026".
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Coarse distance for "ends in ..." phrasing.
pub fn format_distance(delta: TimeDelta) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    if delta.num_days() >= 1 {
        plural(delta.num_days(), "day")
    } else if delta.num_hours() >= 1 {
        plural(delta.num_hours(), "hour")
    } else if delta.num_minutes() >= 1 {
        plural(delta.num_minutes(), "minute")
    } else {
        "less than a minute".to_string()
    }
}
