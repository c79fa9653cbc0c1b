// Formatting helpers shared by the dashboard views and the text report

use chrono::{DateTime, Utc};

use crate::model::Hive;

/// Whole days elapsed between `then` and `now`, "Today" under 24 hours.
///
/// Timestamps in the future are treated as today.
pub fn days_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match now.signed_duration_since(then).num_days() {
        days if days <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        days => format!("{} days ago", days),
    }
}

/// Coarse elapsed time for activity entries: minutes, hours, then days.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();

    if minutes < 1 {
        "Just now".to_string()
    } else if hours < 1 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// "Last inspected" text for a hive, "Never" if it has not been inspected.
pub fn last_inspected(hive: &Hive, now: DateTime<Utc>) -> String {
    match hive.last_inspection {
        Some(date) => days_ago(date, now),
        None => "Never".to_string(),
    }
}

/// Forecast row label: "Today" for the first day, else the short weekday.
pub fn forecast_day_label(index: usize, date: DateTime<Utc>) -> String {
    if index == 0 {
        "Today".to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// Upper-case the first character, e.g. "partly cloudy" -> "Partly cloudy".
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Temperature in whole degrees Celsius.
pub fn celsius(value: f32) -> String {
    format!("{:.0}°C", value)
}
