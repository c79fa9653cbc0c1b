//! Plain-text rendering of a dashboard snapshot.
//!
//! Example output:
//! ```text
//! BeeKeeper Pro - Smart insights for successful beekeeping
//!
//! ⚠ Rain Expected Tomorrow [HIGH] [Weather]
//!   Heavy rain forecast for tomorrow afternoon.
//!   Action Required: Install rain covers and check hive ventilation
//!
//! Other Recommendations (1)
//!   ℹ Inspection Due [medium]
//! ...
//! ```

use chrono::{DateTime, Utc};

use crate::{
    format::{capitalize, celsius, days_ago, forecast_day_label, last_inspected, time_ago},
    model::{DashboardSnapshot, Recommendation, Timeframe, WeatherData},
    recommendations::{Selection, select_for_display},
};

/// Heading of the weather card, shared with the dashboard window.
pub const WEATHER_HEADING: &str = "Weather Forecast";
/// Sub-heading above the current readings.
pub const CURRENT_CONDITIONS_HEADING: &str = "Current Conditions";

/// Render the whole dashboard as text, in the same order as the GUI.
pub fn render_summary(
    snapshot: &DashboardSnapshot,
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> String {
    let mut output = String::new();
    output.push_str("BeeKeeper Pro - Smart insights for successful beekeeping\n\n");

    render_recommendations(&mut output, &select_for_display(&snapshot.recommendations));
    output.push('\n');
    render_weather(&mut output, &snapshot.weather, timeframe);
    output.push('\n');
    render_hives(&mut output, snapshot, now);
    output.push('\n');
    render_activity(&mut output, snapshot, now);

    output
}

fn render_recommendations(output: &mut String, selection: &Selection<'_>) {
    let Some(top) = selection.foregrounded() else {
        output.push_str("✔ All Clear!\n");
        output.push_str("  No urgent recommendations at this time. Keep up the great work!\n");
        return;
    };

    let style = top.priority.style();
    output.push_str(&format!(
        "{} {} [{}]",
        style.icon.glyph(),
        top.title,
        top.priority.as_str().to_uppercase()
    ));
    if top.weather_based {
        output.push_str(" [Weather]");
    }
    output.push('\n');
    output.push_str(&format!("  {}\n", top.description));
    output.push_str(&format!("  Action Required: {}\n", top.action));

    if selection.secondary_total_count() > 0 {
        output.push_str(&format!(
            "\nOther Recommendations ({})\n",
            selection.secondary_total_count()
        ));
        for rec in selection.secondary() {
            render_secondary(output, rec);
        }
    }
}

fn render_secondary(output: &mut String, rec: &Recommendation) {
    output.push_str(&format!(
        "  {} {} [{}]\n",
        rec.priority.style().icon.glyph(),
        rec.title,
        rec.priority
    ));
}

fn render_weather(output: &mut String, weather: &WeatherData, timeframe: Timeframe) {
    let current = &weather.current;
    let style = current.condition.style();
    output.push_str(&format!("{} {}\n", style.icon.glyph(), WEATHER_HEADING));
    output.push_str(&format!(
        "{}: {}, {}\n",
        CURRENT_CONDITIONS_HEADING,
        celsius(current.temperature),
        capitalize(style.label)
    ));
    output.push_str(&format!(
        "  Humidity {}% | Wind {} km/h {} | UV {} | {} hPa\n",
        current.humidity, current.wind_speed, current.wind_direction, current.uv_index, current.pressure
    ));

    match timeframe {
        Timeframe::Today => match weather.today() {
            Some(today) => output.push_str(&format!(
                "Today's Details: High {} / Low {}\n",
                celsius(today.high),
                celsius(today.low)
            )),
            None => output.push_str("Today's Details: no forecast available\n"),
        },
        Timeframe::FiveDay => {
            output.push_str("5-Day Forecast\n");
            if weather.forecast.is_empty() {
                output.push_str("  no forecast available\n");
            }
            for (index, day) in weather.forecast.iter().enumerate() {
                output.push_str(&format!(
                    "  {:<5} {} {:<13} {:>3}% rain  {} km/h  {:.0}°/{:.0}°\n",
                    forecast_day_label(index, day.date),
                    day.condition.style().icon.glyph(),
                    capitalize(day.condition.style().label),
                    day.precipitation,
                    day.wind_speed,
                    day.high,
                    day.low
                ));
            }
        }
    }
}

fn render_hives(output: &mut String, snapshot: &DashboardSnapshot, now: DateTime<Utc>) {
    output.push_str(&format!("My Hives ({})\n", snapshot.hives.len()));
    if snapshot.hives.is_empty() {
        output.push_str("  🐝 No Hives Yet\n");
        output.push_str(
            "  Add your first hive to start tracking inspections and get AI recommendations.\n",
        );
        return;
    }

    for (i, hive) in snapshot.hives.iter().enumerate() {
        let is_last = i == snapshot.hives.len() - 1;
        let (branch, continuation) = if is_last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let status = hive.status.style();
        output.push_str(&format!(
            "{}{} ({}) {} {}\n",
            branch,
            hive.name,
            hive.location,
            status.icon.glyph(),
            status.label
        ));
        output.push_str(&format!(
            "{}Queen: {} | Temperament: {} | Last inspected: {}\n",
            continuation,
            hive.queen_status.style().label,
            hive.temperament.style().label,
            last_inspected(hive, now)
        ));
        output.push_str(&format!(
            "{}Installed: {}\n",
            continuation,
            days_ago(hive.install_date, now)
        ));
    }
}

fn render_activity(output: &mut String, snapshot: &DashboardSnapshot, now: DateTime<Utc>) {
    output.push_str("Recent Activity\n");
    if snapshot.activity.is_empty() {
        output.push_str("  Nothing logged yet\n");
        return;
    }

    for activity in &snapshot.activity {
        let hive_name = activity
            .hive_id
            .as_deref()
            .and_then(|id| snapshot.hive(id))
            .map(|hive| hive.name.as_str());
        output.push_str(&format!(
            "  {} {} - {}\n",
            activity.kind.style().icon.glyph(),
            activity.title(hive_name),
            time_ago(activity.date, now)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DashboardDataProvider, MockDataProvider};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 30, 12, 0, 0).unwrap()
    }

    fn sample() -> DashboardSnapshot {
        MockDataProvider::new(now()).snapshot().unwrap()
    }

    #[test]
    fn test_summary_foregrounds_high_priority() {
        let summary = render_summary(&sample(), Timeframe::FiveDay, now());

        assert!(summary.contains("⚠ Rain Expected Tomorrow [HIGH] [Weather]"));
        assert!(summary.contains("Action Required: Install rain covers"));
        assert!(summary.contains("Other Recommendations (1)"));
        assert!(summary.contains("ℹ Inspection Due [medium]"));
    }

    #[test]
    fn test_summary_all_clear() {
        let mut snapshot = sample();
        snapshot.recommendations.clear();
        let summary = render_summary(&snapshot, Timeframe::FiveDay, now());

        assert!(summary.contains("All Clear!"));
        assert!(!summary.contains("Other Recommendations"));
    }

    #[test]
    fn test_other_recommendations_label_counts_all_remaining() {
        let mut snapshot = sample();
        let template = snapshot.recommendations[1].clone();
        for i in 0..4 {
            let mut extra = template.clone();
            extra.id = format!("extra-{}", i);
            extra.title = format!("Extra {}", i);
            snapshot.recommendations.push(extra);
        }
        let summary = render_summary(&snapshot, Timeframe::FiveDay, now());

        assert!(summary.contains("Other Recommendations (5)"));
        assert!(summary.contains("Inspection Due"));
        assert!(summary.contains("Extra 0"));
        assert!(!summary.contains("Extra 1"));
    }

    #[test]
    fn test_weather_timeframes() {
        let snapshot = sample();

        let five_day = render_summary(&snapshot, Timeframe::FiveDay, now());
        assert!(five_day.contains("5-Day Forecast"));
        assert!(five_day.contains("Today"));
        assert!(five_day.contains("Sat"));
        assert!(five_day.contains("☁ Weather Forecast\nCurrent Conditions: 24°C, Partly cloudy\n"));

        let today = render_summary(&snapshot, Timeframe::Today, now());
        assert!(today.contains("Today's Details: High 26°C / Low 18°C"));
        assert!(!today.contains("5-Day Forecast"));
    }

    #[test]
    fn test_every_section_ends_its_lines() {
        let summary = render_summary(&sample(), Timeframe::FiveDay, now());

        assert!(summary.ends_with('\n'));
        assert!(summary.contains("[HIGH] [Weather]\n  Heavy rain"));
        assert!(summary.contains("\n\nOther Recommendations (1)\n  ℹ Inspection Due [medium]\n"));
        assert!(summary.contains("\nMy Hives (2)\n├── "));
        assert!(!summary.contains("\n\n\n"));
    }

    #[test]
    fn test_hives_and_activity() {
        let summary = render_summary(&sample(), Timeframe::Today, now());

        assert!(summary.contains("My Hives (2)"));
        assert!(summary.contains("├── Queen Anne (South Field) 💚 Healthy"));
        assert!(summary.contains("└── Golden Hive (North Meadow) ⚠️ Needs Attention"));
        assert!(summary.contains("Last inspected: 2 days ago"));
        assert!(summary.contains("Queen Anne Inspected - 2 days ago"));
        assert!(summary.contains("Weather Alert Created - 5 hours ago"));
    }

    #[test]
    fn test_empty_hives_and_forecast() {
        let mut snapshot = sample();
        snapshot.hives.clear();
        snapshot.weather.forecast.clear();

        let summary = render_summary(&snapshot, Timeframe::Today, now());
        assert!(summary.contains("My Hives (0)"));
        assert!(summary.contains("No Hives Yet"));
        assert!(summary.contains("no forecast available"));
    }
}
