// Data providers feeding the dashboard
//
// The views never own their data: a provider is handed to them at
// construction time and asked for a fresh snapshot on every reload.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use log::{debug, info};
use serde_jsonlines::JsonLinesReader;

use crate::{
    BeekeeperError,
    model::{
        Activity, ActivityKind, CurrentWeather, DashboardSnapshot, Hive, HiveStatus, Priority,
        QueenStatus, Recommendation, Temperament, WeatherCondition, WeatherData, WeatherForecast,
    },
};

/// Source of everything the dashboard displays.
pub trait DashboardDataProvider {
    /// Produce the current dashboard data.
    fn snapshot(&self) -> Result<DashboardSnapshot, BeekeeperError>;

    /// Short description used in logs and the status line.
    fn name(&self) -> &str;
}

/// Built-in sample data for development and demos.
///
/// Dates are computed relative to `now`, so the sample always shows a
/// forecast starting today.
pub struct MockDataProvider {
    now: DateTime<Utc>,
}

impl MockDataProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    fn weather(&self) -> WeatherData {
        let day = |offset: i64, high: f32, low: f32, condition, precipitation, wind_speed| {
            WeatherForecast {
                date: self.now + Duration::days(offset),
                high,
                low,
                condition,
                precipitation,
                wind_speed,
            }
        };

        WeatherData {
            current: CurrentWeather {
                temperature: 24.,
                humidity: 65.,
                wind_speed: 8.,
                wind_direction: "NW".to_string(),
                condition: WeatherCondition::PartlyCloudy,
                pressure: 1013.,
                uv_index: 6.,
            },
            forecast: vec![
                day(0, 26., 18., WeatherCondition::Sunny, 0., 5.),
                day(1, 28., 20., WeatherCondition::PartlyCloudy, 10., 7.),
                day(2, 22., 16., WeatherCondition::Rain, 80., 12.),
                day(3, 25., 17., WeatherCondition::Cloudy, 20., 8.),
                day(4, 27., 19., WeatherCondition::Sunny, 0., 6.),
            ],
            hourly: Vec::new(),
        }
    }

    fn hives(&self) -> Vec<Hive> {
        vec![
            Hive {
                id: "1".to_string(),
                name: "Queen Anne".to_string(),
                location: "South Field".to_string(),
                install_date: date(2024, 4, 15),
                status: HiveStatus::Healthy,
                queen_status: QueenStatus::Present,
                temperament: Temperament::Calm,
                last_inspection: Some(date(2024, 8, 28)),
                owner_id: "user1".to_string(),
            },
            Hive {
                id: "2".to_string(),
                name: "Golden Hive".to_string(),
                location: "North Meadow".to_string(),
                install_date: date(2024, 5, 20),
                status: HiveStatus::Attention,
                queen_status: QueenStatus::Unknown,
                temperament: Temperament::Moderate,
                last_inspection: Some(date(2024, 8, 25)),
                owner_id: "user1".to_string(),
            },
        ]
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        vec![
            Recommendation {
                id: "1".to_string(),
                priority: Priority::High,
                title: "Rain Expected Tomorrow".to_string(),
                description: "Heavy rain forecast for tomorrow afternoon. Your hives need protection from moisture.".to_string(),
                action: "Install rain covers and check hive ventilation".to_string(),
                weather_based: true,
                created_at: self.now,
                hive_id: None,
            },
            Recommendation {
                id: "2".to_string(),
                priority: Priority::Medium,
                title: "Inspection Due".to_string(),
                description: "Golden Hive hasn't been inspected for 8 days during peak season."
                    .to_string(),
                action: "Schedule inspection within next 2 days".to_string(),
                weather_based: false,
                created_at: self.now,
                hive_id: Some("2".to_string()),
            },
        ]
    }

    fn activity(&self) -> Vec<Activity> {
        vec![
            Activity {
                id: "1".to_string(),
                kind: ActivityKind::Inspection,
                hive_id: Some("1".to_string()),
                date: self.now - Duration::days(2),
                notes: String::new(),
                user_id: "user1".to_string(),
            },
            Activity {
                id: "2".to_string(),
                kind: ActivityKind::WeatherAlert,
                hive_id: None,
                date: self.now - Duration::hours(5),
                notes: String::new(),
                user_id: "user1".to_string(),
            },
        ]
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

impl DashboardDataProvider for MockDataProvider {
    fn snapshot(&self) -> Result<DashboardSnapshot, BeekeeperError> {
        Ok(DashboardSnapshot {
            weather: self.weather(),
            hives: self.hives(),
            recommendations: self.recommendations(),
            activity: self.activity(),
        })
    }

    fn name(&self) -> &str {
        "sample data"
    }
}

/// Reads a JSON [`DashboardSnapshot`] from disk.
///
/// Recommendations can come from a separate JSON-lines feed, one
/// [`Recommendation`] per line, replacing those in the snapshot file.
pub struct FileDataProvider {
    snapshot_path: PathBuf,
    recommendations_feed: Option<PathBuf>,
    name: String,
}

impl FileDataProvider {
    pub fn new(snapshot_path: PathBuf) -> Self {
        let name = snapshot_path.display().to_string();
        Self {
            snapshot_path,
            recommendations_feed: None,
            name,
        }
    }

    pub fn with_recommendations_feed(mut self, feed_path: PathBuf) -> Self {
        self.recommendations_feed = Some(feed_path);
        self
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    fn read_snapshot(&self) -> Result<DashboardSnapshot, BeekeeperError> {
        let file = File::open(&self.snapshot_path).map_err(|e| BeekeeperError::DataFileError {
            path: self.snapshot_path.clone(),
            source: e,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            BeekeeperError::DataParseError {
                path: self.snapshot_path.clone(),
                source: e,
            }
        })
    }
}

/// Read every recommendation from a JSON-lines feed.
///
/// Blank lines are skipped. Malformed lines and unknown enum tags reject
/// the whole feed.
pub fn read_recommendations_feed(path: &Path) -> Result<Vec<Recommendation>, BeekeeperError> {
    let to_error = |e: io::Error| BeekeeperError::DataFeedError {
        path: path.to_path_buf(),
        source: e,
    };

    let contents = std::fs::read_to_string(path).map_err(to_error)?;
    let records = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{}\n", line))
        .collect::<String>();

    JsonLinesReader::new(records.as_bytes())
        .read_all::<Recommendation>()
        .collect::<io::Result<Vec<Recommendation>>>()
        .map_err(to_error)
}

impl DashboardDataProvider for FileDataProvider {
    fn snapshot(&self) -> Result<DashboardSnapshot, BeekeeperError> {
        let mut snapshot = self.read_snapshot()?;
        debug!(
            "Read {} hives and {} recommendations from {}",
            snapshot.hives.len(),
            snapshot.recommendations.len(),
            self.snapshot_path.display()
        );

        if let Some(feed_path) = &self.recommendations_feed {
            snapshot.recommendations = read_recommendations_feed(feed_path)?;
            info!(
                "Loaded {} recommendations from feed {}",
                snapshot.recommendations.len(),
                feed_path.display()
            );
        }

        Ok(snapshot)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
