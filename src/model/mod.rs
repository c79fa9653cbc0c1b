// Data model for the beekeeping dashboard
// Records are produced by a data provider and consumed read-only by the
// selector, the style lookups and the views.

pub mod activity;
pub mod hive;
pub mod recommendation;
pub mod weather;

use serde::{Deserialize, Serialize};

pub use activity::{Activity, ActivityKind};
pub use hive::{Hive, HiveStatus, QueenStatus, Temperament};
pub use recommendation::{Priority, Recommendation};
pub use weather::{
    CurrentWeather, HourlyWeather, Timeframe, WeatherCondition, WeatherData, WeatherForecast,
};

/// Everything the dashboard displays at one point in time.
///
/// This is the unit handed over by a [`crate::provider::DashboardDataProvider`]
/// and the on-disk format of the file based provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub weather: WeatherData,
    #[serde(default)]
    pub hives: Vec<Hive>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl DashboardSnapshot {
    /// Look up a hive by id, used to resolve `hive_id` references.
    pub fn hive(&self, hive_id: &str) -> Option<&Hive> {
        self.hives.iter().find(|h| h.id == hive_id)
    }
}
