use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BeekeeperError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Inspection,
    Feeding,
    Treatment,
    Harvest,
    Maintenance,
    WeatherAlert,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inspection => "inspection",
            Self::Feeding => "feeding",
            Self::Treatment => "treatment",
            Self::Harvest => "harvest",
            Self::Maintenance => "maintenance",
            Self::WeatherAlert => "weather-alert",
        }
    }

    /// Past-tense verb used in activity titles ("Queen Anne Inspected").
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Inspection => "Inspected",
            Self::Feeding => "Fed",
            Self::Treatment => "Treated",
            Self::Harvest => "Harvested",
            Self::Maintenance => "Maintained",
            Self::WeatherAlert => "Created",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inspection" => Ok(Self::Inspection),
            "feeding" => Ok(Self::Feeding),
            "treatment" => Ok(Self::Treatment),
            "harvest" => Ok(Self::Harvest),
            "maintenance" => Ok(Self::Maintenance),
            "weather-alert" => Ok(Self::WeatherAlert),
            other => Err(BeekeeperError::InvalidEnumValue {
                field: "activity kind",
                value: other.to_string(),
            }),
        }
    }
}

/// A logged beekeeping activity, shown in the recent activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    #[serde(default)]
    pub hive_id: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub user_id: String,
}

impl Activity {
    /// Human readable title, e.g. "Queen Anne Inspected" or
    /// "Weather Alert Created".
    ///
    /// `hive_name` is the resolved name of `hive_id`; activities without a
    /// known hive fall back to the activity kind.
    pub fn title(&self, hive_name: Option<&str>) -> String {
        let subject = match (self.kind, hive_name) {
            (ActivityKind::WeatherAlert, _) => "Weather Alert",
            (_, Some(name)) => name,
            (ActivityKind::Inspection, None) => "Hive",
            (ActivityKind::Feeding, None) => "Colony",
            (ActivityKind::Treatment, None) => "Colony",
            (ActivityKind::Harvest, None) => "Honey",
            (ActivityKind::Maintenance, None) => "Equipment",
        };
        format!("{} {}", subject, self.kind.past_tense())
    }
}
