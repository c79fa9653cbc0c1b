use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BeekeeperError;

/// How urgently a recommendation should be acted upon.
///
/// Priorities are totally ordered: `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank used for ordering: high=3, medium=2, low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(BeekeeperError::InvalidEnumValue {
                field: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// A prioritized suggestion shown to a beekeeper, derived from weather or
/// inspection history by an upstream recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique within a display session
    pub id: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// What the beekeeper is asked to do
    pub action: String,
    /// Whether the recommendation was triggered by the forecast
    pub weather_based: bool,
    pub created_at: DateTime<Utc>,
    /// The hive this recommendation is about, if any
    #[serde(default)]
    pub hive_id: Option<String>,
}
