use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BeekeeperError;

/// Overall health of a hive as last assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HiveStatus {
    Healthy,
    Attention,
    Warning,
}

impl HiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Attention => "attention",
            Self::Warning => "warning",
        }
    }
}

impl FromStr for HiveStatus {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "attention" => Ok(Self::Attention),
            "warning" => Ok(Self::Warning),
            other => Err(BeekeeperError::InvalidEnumValue {
                field: "hive status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueenStatus {
    Present,
    Missing,
    Unknown,
}

impl QueenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Missing => "missing",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for QueenStatus {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "missing" => Ok(Self::Missing),
            "unknown" => Ok(Self::Unknown),
            other => Err(BeekeeperError::InvalidEnumValue {
                field: "queen status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperament {
    Calm,
    Moderate,
    Aggressive,
}

impl Temperament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl FromStr for Temperament {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calm" => Ok(Self::Calm),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(BeekeeperError::InvalidEnumValue {
                field: "temperament",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for QueenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked beehive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hive {
    pub id: String,
    pub name: String,
    /// Free-form apiary location (e.g., "South Field")
    pub location: String,
    pub install_date: DateTime<Utc>,
    pub status: HiveStatus,
    pub queen_status: QueenStatus,
    pub temperament: Temperament,
    #[serde(default)]
    pub last_inspection: Option<DateTime<Utc>>,
    pub owner_id: String,
}
