use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BeekeeperError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Fog,
    Windy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Storm => "storm",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Windy => "windy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunny" => Ok(Self::Sunny),
            "partly-cloudy" => Ok(Self::PartlyCloudy),
            "cloudy" => Ok(Self::Cloudy),
            "rain" => Ok(Self::Rain),
            "storm" => Ok(Self::Storm),
            "snow" => Ok(Self::Snow),
            "fog" => Ok(Self::Fog),
            "windy" => Ok(Self::Windy),
            other => Err(BeekeeperError::InvalidEnumValue {
                field: "weather condition",
                value: other.to_string(),
            }),
        }
    }
}

/// Which part of the forecast the weather card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "5day")]
    FiveDay,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::FiveDay => "5day",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = BeekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "5day" => Ok(Self::FiveDay),
            other => Err(BeekeeperError::InvalidTimeframe {
                value: other.to_string(),
            }),
        }
    }
}

/// Conditions at the apiary right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Degrees Celsius
    pub temperature: f32,
    /// Relative humidity, percent
    pub humidity: f32,
    /// km/h
    pub wind_speed: f32,
    /// Compass direction, e.g. "NW"
    pub wind_direction: String,
    pub condition: WeatherCondition,
    /// hPa
    pub pressure: f32,
    pub uv_index: f32,
}

/// One day of the multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub date: DateTime<Utc>,
    pub high: f32,
    pub low: f32,
    pub condition: WeatherCondition,
    /// Chance of precipitation, percent
    pub precipitation: f32,
    pub wind_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeather {
    pub time: DateTime<Utc>,
    pub temperature: f32,
    pub condition: WeatherCondition,
    pub precipitation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentWeather,
    #[serde(default)]
    pub forecast: Vec<WeatherForecast>,
    #[serde(default)]
    pub hourly: Vec<HourlyWeather>,
}

impl WeatherData {
    /// Today's forecast entry, the first day of the forecast.
    pub fn today(&self) -> Option<&WeatherForecast> {
        self.forecast.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_wire_names() {
        assert_eq!(
            serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap(),
            "\"partly-cloudy\""
        );
        let parsed: WeatherCondition = serde_json::from_str("\"storm\"").unwrap();
        assert_eq!(parsed, WeatherCondition::Storm);
        assert!(serde_json::from_str::<WeatherCondition>("\"hail\"").is_err());
    }

    #[test]
    fn test_condition_from_str_matches_wire_names() {
        let all = [
            WeatherCondition::Sunny,
            WeatherCondition::PartlyCloudy,
            WeatherCondition::Cloudy,
            WeatherCondition::Rain,
            WeatherCondition::Storm,
            WeatherCondition::Snow,
            WeatherCondition::Fog,
            WeatherCondition::Windy,
        ];
        for condition in all {
            assert_eq!(condition.as_str().parse::<WeatherCondition>().unwrap(), condition);
        }
        assert!("partly cloudy".parse::<WeatherCondition>().is_err());
    }

    #[test]
    fn test_timeframe_parsing() {
        assert_eq!("today".parse::<Timeframe>().unwrap(), Timeframe::Today);
        assert_eq!("5day".parse::<Timeframe>().unwrap(), Timeframe::FiveDay);
        assert_eq!(Timeframe::default(), Timeframe::FiveDay);
        assert!(matches!(
            "week".parse::<Timeframe>(),
            Err(BeekeeperError::InvalidTimeframe { .. })
        ));
        assert_eq!(serde_json::to_string(&Timeframe::FiveDay).unwrap(), "\"5day\"");
    }

    #[test]
    fn test_today_is_none_for_empty_forecast() {
        let weather = WeatherData {
            current: CurrentWeather {
                temperature: 20.,
                humidity: 50.,
                wind_speed: 3.,
                wind_direction: "N".to_string(),
                condition: WeatherCondition::Fog,
                pressure: 1010.,
                uv_index: 1.,
            },
            forecast: Vec::new(),
            hourly: Vec::new(),
        };
        assert!(weather.today().is_none());
    }
}
