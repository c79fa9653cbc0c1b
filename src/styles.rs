// Display-style lookups for the dashboard enums
//
// Every lookup is an exhaustive match over a closed enum, adding a variant
// to the model fails to compile until it is given a style here.

use crate::model::{
    ActivityKind, HiveStatus, Priority, QueenStatus, Temperament, WeatherCondition,
};

/// Icon identifiers understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertTriangle,
    Info,
    CheckCircle,
    GreenHeart,
    Warning,
    Siren,
    Crown,
    Cross,
    Question,
    Heart,
    Sun,
    Cloud,
    CloudRain,
    Wind,
    Eye,
    Plus,
    FileText,
    Settings,
    Bell,
    Calendar,
    MapPin,
    Droplets,
    Thermometer,
    Bee,
}

impl Icon {
    /// Unicode glyph used when rendering the icon as text.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::AlertTriangle => "⚠",
            Icon::Info => "ℹ",
            Icon::CheckCircle => "✔",
            Icon::GreenHeart => "💚",
            Icon::Warning => "⚠️",
            Icon::Siren => "🚨",
            Icon::Crown => "👑",
            Icon::Cross => "❌",
            Icon::Question => "❓",
            Icon::Heart => "♥",
            Icon::Sun => "☀",
            Icon::Cloud => "☁",
            Icon::CloudRain => "🌧",
            Icon::Wind => "🌬",
            Icon::Eye => "👁",
            Icon::Plus => "➕",
            Icon::FileText => "📄",
            Icon::Settings => "⚙",
            Icon::Bell => "🔔",
            Icon::Calendar => "📅",
            Icon::MapPin => "📍",
            Icon::Droplets => "💧",
            Icon::Thermometer => "🌡",
            Icon::Bee => "🐝",
        }
    }
}

/// Design tokens for coloring. The rendering layer owns the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Accent,
    Amber,
    Destructive,
    Muted,
    Yellow,
    Gray,
    Slate,
    LightGray,
    Blue,
    DeepBlue,
    Green,
}

/// Presentation attributes for one enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    pub icon: Icon,
    pub tone: Tone,
    pub label: &'static str,
}

impl DisplayStyle {
    const fn new(icon: Icon, tone: Tone, label: &'static str) -> Self {
        Self { icon, tone, label }
    }
}

impl Priority {
    pub fn style(&self) -> DisplayStyle {
        match self {
            Priority::High => DisplayStyle::new(Icon::AlertTriangle, Tone::Destructive, "High"),
            Priority::Medium => DisplayStyle::new(Icon::Info, Tone::Amber, "Medium"),
            Priority::Low => DisplayStyle::new(Icon::CheckCircle, Tone::Accent, "Low"),
        }
    }
}

impl HiveStatus {
    pub fn style(&self) -> DisplayStyle {
        match self {
            HiveStatus::Healthy => DisplayStyle::new(Icon::GreenHeart, Tone::Accent, "Healthy"),
            HiveStatus::Attention => {
                DisplayStyle::new(Icon::Warning, Tone::Amber, "Needs Attention")
            }
            HiveStatus::Warning => DisplayStyle::new(Icon::Siren, Tone::Destructive, "Warning"),
        }
    }
}

impl QueenStatus {
    pub fn style(&self) -> DisplayStyle {
        match self {
            QueenStatus::Present => DisplayStyle::new(Icon::Crown, Tone::Amber, "Present"),
            QueenStatus::Missing => DisplayStyle::new(Icon::Cross, Tone::Destructive, "Missing"),
            QueenStatus::Unknown => DisplayStyle::new(Icon::Question, Tone::Muted, "Unknown"),
        }
    }
}

impl Temperament {
    pub fn style(&self) -> DisplayStyle {
        match self {
            Temperament::Calm => DisplayStyle::new(Icon::Heart, Tone::Accent, "Calm"),
            Temperament::Moderate => DisplayStyle::new(Icon::Heart, Tone::Amber, "Moderate"),
            Temperament::Aggressive => {
                DisplayStyle::new(Icon::Heart, Tone::Destructive, "Aggressive")
            }
        }
    }
}

impl WeatherCondition {
    pub fn style(&self) -> DisplayStyle {
        match self {
            WeatherCondition::Sunny => DisplayStyle::new(Icon::Sun, Tone::Yellow, "sunny"),
            WeatherCondition::PartlyCloudy => {
                DisplayStyle::new(Icon::Cloud, Tone::Gray, "partly cloudy")
            }
            WeatherCondition::Cloudy => DisplayStyle::new(Icon::Cloud, Tone::Slate, "cloudy"),
            WeatherCondition::Rain => DisplayStyle::new(Icon::CloudRain, Tone::Blue, "rain"),
            WeatherCondition::Storm => DisplayStyle::new(Icon::CloudRain, Tone::DeepBlue, "storm"),
            WeatherCondition::Snow => DisplayStyle::new(Icon::Cloud, Tone::LightGray, "snow"),
            WeatherCondition::Fog => DisplayStyle::new(Icon::Cloud, Tone::Gray, "fog"),
            WeatherCondition::Windy => DisplayStyle::new(Icon::Wind, Tone::Green, "windy"),
        }
    }
}

impl ActivityKind {
    pub fn style(&self) -> DisplayStyle {
        match self {
            ActivityKind::Inspection => DisplayStyle::new(Icon::Eye, Tone::Accent, "Inspection"),
            ActivityKind::Feeding => DisplayStyle::new(Icon::Droplets, Tone::Blue, "Feeding"),
            ActivityKind::Treatment => {
                DisplayStyle::new(Icon::Thermometer, Tone::Destructive, "Treatment")
            }
            ActivityKind::Harvest => DisplayStyle::new(Icon::Bee, Tone::Amber, "Harvest"),
            ActivityKind::Maintenance => {
                DisplayStyle::new(Icon::Settings, Tone::Muted, "Maintenance")
            }
            ActivityKind::WeatherAlert => {
                DisplayStyle::new(Icon::AlertTriangle, Tone::Amber, "Weather Alert")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_styles() {
        assert_eq!(Priority::High.style().icon, Icon::AlertTriangle);
        assert_eq!(Priority::High.style().tone, Tone::Destructive);
        assert_eq!(Priority::Medium.style().icon, Icon::Info);
        assert_eq!(Priority::Medium.style().tone, Tone::Amber);
        assert_eq!(Priority::Low.style().icon, Icon::CheckCircle);
        assert_eq!(Priority::Low.style().tone, Tone::Accent);
    }

    #[test]
    fn test_hive_status_labels() {
        assert_eq!(HiveStatus::Healthy.style().label, "Healthy");
        assert_eq!(HiveStatus::Attention.style().label, "Needs Attention");
        assert_eq!(HiveStatus::Warning.style().label, "Warning");
        assert_eq!(HiveStatus::Warning.style().icon.glyph(), "🚨");
    }

    #[test]
    fn test_queen_and_temperament_styles() {
        assert_eq!(QueenStatus::Present.style().icon.glyph(), "👑");
        assert_eq!(QueenStatus::Missing.style().tone, Tone::Destructive);
        assert_eq!(QueenStatus::Unknown.style().tone, Tone::Muted);
        assert_eq!(Temperament::Calm.style().tone, Tone::Accent);
        assert_eq!(Temperament::Aggressive.style().label, "Aggressive");
    }

    #[test]
    fn test_weather_styles_share_icons_but_not_tones() {
        assert_eq!(WeatherCondition::Rain.style().icon, Icon::CloudRain);
        assert_eq!(WeatherCondition::Storm.style().icon, Icon::CloudRain);
        assert_ne!(
            WeatherCondition::Rain.style().tone,
            WeatherCondition::Storm.style().tone
        );
        assert_eq!(WeatherCondition::Windy.style().icon, Icon::Wind);
        assert_eq!(WeatherCondition::Sunny.style().tone, Tone::Yellow);
    }

    #[test]
    fn test_weather_labels_replace_dashes() {
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
            assert_eq!(condition.style().label, condition.as_str().replace('-', " "));
        }
    }
}
