use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use beekeeper::{BeekeeperError, Timeframe};

const CONFIG_DIR_NAME: &str = "beekeeper";
const CONFIG_FILE_NAME: &str = "config.json";

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1100.;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) selected_timeframe: Timeframe,
    pub(crate) show_all_recommendations: bool,
    pub(crate) window_width: f32,
    pub(crate) window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selected_timeframe: Timeframe::FiveDay,
            show_all_recommendations: false,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl AppConfig {
    fn config_path() -> Result<PathBuf, BeekeeperError> {
        Ok(dirs::config_dir()
            .ok_or(BeekeeperError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Load the saved config, `None` when nothing has been saved yet.
    pub(crate) fn from_local_file() -> Result<Option<Self>, BeekeeperError> {
        Self::from_path(&Self::config_path()?)
    }

    pub(crate) fn from_path(config_path: &Path) -> Result<Option<Self>, BeekeeperError> {
        if !config_path.exists() {
            return Ok(None);
        }

        let file = std::fs::File::open(config_path)
            .map_err(|e| BeekeeperError::ConfigIOError { source: e })?;
        serde_json::from_reader(file)
            .map(Some)
            .map_err(|e| BeekeeperError::ConfigParseError {
                path: config_path.to_path_buf(),
                source: e,
            })
    }

    pub(crate) fn save(&self) -> Result<(), BeekeeperError> {
        self.save_to(&Self::config_path()?)
    }

    pub(crate) fn save_to(&self, config_path: &Path) -> Result<(), BeekeeperError> {
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| BeekeeperError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| BeekeeperError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| BeekeeperError::ConfigSerializeError { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        assert!(AppConfig::from_path(&path).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = AppConfig {
            selected_timeframe: Timeframe::Today,
            show_all_recommendations: true,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::from_path(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"selected_timeframe": "today"}"#).unwrap();

        let config = AppConfig::from_path(&path).unwrap().unwrap();
        assert_eq!(config.selected_timeframe, Timeframe::Today);
        assert!(!config.show_all_recommendations);
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            AppConfig::from_path(&path),
            Err(BeekeeperError::ConfigParseError { .. })
        ));
    }
}
