mod ui;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use egui::Vec2;
use log::{error, info, warn};

use beekeeper::{
    BeekeeperError, DashboardDataProvider, FileDataProvider, MockDataProvider, Timeframe,
    report::render_summary,
};
use ui::dashboard::{DashboardApp, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the dashboard window
    Dashboard {
        /// JSON snapshot with weather, hives, recommendations and activity
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// JSON lines file with one recommendation per line
        #[arg(short, long)]
        recommendations: Option<PathBuf>,
    },
    /// Print the dashboard as text
    Summary {
        #[arg(short, long)]
        data: Option<PathBuf>,

        #[arg(short, long)]
        recommendations: Option<PathBuf>,

        #[arg(short, long, default_value_t = Timeframe::FiveDay)]
        timeframe: Timeframe,
    },
}

/// Pick the data source for both subcommands: the snapshot file when
/// `--data` is given, the built-in sample data otherwise.
fn build_provider(
    data: Option<PathBuf>,
    recommendations: Option<PathBuf>,
    now: DateTime<Utc>,
) -> Box<dyn DashboardDataProvider> {
    match data {
        Some(path) => {
            let mut provider = FileDataProvider::new(path);
            if let Some(feed) = recommendations {
                provider = provider.with_recommendations_feed(feed);
            }
            Box::new(provider)
        }
        None => {
            if recommendations.is_some() {
                warn!("--recommendations is ignored without --data");
            }
            Box::new(MockDataProvider::new(now))
        }
    }
}

fn dashboard(data: Option<PathBuf>, recommendations: Option<PathBuf>) -> Result<(), BeekeeperError> {
    let app_config = match AppConfig::from_local_file() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring unreadable config file: {}", e);
            AppConfig::default()
        }
    };

    let provider = build_provider(data, recommendations, Utc::now());
    info!("Starting dashboard with {}", provider.name());

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("BeeKeeper Pro")
        .with_inner_size(Vec2::new(app_config.window_width, app_config.window_height));

    eframe::run_native(
        "BeeKeeper Pro",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(provider, app_config, cc)))),
    )
    .map_err(|e| BeekeeperError::UiError {
        reason: e.to_string(),
    })
}

fn summary(
    data: Option<PathBuf>,
    recommendations: Option<PathBuf>,
    timeframe: Timeframe,
) -> Result<(), BeekeeperError> {
    let provider = build_provider(data, recommendations, Utc::now());
    let snapshot = provider.snapshot()?;
    print!("{}", render_summary(&snapshot, timeframe, Utc::now()));
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    }) {
        warn!("Could not set Ctrl-C handler: {}", e);
    }

    let result = match cli.command {
        Commands::Dashboard {
            data,
            recommendations,
        } => dashboard(data, recommendations),
        Commands::Summary {
            data,
            recommendations,
            timeframe,
        } => summary(data, recommendations, timeframe),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_data_without_data_path() {
        let provider = build_provider(None, None, now());
        assert_eq!(provider.name(), "sample data");
        assert_eq!(provider.snapshot().unwrap().hives.len(), 2);
    }

    #[test]
    fn test_feed_without_data_path_uses_sample_data() {
        let provider = build_provider(None, Some(PathBuf::from("/tmp/feed.jsonl")), now());
        assert_eq!(provider.name(), "sample data");
        assert_eq!(provider.snapshot().unwrap().recommendations.len(), 2);
    }

    #[test]
    fn test_data_path_selects_file_provider() {
        let path = PathBuf::from("/tmp/beekeeper-missing-dashboard.json");
        let provider = build_provider(Some(path.clone()), None, now());
        assert_eq!(provider.name(), path.display().to_string());
        assert!(matches!(
            provider.snapshot(),
            Err(BeekeeperError::DataFileError { .. })
        ));
    }

    #[test]
    fn test_saved_config_does_not_change_data_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"last_data_path": "/tmp/old.json"}"#).unwrap();

        // Stale keys from older configs are ignored
        assert!(AppConfig::from_path(&config_path).unwrap().is_some());
        assert_eq!(build_provider(None, None, now()).name(), "sample data");
    }
}
