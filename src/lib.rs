// Library interface for beekeeper
// The GUI binary and the integration tests build on these modules

pub mod errors;
pub mod format;
pub mod model;
pub mod provider;
pub mod recommendations;
pub mod report;
pub mod styles;

// Re-export commonly used types
pub use errors::BeekeeperError;
pub use model::{DashboardSnapshot, Hive, Priority, Recommendation, Timeframe};
pub use provider::{DashboardDataProvider, FileDataProvider, MockDataProvider};
pub use recommendations::{SECONDARY_DISPLAY_LIMIT, Selection, rank_recommendations, select_for_display};
pub use styles::{DisplayStyle, Icon, Tone};
