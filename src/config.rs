use crate::data::model::Feature;

pub use crate::paths::ARTIFACT_PATH;

// ---------------------------------------------------------------------------
// Fixed settings
// ---------------------------------------------------------------------------

/// Maximum number of rows in the example-songs table.
pub const EXAMPLE_ROW_LIMIT: usize = 20;

/// Features pre-selected in the comparison picker.
pub const DEFAULT_FEATURES: [Feature; 3] = [Feature::Danceability, Feature::Energy, Feature::Valence];

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

/// Window parameters. There is no config file; the values are fixed at build
/// time.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Amazon Music Clustering".to_string(),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
        }
    }
}
