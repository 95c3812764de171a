/// View models: everything the dashboard draws, computed from the dataset and
/// the current selection without touching egui.
///
/// Each view is a pure function of `(Dataset, SelectionState)`. A view that
/// cannot be built returns a [`Notice`] instead, and the other views are
/// unaffected.
pub mod comparison;
pub mod distribution;
pub mod overview;
pub mod projection;
pub mod songs;

use crate::config;
use crate::data::model::Dataset;
use crate::state::SelectionState;

pub use comparison::FeatureComparison;
pub use distribution::ClusterDistribution;
pub use overview::ClusterOverview;
pub use projection::PcaProjection;
pub use songs::ExampleSongs;

// ---------------------------------------------------------------------------
// Notices and outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message shown in place of (or above) a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }

    /// Notice for columns a view needs but the dataset lacks.
    pub fn missing_columns(view: &str, columns: &[&str]) -> Self {
        log::warn!("{view} unavailable, missing columns {columns:?}");
        Self::error(format!(
            "{view} unavailable: the dataset has no {} column{}.",
            columns
                .iter()
                .map(|c| format!("'{c}'"))
                .collect::<Vec<_>>()
                .join(", "),
            if columns.len() == 1 { "" } else { "s" }
        ))
    }
}

/// Result of building one view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome<T> {
    Ready(T),
    Degraded(Notice),
}

impl<T> ViewOutcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewOutcome::Ready(v) => Some(v),
            ViewOutcome::Degraded(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            ViewOutcome::Ready(_) => None,
            ViewOutcome::Degraded(n) => Some(n),
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardView – all views for one selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub overview: ViewOutcome<ClusterOverview>,
    pub distribution: ViewOutcome<ClusterDistribution>,
    pub projection: ViewOutcome<PcaProjection>,
    pub songs: ViewOutcome<ExampleSongs>,
    pub comparison: ViewOutcome<FeatureComparison>,
}

impl DashboardView {
    pub fn render(dataset: &Dataset, selection: &SelectionState) -> Self {
        let cluster = selection.cluster_choice();
        Self {
            overview: overview::cluster_overview(dataset, cluster),
            distribution: distribution::cluster_distribution(dataset),
            projection: projection::pca_projection(dataset),
            songs: songs::example_songs(dataset, cluster, config::EXAMPLE_ROW_LIMIT),
            comparison: comparison::feature_comparison(dataset, selection.selected_features()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::dataset_from_reader;
    use crate::data::model::{CellValue, Feature};
    use crate::state::SelectionEvent;

    #[test]
    fn test_two_cluster_scenario() {
        let ds = fixtures::two_cluster_dataset();
        let mut sel = SelectionState::for_dataset(&ds);
        sel.apply(&ds, SelectionEvent::ChooseCluster(CellValue::Integer(0)));
        sel.apply(&ds, SelectionEvent::ClearFeatures);
        sel.apply(&ds, SelectionEvent::ToggleFeature(Feature::Energy));

        let view = DashboardView::render(&ds, &sel);

        assert_eq!(view.overview.ready().unwrap().count, 3);

        let slices = &view.distribution.ready().unwrap().slices;
        assert_eq!(slices.len(), 2);
        assert!((slices[0].percent - 75.0).abs() < 1e-9);
        assert!((slices[1].percent - 25.0).abs() < 1e-9);

        let bars = &view.comparison.ready().unwrap().bars;
        assert_eq!(bars.len(), 2);
        assert!((bars[0].mean.unwrap() - 0.5).abs() < 1e-9);
        assert!((bars[1].mean.unwrap() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_failures_stay_local() {
        // no pc columns, no name columns, no features
        let ds = dataset_from_reader("cluster\n0\n0\n1\n".as_bytes()).unwrap();
        let sel = SelectionState::for_dataset(&ds);

        let view = DashboardView::render(&ds, &sel);

        assert_eq!(view.overview.ready().unwrap().count, 2);
        assert!(view.distribution.ready().is_some());
        assert_eq!(view.projection.notice().unwrap().level, NoticeLevel::Info);
        assert_eq!(view.songs.notice().unwrap().level, NoticeLevel::Error);
        assert_eq!(view.comparison.notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_missing_columns_notice_text() {
        let notice = Notice::missing_columns("Example songs", &["name_song", "energy"]);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("'name_song', 'energy'"));
        assert!(notice.text.ends_with("columns."));
    }
}
