use std::sync::Arc;

use crate::color::ClusterColors;
use crate::config;
use crate::data::loader::{DatasetCache, LoadError};
use crate::data::model::{CellValue, Dataset, Feature};
use crate::view::DashboardView;

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// What the user has picked. Changed only through [`SelectionEvent`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Always a member of the dataset's cluster set; `None` only when that
    /// set is empty.
    cluster_choice: Option<CellValue>,
    /// Subset of [`Feature::ALL`] in the order the user picked them.
    selected_features: Vec<Feature>,
}

/// A discrete user action on the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    ChooseCluster(CellValue),
    ToggleFeature(Feature),
    SelectAllFeatures,
    ClearFeatures,
}

impl SelectionState {
    /// Defaults for a freshly loaded dataset: the smallest cluster label and
    /// the default feature trio.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            cluster_choice: dataset.clusters.first().cloned(),
            selected_features: config::DEFAULT_FEATURES.to_vec(),
        }
    }

    pub fn cluster_choice(&self) -> Option<&CellValue> {
        self.cluster_choice.as_ref()
    }

    pub fn selected_features(&self) -> &[Feature] {
        &self.selected_features
    }

    pub fn is_selected(&self, feature: Feature) -> bool {
        self.selected_features.contains(&feature)
    }

    /// Apply an event. Returns whether anything changed.
    pub fn apply(&mut self, dataset: &Dataset, event: SelectionEvent) -> bool {
        match event {
            SelectionEvent::ChooseCluster(cluster) => {
                if !dataset.clusters.contains(&cluster) {
                    log::warn!("Ignoring selection of unknown cluster {cluster}");
                    return false;
                }
                if self.cluster_choice.as_ref() == Some(&cluster) {
                    return false;
                }
                self.cluster_choice = Some(cluster);
            }
            SelectionEvent::ToggleFeature(feature) => {
                if let Some(pos) = self.selected_features.iter().position(|f| *f == feature) {
                    self.selected_features.remove(pos);
                } else {
                    self.selected_features.push(feature);
                }
            }
            SelectionEvent::SelectAllFeatures => {
                if self.selected_features == Feature::ALL {
                    return false;
                }
                self.selected_features = Feature::ALL.to_vec();
            }
            SelectionEvent::ClearFeatures => {
                if self.selected_features.is_empty() {
                    return false;
                }
                self.selected_features.clear();
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Anything the UI asks the state to do, collected during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Select(SelectionEvent),
    RetryLoad,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<Dataset>>,

    /// Last load failure, shown as a banner instead of the dashboard.
    pub load_error: Option<LoadError>,

    pub selection: Option<SelectionState>,

    /// Colour per cluster label.
    pub colors: Option<ClusterColors>,

    /// Views derived from the dataset and selection, rebuilt after each change.
    pub view: Option<DashboardView>,
}

impl AppState {
    /// Fetch the dataset from `cache` and build the initial views.
    pub fn load(&mut self, cache: &DatasetCache) {
        match cache.get() {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                self.dataset = None;
                self.selection = None;
                self.colors = None;
                self.view = None;
                self.load_error = Some(e);
            }
        }
    }

    /// Ingest a loaded dataset, apply the default selection and render.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.selection = Some(SelectionState::for_dataset(&dataset));
        self.colors = Some(ClusterColors::new(&dataset.clusters));
        self.dataset = Some(dataset);
        self.load_error = None;
        self.rerender();
    }

    /// Handle one event. Views are rebuilt only when the selection changed.
    pub fn dispatch(&mut self, event: AppEvent, cache: &DatasetCache) {
        match event {
            AppEvent::RetryLoad => self.load(cache),
            AppEvent::Select(event) => {
                let (Some(dataset), Some(selection)) = (&self.dataset, &mut self.selection) else {
                    log::warn!("Selection event {event:?} with no dataset loaded");
                    return;
                };
                if selection.apply(dataset, event) {
                    self.rerender();
                }
            }
        }
    }

    fn rerender(&mut self) {
        self.view = match (&self.dataset, &self.selection) {
            (Some(dataset), Some(selection)) => {
                log::debug!("Rendering views for {selection:?}");
                Some(DashboardView::render(dataset, selection))
            }
            _ => None,
        };
    }
}
