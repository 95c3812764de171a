use std::path::Path;

use eframe::egui::{self, RichText, Ui};

use crate::color;
use crate::config::DashboardConfig;
use crate::data::loader::LoadError;
use crate::data::model::Feature;
use crate::state::{AppEvent, AppState, SelectionEvent, SelectionState};
use crate::view::Notice;

// ---------------------------------------------------------------------------
// Left side panel – cluster selector
// ---------------------------------------------------------------------------

/// Render the cluster selector and dataset summary.
pub fn side_panel(ui: &mut Ui, state: &AppState, source: &Path, events: &mut Vec<AppEvent>) {
    ui.add_space(8.0);
    ui.label(RichText::new("🎯 Select Cluster").heading().color(color::ACCENT));
    ui.separator();

    let (Some(dataset), Some(selection)) = (&state.dataset, &state.selection) else {
        ui.label("No dataset loaded.");
        return;
    };

    if dataset.clusters.is_empty() {
        ui.label("The dataset has no cluster labels.");
    } else {
        let current = selection
            .cluster_choice()
            .map(|c| format!("Cluster {c}"))
            .unwrap_or_default();

        egui::ComboBox::from_id_salt("cluster_choice")
            .selected_text(current)
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui: &mut Ui| {
                for cluster in &dataset.clusters {
                    let is_current = selection.cluster_choice() == Some(cluster);
                    let mut text = RichText::new(format!("Cluster {cluster}"));
                    if let Some(colors) = &state.colors {
                        text = text.color(colors.color_for(Some(cluster)));
                    }
                    if ui.selectable_label(is_current, text).clicked() {
                        events.push(AppEvent::Select(SelectionEvent::ChooseCluster(cluster.clone())));
                    }
                }
            });
    }

    ui.add_space(16.0);
    ui.separator();
    ui.small(format!("{} songs", dataset.len()));
    ui.small(format!("{} clusters", dataset.clusters.len()));
    ui.small(format!("Source: {}", source.display()));
}

// ---------------------------------------------------------------------------
// Central panel pieces
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui, config: &DashboardConfig) {
    ui.add_space(8.0);
    ui.label(
        RichText::new(format!("🎵 {} Dashboard", config.title))
            .size(28.0)
            .strong()
            .color(color::ACCENT),
    );
    ui.label("Discover your music clusters like a DJ mixing tracks 🎧");
}

/// Shown instead of the dashboard when the dataset could not be loaded.
pub fn load_error(ui: &mut Ui, error: &LoadError, events: &mut Vec<AppEvent>) {
    crate::ui::notice(ui, &Notice::error(error.to_string()));
    ui.add_space(8.0);
    if ui.button("Retry").clicked() {
        events.push(AppEvent::RetryLoad);
    }
}

/// Multi-select of the features shown in the comparison chart.
pub fn feature_picker(ui: &mut Ui, selection: &SelectionState, events: &mut Vec<AppEvent>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select features to visualize 🎼:");
        if ui.small_button("All").clicked() {
            events.push(AppEvent::Select(SelectionEvent::SelectAllFeatures));
        }
        if ui.small_button("None").clicked() {
            events.push(AppEvent::Select(SelectionEvent::ClearFeatures));
        }
    });
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for feature in Feature::ALL {
            let mut checked = selection.is_selected(feature);
            if ui.checkbox(&mut checked, feature.column()).changed() {
                events.push(AppEvent::Select(SelectionEvent::ToggleFeature(feature)));
            }
        }
    });
}
