use eframe::egui::{self, ScrollArea, Ui};

use crate::color;
use crate::config::DashboardConfig;
use crate::data::loader::{self, DatasetCache};
use crate::state::{AppEvent, AppState};
use crate::ui::{charts, notice, panels, section_heading, table};
use crate::view::{DashboardView, ViewOutcome};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ClusterDashboardApp {
    pub config: DashboardConfig,
    pub state: AppState,
    cache: &'static DatasetCache,
}

impl ClusterDashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        let cache = loader::shared();
        let mut state = AppState::default();
        state.load(cache);
        Self { config, state, cache }
    }
}

impl eframe::App for ClusterDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<AppEvent> = Vec::new();

        if let Some(error) = &self.state.load_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::header(ui, &self.config);
                ui.add_space(12.0);
                panels::load_error(ui, error, &mut events);
            });
        } else {
            // ---- Left side panel: cluster selector ----
            egui::SidePanel::left("cluster_panel")
                .frame(egui::Frame::side_top_panel(&ctx.style()).fill(color::SIDEBAR))
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &self.state, self.cache.path(), &mut events);
                });

            // ---- Central panel: views ----
            egui::CentralPanel::default().show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui: &mut Ui| {
                        panels::header(ui, &self.config);
                        dashboard(ui, &self.state, &mut events);
                    });
            });
        }

        // Apply after drawing so this frame saw one consistent state.
        for event in events {
            self.state.dispatch(event, self.cache);
        }
    }
}

fn dashboard(ui: &mut Ui, state: &AppState, events: &mut Vec<AppEvent>) {
    let (Some(view), Some(colors), Some(selection)) = (&state.view, &state.colors, &state.selection) else {
        return;
    };
    let DashboardView {
        overview,
        distribution,
        projection,
        songs,
        comparison,
    } = view;

    match overview {
        ViewOutcome::Ready(o) => {
            section_heading(ui, &format!("📊 Cluster {} Overview", o.cluster));
            notice(ui, &o.banner());
        }
        ViewOutcome::Degraded(n) => {
            section_heading(ui, "📊 Cluster Overview");
            notice(ui, n);
        }
    }

    section_heading(ui, "🍩 Cluster Distribution of Songs");
    match distribution {
        ViewOutcome::Ready(d) => charts::distribution_donut(ui, d, colors),
        ViewOutcome::Degraded(n) => notice(ui, n),
    }

    match projection {
        ViewOutcome::Ready(p) => {
            section_heading(ui, "🌈 Clusters in PCA Projection");
            charts::projection_scatter(ui, p, colors);
        }
        ViewOutcome::Degraded(n) => {
            ui.add_space(12.0);
            notice(ui, n);
        }
    }

    section_heading(ui, "🎤 Example Songs in this Cluster");
    match songs {
        ViewOutcome::Ready(s) => table::example_songs(ui, s),
        ViewOutcome::Degraded(n) => notice(ui, n),
    }

    section_heading(ui, "🎨 Interactive Feature Comparison");
    panels::feature_picker(ui, selection, events);
    ui.add_space(8.0);
    match comparison {
        ViewOutcome::Ready(c) => {
            ui.strong("📊 Average Feature Values per Cluster");
            charts::comparison_bars(ui, c, colors);
        }
        ViewOutcome::Degraded(n) => notice(ui, n),
    }
    ui.add_space(24.0);
}
