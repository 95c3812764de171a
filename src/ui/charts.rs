use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, Points};

use crate::color::{ClusterColors, BACKGROUND};
use crate::view::comparison::FeatureComparison;
use crate::view::distribution::ClusterDistribution;
use crate::view::projection::PcaProjection;

// ---------------------------------------------------------------------------
// Cluster distribution donut
// ---------------------------------------------------------------------------

/// Fraction of the radius left empty in the middle.
const DONUT_HOLE: f32 = 0.4;

/// Outer ring segments per full turn; each slice is a fan of convex pieces.
const SEGMENTS_PER_TURN: f32 = 128.0;

pub fn distribution_donut(ui: &mut Ui, dist: &ClusterDistribution, colors: &ClusterColors) {
    ui.horizontal(|ui: &mut Ui| {
        let size = 280.0;
        let (response, painter) = ui.allocate_painter(egui::vec2(size, size), Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.48;

        // slice angles, starting at 12 o'clock, clockwise
        let mut start = -TAU / 4.0;
        let mut spans = Vec::with_capacity(dist.slices.len());
        for slice in &dist.slices {
            let sweep = TAU * slice.count as f32 / dist.total as f32;
            spans.push((start, start + sweep));
            start += sweep;
        }

        for (slice, &(a0, a1)) in dist.slices.iter().zip(&spans) {
            let fill = colors.color_for(Some(&slice.cluster));
            let steps = ((a1 - a0) / TAU * SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
            for i in 0..steps {
                let t0 = a0 + (a1 - a0) * i as f32 / steps as f32;
                let t1 = a0 + (a1 - a0) * (i + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![center, polar(center, radius, t0), polar(center, radius, t1)],
                    fill,
                    Stroke::NONE,
                ));
            }
            if dist.slices.len() > 1 {
                painter.line_segment(
                    [polar(center, radius * DONUT_HOLE, a0), polar(center, radius, a0)],
                    Stroke::new(1.5, BACKGROUND),
                );
            }
        }
        painter.circle_filled(center, radius * DONUT_HOLE, BACKGROUND);

        // label at the middle of each ring segment
        for (slice, span) in dist.slices.iter().zip(&spans) {
            if let Some(label) = slice.inline_label() {
                let anchor = polar(center, radius * (1.0 + DONUT_HOLE) / 2.0, (span.0 + span.1) / 2.0);
                painter.text(anchor, Align2::CENTER_CENTER, label, FontId::proportional(13.0), Color32::WHITE);
            }
        }

        if let Some(pos) = response.hover_pos() {
            let offset = pos - center;
            let r = offset.length();
            if r >= radius * DONUT_HOLE && r <= radius {
                let mut angle = offset.y.atan2(offset.x);
                if angle < -TAU / 4.0 {
                    angle += TAU;
                }
                let hovered = dist
                    .slices
                    .iter()
                    .zip(&spans)
                    .find(|(_, span)| angle >= span.0 && angle < span.1);
                if let Some((slice, _)) = hovered {
                    response.on_hover_text_at_pointer(format!(
                        "Cluster {}\n{} songs ({:.1}%)",
                        slice.cluster, slice.count, slice.percent
                    ));
                }
            }
        }

        ui.add_space(16.0);
        ui.vertical(|ui: &mut Ui| {
            ui.strong("Cluster");
            for slice in &dist.slices {
                let color = colors.color_for(Some(&slice.cluster));
                ui.label(
                    RichText::new(format!(
                        "■ {}   {} songs · {:.1}%",
                        slice.cluster, slice.count, slice.percent
                    ))
                    .color(color),
                );
            }
        });
    });
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * egui::vec2(angle.cos(), angle.sin())
}

// ---------------------------------------------------------------------------
// PCA projection scatter
// ---------------------------------------------------------------------------

pub fn projection_scatter(ui: &mut Ui, projection: &PcaProjection, colors: &ClusterColors) {
    Plot::new("pca_projection")
        .legend(Legend::default())
        .height(420.0)
        .x_axis_label("pc1")
        .y_axis_label("pc2")
        .label_formatter(|name, value| projection.hover_text(name, value.x, value.y))
        .show(ui, |plot_ui| {
            for series in &projection.series {
                let points: Vec<[f64; 2]> = series.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(points)
                        .name(series.label())
                        .color(colors.color_for(series.cluster.as_ref()).gamma_multiply(0.7))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });

    let mut caption = format!("{} songs plotted", projection.point_count());
    if projection.skipped > 0 {
        caption.push_str(&format!(", {} without PCA coordinates", projection.skipped));
    }
    ui.small(caption);
}

// ---------------------------------------------------------------------------
// Feature comparison grouped bars
// ---------------------------------------------------------------------------

/// Total width of one feature group on the x axis.
const GROUP_WIDTH: f64 = 0.8;

pub fn comparison_bars(ui: &mut Ui, comparison: &FeatureComparison, colors: &ClusterColors) {
    let n_clusters = comparison.clusters.len().max(1) as f64;
    let bar_width = GROUP_WIDTH / n_clusters;
    let features = &comparison.features;

    Plot::new("feature_comparison")
        .legend(Legend::default())
        .height(420.0)
        .y_axis_label("Mean Value")
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            features
                .get(idx as usize)
                .map(|f| f.to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (j, cluster) in comparison.clusters.iter().enumerate() {
                let offset = (j as f64 - (n_clusters - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = comparison
                    .bars_for(cluster)
                    .filter_map(|bar| {
                        let mean = bar.mean?;
                        let idx = features.iter().position(|f| *f == bar.feature)?;
                        Some(
                            Bar::new(idx as f64 + offset, mean)
                                .width(bar_width)
                                .name(format!("Cluster {cluster} · {}", bar.feature)),
                        )
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(format!("Cluster {cluster}"))
                        .color(colors.color_for(Some(cluster))),
                );
            }
        });

    if comparison.bars.iter().any(|b| b.mean.is_none()) {
        ui.label(
            RichText::new("Some clusters have no numeric values for a selected feature; those bars are omitted.")
                .color(Color32::GRAY)
                .small(),
        );
    }
}
