use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Theme colours
// ---------------------------------------------------------------------------

pub const ACCENT: Color32 = Color32::from_rgb(0x1D, 0xB9, 0x54);
pub const BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);
pub const SIDEBAR: Color32 = Color32::from_rgb(0x19, 0x14, 0x14);
pub const TEXT: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // start at green so a single cluster matches the accent family
            let hue = 140.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
                (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
                (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cluster colours: cluster label → Color32
// ---------------------------------------------------------------------------

/// Stable colour per cluster label, shared by every chart.
#[derive(Debug, Clone)]
pub struct ClusterColors {
    mapping: BTreeMap<CellValue, Color32>,
    default_color: Color32,
}

impl ClusterColors {
    pub fn new(clusters: &BTreeSet<CellValue>) -> Self {
        let palette = generate_palette(clusters.len());
        let mapping = clusters.iter().cloned().zip(palette).collect();

        ClusterColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a cluster; grey for unknown or missing labels.
    pub fn color_for(&self, cluster: Option<&CellValue>) -> Color32 {
        cluster
            .and_then(|c| self.mapping.get(c))
            .copied()
            .unwrap_or(self.default_color)
    }
}
