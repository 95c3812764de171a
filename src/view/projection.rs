use std::collections::BTreeMap;

use super::{Notice, ViewOutcome};
use crate::data::model::{CellValue, Dataset, NAME_ARTISTS, NAME_SONG, PC1, PC2};

// ---------------------------------------------------------------------------
// PCA scatter
// ---------------------------------------------------------------------------

/// One point of the scatter, with the text shown on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSong {
    pub x: f64,
    pub y: f64,
    pub name_song: String,
    pub name_artists: String,
}

/// Points sharing a cluster label, drawn in one colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSeries {
    /// `None` collects songs without a label.
    pub cluster: Option<CellValue>,
    pub points: Vec<ProjectedSong>,
}

impl ProjectionSeries {
    /// Legend name of the series; the plot reports it back on hover.
    pub fn label(&self) -> String {
        match &self.cluster {
            Some(c) => format!("Cluster {c}"),
            None => "Unlabelled".to_string(),
        }
    }

    /// The song drawn closest to `(x, y)`, if one lies within `max_distance`.
    fn nearest(&self, x: f64, y: f64, max_distance: f64) -> Option<&ProjectedSong> {
        let dist2 = |p: &ProjectedSong| (p.x - x).powi(2) + (p.y - y).powi(2);
        self.points
            .iter()
            .filter(|p| dist2(p) <= max_distance * max_distance)
            .min_by(|a, b| dist2(a).total_cmp(&dist2(b)))
    }
}

/// How far a hover position may lie from a plotted song and still name it.
/// The plot reports the exact coordinates of the point it matched.
const HOVER_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct PcaProjection {
    /// Labelled clusters in ascending order, the unlabelled series last.
    pub series: Vec<ProjectionSeries>,
    /// Rows left out because `pc1` or `pc2` was not numeric.
    pub skipped: usize,
}

impl PcaProjection {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Tooltip text for the scatter.
    ///
    /// `series` is the name of the plotted item under the pointer and is empty
    /// over blank space; then only the pointer coordinates are shown. Songs are
    /// looked up in the named series only.
    pub fn hover_text(&self, series: &str, x: f64, y: f64) -> String {
        let coords = format!("pc1 = {x:.3}, pc2 = {y:.3}");
        if series.is_empty() {
            return coords;
        }
        let song = self
            .series
            .iter()
            .find(|s| s.label() == series)
            .and_then(|s| s.nearest(x, y, HOVER_TOLERANCE));
        match song {
            Some(song) => format!("{}\n{}\n{coords}", song.name_song, song.name_artists),
            None => coords,
        }
    }
}

/// Scatter of every song on `(pc1, pc2)`, rendered only when both columns exist.
pub fn pca_projection(dataset: &Dataset) -> ViewOutcome<PcaProjection> {
    if !(dataset.has_column(PC1) && dataset.has_column(PC2)) {
        log::info!("No {PC1}/{PC2} columns, skipping projection");
        return ViewOutcome::Degraded(Notice::info(
            "PCA features not found. Run the cluster profiling notebook to add pc1 and pc2.",
        ));
    }

    let mut by_cluster: BTreeMap<Option<CellValue>, Vec<ProjectedSong>> = BTreeMap::new();
    let mut skipped = 0;

    for song in &dataset.records {
        let (Some(x), Some(y)) = (song.number(PC1), song.number(PC2)) else {
            skipped += 1;
            continue;
        };
        by_cluster
            .entry(song.cluster().cloned())
            .or_default()
            .push(ProjectedSong {
                x,
                y,
                name_song: song.text(NAME_SONG),
                name_artists: song.text(NAME_ARTISTS),
            });
    }
    if skipped > 0 {
        log::warn!("{skipped} songs have no numeric PCA coordinates");
    }

    // `None` sorts first in the map; move it behind the labelled clusters.
    let mut series: Vec<ProjectionSeries> = by_cluster
        .into_iter()
        .map(|(cluster, points)| ProjectionSeries { cluster, points })
        .collect();
    series.sort_by_key(|s| s.cluster.is_none());

    ViewOutcome::Ready(PcaProjection { series, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::dataset_from_reader;

    #[test]
    fn test_requires_both_columns() {
        let only_pc1 = dataset_from_reader("cluster,pc1\n0,1.0\n".as_bytes()).unwrap();
        assert!(pca_projection(&only_pc1).notice().is_some());

        let only_pc2 = dataset_from_reader("cluster,pc2\n0,1.0\n".as_bytes()).unwrap();
        assert!(pca_projection(&only_pc2).notice().is_some());

        let both = fixtures::two_cluster_dataset();
        assert!(pca_projection(&both).ready().is_some());
    }

    #[test]
    fn test_series_per_cluster() {
        let ds = fixtures::two_cluster_dataset();
        let projection = pca_projection(&ds);
        let projection = projection.ready().unwrap();

        assert_eq!(projection.point_count(), ds.len());
        assert_eq!(projection.series.len(), 2);
        assert_eq!(projection.series[0].cluster, Some(CellValue::Integer(0)));
        assert_eq!(projection.series[0].points.len(), 3);
        assert_eq!(projection.series[1].points[0].name_song, "Gamma");
    }

    #[test]
    fn test_unlabelled_last_and_non_numeric_skipped() {
        let ds = dataset_from_reader(
            "cluster,name_song,pc1,pc2\n,Loose,0.0,0.0\n3,Kept,1.0,1.0\n3,Bad,x,1.0\n".as_bytes(),
        )
        .unwrap();
        let projection = pca_projection(&ds);
        let projection = projection.ready().unwrap();

        assert_eq!(projection.skipped, 1);
        assert_eq!(projection.series.len(), 2);
        assert_eq!(projection.series[0].cluster, Some(CellValue::Integer(3)));
        assert_eq!(projection.series[1].cluster, None);
    }

    // ==========================================================================
    // HOVER
    // ==========================================================================

    #[test]
    fn test_nearest_point_for_hover() {
        let ds = fixtures::two_cluster_dataset();
        let projection = pca_projection(&ds);
        let gamma_series = &projection.ready().unwrap().series[1];
        let song = gamma_series.nearest(1.9, -0.4, 0.5).unwrap();
        assert_eq!(song.name_song, "Gamma");
        assert_eq!(song.name_artists, "Artist C");
    }

    #[test]
    fn test_far_pointer_names_no_song() {
        let ds = fixtures::two_cluster_dataset();
        let projection = pca_projection(&ds);
        let projection = projection.ready().unwrap();

        assert_eq!(projection.series[1].nearest(1000.0, 1000.0, 0.5), None);

        for series in ["", "Cluster 0", "Cluster 1"] {
            let text = projection.hover_text(series, 1000.0, 1000.0);
            assert_eq!(text, "pc1 = 1000.000, pc2 = 1000.000");
        }
    }

    #[test]
    fn test_blank_space_shows_only_coordinates() {
        let ds = fixtures::two_cluster_dataset();
        let projection = pca_projection(&ds);

        // right on top of Gamma, but the plot matched no item
        let text = projection.ready().unwrap().hover_text("", 2.0, -0.5);
        assert_eq!(text, "pc1 = 2.000, pc2 = -0.500");
    }

    #[test]
    fn test_hover_text_names_matched_song() {
        let ds = fixtures::two_cluster_dataset();
        let projection = pca_projection(&ds);
        let projection = projection.ready().unwrap();

        assert_eq!(projection.series[1].label(), "Cluster 1");
        assert_eq!(
            projection.hover_text("Cluster 1", 2.0, -0.5),
            "Gamma\nArtist C\npc1 = 2.000, pc2 = -0.500"
        );
        // Gamma is not part of cluster 0
        assert_eq!(
            projection.hover_text("Cluster 0", 2.0, -0.5),
            "pc1 = 2.000, pc2 = -0.500"
        );
    }
}
