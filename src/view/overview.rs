use super::{Notice, ViewOutcome};
use crate::data::filter::cluster_indices;
use crate::data::model::{CellValue, Dataset, CLUSTER};

/// Size of the selected cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOverview {
    pub cluster: CellValue,
    pub count: usize,
}

impl ClusterOverview {
    /// Success banner shown under the overview heading.
    pub fn banner(&self) -> Notice {
        Notice::success(format!("🎶 Number of songs in this cluster: {}", self.count))
    }
}

pub fn cluster_overview(dataset: &Dataset, cluster: Option<&CellValue>) -> ViewOutcome<ClusterOverview> {
    if !dataset.has_column(CLUSTER) {
        return ViewOutcome::Degraded(Notice::missing_columns("Cluster overview", &[CLUSTER]));
    }
    let Some(cluster) = cluster else {
        return ViewOutcome::Degraded(Notice::warning("The dataset contains no labelled songs."));
    };

    let count = cluster_indices(dataset, cluster).len();
    if count == 0 {
        log::warn!("Cluster {cluster} matches no songs");
    }
    ViewOutcome::Ready(ClusterOverview {
        cluster: cluster.clone(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::dataset_from_reader;
    use crate::view::NoticeLevel;

    #[test]
    fn test_counts_selected_cluster() {
        let ds = fixtures::two_cluster_dataset();
        let overview = cluster_overview(&ds, Some(&CellValue::Integer(1)));
        assert_eq!(overview.ready().unwrap().count, 1);
    }

    #[test]
    fn test_banner_reports_count_as_success() {
        let ds = fixtures::two_cluster_dataset();
        let overview = cluster_overview(&ds, Some(&CellValue::Integer(0)));
        let banner = overview.ready().unwrap().banner();
        assert_eq!(banner.level, NoticeLevel::Success);
        assert!(banner.text.ends_with("Number of songs in this cluster: 3"));
    }

    #[test]
    fn test_unmatched_cluster_reports_zero() {
        let ds = fixtures::two_cluster_dataset();
        let overview = cluster_overview(&ds, Some(&CellValue::Integer(42)));
        assert_eq!(
            overview,
            ViewOutcome::Ready(ClusterOverview {
                cluster: CellValue::Integer(42),
                count: 0
            })
        );
    }

    #[test]
    fn test_missing_cluster_column_degrades() {
        let ds = dataset_from_reader("name_song\nAlpha\n".as_bytes()).unwrap();
        assert!(cluster_overview(&ds, None).notice().is_some());
    }
}
