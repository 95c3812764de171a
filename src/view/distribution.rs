use super::{Notice, ViewOutcome};
use crate::data::filter::cluster_counts;
use crate::data::model::{CellValue, Dataset, CLUSTER};

/// One slice of the cluster-size donut.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSlice {
    pub cluster: CellValue,
    pub count: usize,
    /// Share of all labelled songs, 0–100.
    pub percent: f64,
}

/// Slices smaller than this share get no label drawn on them.
const MIN_LABELLED_PERCENT: f64 = 4.0;

impl ClusterSlice {
    /// Text drawn on the slice itself: cluster label over its share.
    pub fn inline_label(&self) -> Option<String> {
        (self.percent >= MIN_LABELLED_PERCENT).then(|| format!("{}\n{:.1}%", self.cluster, self.percent))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterDistribution {
    pub total: usize,
    /// Ordered by cluster label.
    pub slices: Vec<ClusterSlice>,
}

pub fn cluster_distribution(dataset: &Dataset) -> ViewOutcome<ClusterDistribution> {
    if !dataset.has_column(CLUSTER) {
        return ViewOutcome::Degraded(Notice::missing_columns("Cluster distribution", &[CLUSTER]));
    }

    let counts = cluster_counts(dataset);
    let total: usize = counts.values().sum();
    if total == 0 {
        return ViewOutcome::Degraded(Notice::warning("No labelled songs to chart."));
    }

    let slices = counts
        .into_iter()
        .map(|(cluster, count)| ClusterSlice {
            cluster,
            count,
            percent: count as f64 * 100.0 / total as f64,
        })
        .collect();

    ViewOutcome::Ready(ClusterDistribution { total, slices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::dataset_from_reader;

    #[test]
    fn test_percentages_sum_to_hundred() {
        let ds = dataset_from_reader("cluster\n0\n1\n1\n2\n2\n2\n".as_bytes()).unwrap();
        let dist = cluster_distribution(&ds);
        let dist = dist.ready().unwrap();

        let sum: f64 = dist.slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(dist.total, 6);
        assert_eq!(
            dist.slices.iter().map(|s| s.count).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_slices_follow_cluster_order() {
        let ds = fixtures::two_cluster_dataset();
        let dist = cluster_distribution(&ds);
        let labels: Vec<_> = dist.ready().unwrap().slices.iter().map(|s| s.cluster.clone()).collect();
        assert_eq!(labels, vec![CellValue::Integer(0), CellValue::Integer(1)]);
    }

    #[test]
    fn test_inline_labels_skip_thin_slices() {
        let mut csv = String::from("cluster\n");
        csv.push_str(&"0\n".repeat(49));
        csv.push_str("1\n");
        let ds = dataset_from_reader(csv.as_bytes()).unwrap();
        let dist = cluster_distribution(&ds);
        let slices = &dist.ready().unwrap().slices;

        assert_eq!(slices[0].inline_label().as_deref(), Some("0\n98.0%"));
        assert_eq!(slices[1].inline_label(), None);
    }

    #[test]
    fn test_empty_dataset_degrades() {
        let ds = dataset_from_reader("cluster,name_song\n".as_bytes()).unwrap();
        assert!(cluster_distribution(&ds).notice().is_some());
    }
}
