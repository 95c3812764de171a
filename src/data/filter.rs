use std::collections::BTreeMap;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Cluster membership
// ---------------------------------------------------------------------------

/// Indices of songs whose cluster equals `cluster`, in dataset order.
///
/// A label that no row carries yields an empty list rather than an error.
pub fn cluster_indices(dataset: &Dataset, cluster: &CellValue) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, song)| song.cluster() == Some(cluster))
        .map(|(i, _)| i)
        .collect()
}

/// Number of songs per distinct cluster, ordered by cluster label.
/// Rows without a cluster label are not counted.
pub fn cluster_counts(dataset: &Dataset) -> BTreeMap<CellValue, usize> {
    let mut counts: BTreeMap<CellValue, usize> = dataset
        .clusters
        .iter()
        .map(|c| (c.clone(), 0))
        .collect();
    for song in &dataset.records {
        if let Some(cluster) = song.cluster() {
            *counts.entry(cluster.clone()).or_default() += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn test_indices_preserve_order() {
        let ds = fixtures::two_cluster_dataset();
        assert_eq!(cluster_indices(&ds, &CellValue::Integer(0)), vec![0, 1, 3]);
        assert_eq!(cluster_indices(&ds, &CellValue::Integer(1)), vec![2]);
    }

    #[test]
    fn test_unknown_cluster_matches_nothing() {
        let ds = fixtures::two_cluster_dataset();
        assert!(cluster_indices(&ds, &CellValue::Integer(7)).is_empty());
    }

    #[test]
    fn test_counts_sum_to_row_count() {
        let ds = fixtures::two_cluster_dataset();
        let counts = cluster_counts(&ds);

        let total: usize = counts.values().sum();
        assert_eq!(total, ds.len());
        for cluster in &ds.clusters {
            assert_eq!(counts[cluster], cluster_indices(&ds, cluster).len());
        }
    }
}
