use std::collections::BTreeMap;

use super::model::{CellValue, Dataset, Feature};

// ---------------------------------------------------------------------------
// Cluster profile: per-cluster feature means
// ---------------------------------------------------------------------------

/// Mean of each requested feature per cluster.
///
/// `means[cluster][i]` is the mean of `features[i]`; `None` when the cluster
/// has no numeric value for that feature. Null, text and NaN cells are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterProfile {
    pub features: Vec<Feature>,
    pub means: BTreeMap<CellValue, Vec<Option<f64>>>,
}

impl ClusterProfile {
    pub fn compute(dataset: &Dataset, features: &[Feature]) -> Self {
        // (sum, count) per cluster and feature
        let mut acc: BTreeMap<CellValue, Vec<(f64, usize)>> = dataset
            .clusters
            .iter()
            .map(|c| (c.clone(), vec![(0.0, 0); features.len()]))
            .collect();

        for song in &dataset.records {
            let Some(cluster) = song.cluster() else {
                continue;
            };
            let Some(slots) = acc.get_mut(cluster) else {
                continue;
            };
            for (slot, feature) in slots.iter_mut().zip(features) {
                if let Some(v) = song.number(feature.column()) {
                    slot.0 += v;
                    slot.1 += 1;
                }
            }
        }

        let means = acc
            .into_iter()
            .map(|(cluster, slots)| {
                let row = slots
                    .into_iter()
                    .map(|(sum, n)| (n > 0).then(|| sum / n as f64))
                    .collect();
                (cluster, row)
            })
            .collect();

        ClusterProfile {
            features: features.to_vec(),
            means,
        }
    }

    pub fn mean(&self, cluster: &CellValue, feature: Feature) -> Option<f64> {
        let idx = self.features.iter().position(|f| *f == feature)?;
        self.means.get(cluster)?.get(idx).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::dataset_from_reader;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_means_per_cluster() {
        let ds = fixtures::two_cluster_dataset();
        let profile = ClusterProfile::compute(&ds, &[Feature::Energy, Feature::Tempo]);

        assert_close(profile.mean(&CellValue::Integer(0), Feature::Energy).unwrap(), 0.5);
        assert_close(profile.mean(&CellValue::Integer(1), Feature::Energy).unwrap(), 0.9);
        assert_close(profile.mean(&CellValue::Integer(0), Feature::Tempo).unwrap(), 110.0);
    }

    #[test]
    fn test_non_numeric_cells_are_skipped() {
        let ds = dataset_from_reader(
            "cluster,energy\n0,0.2\n0,\n0,NaN\n0,loud\n1,\n".as_bytes(),
        )
        .unwrap();
        let profile = ClusterProfile::compute(&ds, &[Feature::Energy]);

        assert_close(profile.mean(&CellValue::Integer(0), Feature::Energy).unwrap(), 0.2);
        assert_eq!(profile.mean(&CellValue::Integer(1), Feature::Energy), None);
    }

    #[test]
    fn test_empty_feature_list() {
        let ds = fixtures::two_cluster_dataset();
        let profile = ClusterProfile::compute(&ds, &[]);
        assert_eq!(profile.means.len(), 2);
        assert!(profile.means.values().all(Vec::is_empty));
    }
}
