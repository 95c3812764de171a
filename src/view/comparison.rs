use super::{Notice, ViewOutcome};
use crate::data::model::{CellValue, Dataset, Feature, CLUSTER};
use crate::data::profile::ClusterProfile;

// ---------------------------------------------------------------------------
// Grouped bar chart of feature means
// ---------------------------------------------------------------------------

/// One bar: the mean of `feature` over the songs of `cluster`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBar {
    pub cluster: CellValue,
    pub feature: Feature,
    /// `None` when the cluster has no numeric value for the feature.
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureComparison {
    /// Cluster labels, ascending.
    pub clusters: Vec<CellValue>,
    /// Selected features, in pick order. One x-axis group each.
    pub features: Vec<Feature>,
    /// Ordered by cluster, then by feature. Always `clusters × features` long.
    pub bars: Vec<FeatureBar>,
}

impl FeatureComparison {
    pub fn bars_for<'a>(&'a self, cluster: &'a CellValue) -> impl Iterator<Item = &'a FeatureBar> + 'a {
        self.bars.iter().filter(move |b| &b.cluster == cluster)
    }
}

pub fn feature_comparison(dataset: &Dataset, features: &[Feature]) -> ViewOutcome<FeatureComparison> {
    if features.is_empty() {
        log::warn!("No features selected for comparison");
        return ViewOutcome::Degraded(Notice::warning(
            "Please select at least one feature to display the bar chart.",
        ));
    }

    let mut required = vec![CLUSTER];
    required.extend(features.iter().map(|f| f.column()));
    let missing = dataset.missing_columns(&required);
    if !missing.is_empty() {
        return ViewOutcome::Degraded(Notice::missing_columns("Feature comparison", &missing));
    }

    let profile = ClusterProfile::compute(dataset, features);
    let clusters: Vec<CellValue> = profile.means.keys().cloned().collect();
    let mut bars = Vec::with_capacity(clusters.len() * features.len());
    for cluster in &clusters {
        for &feature in features {
            bars.push(FeatureBar {
                cluster: cluster.clone(),
                feature,
                mean: profile.mean(cluster, feature),
            });
        }
    }

    ViewOutcome::Ready(FeatureComparison {
        clusters,
        features: features.to_vec(),
        bars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::view::NoticeLevel;

    #[test]
    fn test_bar_count_is_clusters_times_features() {
        let ds = fixtures::two_cluster_dataset();
        for n in 1..=Feature::ALL.len() {
            let comparison = feature_comparison(&ds, &Feature::ALL[..n]);
            assert_eq!(comparison.ready().unwrap().bars.len(), ds.clusters.len() * n);
        }
    }

    #[test]
    fn test_empty_selection_warns() {
        let ds = fixtures::two_cluster_dataset();
        let comparison = feature_comparison(&ds, &[]);
        assert!(comparison.ready().is_none());
        assert_eq!(comparison.notice().unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_bars_ordered_by_cluster_then_pick_order() {
        let ds = fixtures::two_cluster_dataset();
        let comparison = feature_comparison(&ds, &[Feature::Tempo, Feature::Energy]);
        let comparison = comparison.ready().unwrap();

        let order: Vec<_> = comparison
            .bars
            .iter()
            .map(|b| (b.cluster.clone(), b.feature))
            .collect();
        assert_eq!(
            order,
            vec![
                (CellValue::Integer(0), Feature::Tempo),
                (CellValue::Integer(0), Feature::Energy),
                (CellValue::Integer(1), Feature::Tempo),
                (CellValue::Integer(1), Feature::Energy),
            ]
        );
        assert_eq!(comparison.bars_for(&CellValue::Integer(1)).count(), 2);
    }

    #[test]
    fn test_missing_feature_column_degrades() {
        let ds = crate::data::loader::dataset_from_reader("cluster,energy\n0,0.3\n".as_bytes()).unwrap();
        let comparison = feature_comparison(&ds, &[Feature::Energy, Feature::Valence]);
        assert!(comparison.notice().unwrap().text.contains("'valence'"));
    }
}
