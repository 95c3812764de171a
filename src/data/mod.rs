/// Data layer: core types, loading, cluster membership and profiles.
///
/// Architecture:
/// ```text
///  reports/amazon_music_clusters.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset, cached once per process
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<SongRecord>, distinct cluster labels
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │   │ profile  │  per-cluster feature means
///   └──────────┘   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod profile;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::loader::dataset_from_reader;
    use super::model::Dataset;

    /// Cluster 0 has three songs (rows 0, 1, 3), cluster 1 has one (row 2).
    pub const TWO_CLUSTER_CSV: &str = "\
cluster,name_song,name_artists,danceability,energy,loudness,speechiness,acousticness,instrumentalness,liveness,valence,tempo,duration_ms,pc1,pc2
0,Alpha,Artist A,0.5,0.4,-6.0,0.05,0.1,0.0,0.1,0.3,100,200000,-1.0,0.5
0,Beta,Artist B,0.7,0.6,-5.0,0.04,0.2,0.0,0.2,0.5,120,210000,-1.2,0.4
1,Gamma,Artist C,0.2,0.9,-3.0,0.10,0.0,0.5,0.3,0.1,150,180000,2.0,-0.5
0,Delta,Artist D,0.6,0.5,-7.0,0.03,0.3,0.0,0.1,0.4,110,190000,-0.8,0.6
";

    pub fn two_cluster_dataset() -> Dataset {
        dataset_from_reader(TWO_CLUSTER_CSV.as_bytes()).expect("fixture parses")
    }
}
