use super::{Notice, ViewOutcome};
use crate::data::filter::cluster_indices;
use crate::data::model::{CellValue, Dataset, Feature, NAME_ARTISTS, NAME_SONG};

/// Columns of the example table, in display order.
pub const COLUMNS: [&str; 4] = [NAME_SONG, NAME_ARTISTS, "danceability", "energy"];

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleSong {
    pub name_song: String,
    pub name_artists: String,
    pub danceability: CellValue,
    pub energy: CellValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleSongs {
    /// Leading rows of the selected cluster, in dataset order.
    pub rows: Vec<ExampleSong>,
    /// Size of the whole cluster, for the "showing n of m" caption.
    pub cluster_size: usize,
}

/// The first `limit` songs of the selected cluster.
pub fn example_songs(
    dataset: &Dataset,
    cluster: Option<&CellValue>,
    limit: usize,
) -> ViewOutcome<ExampleSongs> {
    let missing = dataset.missing_columns(&COLUMNS);
    if !missing.is_empty() {
        return ViewOutcome::Degraded(Notice::missing_columns("Example songs", &missing));
    }
    let Some(cluster) = cluster else {
        return ViewOutcome::Degraded(Notice::warning("No cluster selected."));
    };

    let indices = cluster_indices(dataset, cluster);
    let rows = indices
        .iter()
        .take(limit)
        .map(|&i| {
            let song = &dataset.records[i];
            let cell = |col: &str| song.get(col).cloned().unwrap_or(CellValue::Null);
            ExampleSong {
                name_song: song.text(NAME_SONG),
                name_artists: song.text(NAME_ARTISTS),
                danceability: cell(Feature::Danceability.column()),
                energy: cell(Feature::Energy.column()),
            }
        })
        .collect();

    ViewOutcome::Ready(ExampleSongs {
        rows,
        cluster_size: indices.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::dataset_from_reader;

    fn big_cluster_csv(n: usize) -> String {
        let mut csv = String::from("cluster,name_song,name_artists,danceability,energy\n");
        for i in 0..n {
            csv.push_str(&format!("{},Song {i},Artist,0.5,0.5\n", i % 2));
        }
        csv
    }

    #[test]
    fn test_preserves_dataset_order() {
        let ds = fixtures::two_cluster_dataset();
        let songs = example_songs(&ds, Some(&CellValue::Integer(0)), 20);
        let names: Vec<_> = songs.ready().unwrap().rows.iter().map(|r| r.name_song.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Delta"]);
    }

    #[test]
    fn test_never_more_than_limit() {
        let ds = dataset_from_reader(big_cluster_csv(100).as_bytes()).unwrap();
        let songs = example_songs(&ds, Some(&CellValue::Integer(1)), 20);
        let songs = songs.ready().unwrap();

        assert_eq!(songs.rows.len(), 20);
        assert_eq!(songs.cluster_size, 50);
        assert_eq!(songs.rows[0].name_song, "Song 1");
        assert_eq!(songs.rows[19].name_song, "Song 39");
    }

    #[test]
    fn test_unknown_cluster_gives_empty_table() {
        let ds = fixtures::two_cluster_dataset();
        let songs = example_songs(&ds, Some(&CellValue::Integer(9)), 20);
        assert!(songs.ready().unwrap().rows.is_empty());
    }

    #[test]
    fn test_missing_column_degrades() {
        let ds = dataset_from_reader("cluster,name_song,energy\n0,Alpha,0.1\n".as_bytes()).unwrap();
        let songs = example_songs(&ds, Some(&CellValue::Integer(0)), 20);
        let notice = songs.notice().unwrap();
        assert!(notice.text.contains("'name_artists', 'danceability'"));
    }
}
