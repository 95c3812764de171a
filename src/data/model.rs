use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Well-known columns
// ---------------------------------------------------------------------------

pub const CLUSTER: &str = "cluster";
pub const NAME_SONG: &str = "name_song";
pub const NAME_ARTISTS: &str = "name_artists";
pub const PC1: &str = "pc1";
pub const PC2: &str = "pc2";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the clustered table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, guessed from the CSV text.
/// Used as a key in `BTreeMap` / `BTreeSet` (cluster labels), so it must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn rank(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                Text(_) => 4,
            }
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "–"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl CellValue {
    /// Guess the type of a raw CSV field.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::Text(s.to_string())
    }

    /// Numeric view of the cell; NaN counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Feature – the fixed acoustic feature list
// ---------------------------------------------------------------------------

/// Acoustic features averaged in the cluster profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Danceability,
    Energy,
    Loudness,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
    DurationMs,
}

impl Feature {
    /// Canonical order, as offered in the feature picker.
    pub const ALL: [Feature; 10] = [
        Feature::Danceability,
        Feature::Energy,
        Feature::Loudness,
        Feature::Speechiness,
        Feature::Acousticness,
        Feature::Instrumentalness,
        Feature::Liveness,
        Feature::Valence,
        Feature::Tempo,
        Feature::DurationMs,
    ];

    /// Column name in the dataset.
    pub fn column(self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Loudness => "loudness",
            Feature::Speechiness => "speechiness",
            Feature::Acousticness => "acousticness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Valence => "valence",
            Feature::Tempo => "tempo",
            Feature::DurationMs => "duration_ms",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// SongRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single song (one row of the clustered CSV).
#[derive(Debug, Clone, Default)]
pub struct SongRecord {
    /// column_name → value. Columns absent from the file are absent here.
    pub fields: BTreeMap<String, CellValue>,
}

impl SongRecord {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column)
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(CellValue::as_f64)
    }

    /// Display text of a column, empty when missing.
    pub fn text(&self, column: &str) -> String {
        match self.get(column) {
            Some(CellValue::Null) | None => String::new(),
            Some(v) => v.to_string(),
        }
    }

    /// Cluster label, if the row has a non-null one.
    pub fn cluster(&self) -> Option<&CellValue> {
        self.get(CLUSTER).filter(|v| !v.is_null())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The parsed clustered table with the distinct cluster labels pre-computed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All songs, in file order.
    pub records: Vec<SongRecord>,
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Sorted distinct non-null cluster labels.
    pub clusters: BTreeSet<CellValue>,
}

impl Dataset {
    pub fn from_records(column_names: Vec<String>, records: Vec<SongRecord>) -> Self {
        let clusters = records
            .iter()
            .filter_map(SongRecord::cluster)
            .cloned()
            .collect();
        Dataset {
            records,
            column_names,
            clusters,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// The subset of `columns` absent from the header, in the given order.
    pub fn missing_columns<'a>(&self, columns: &[&'a str]) -> Vec<&'a str> {
        columns
            .iter()
            .copied()
            .filter(|c| !self.has_column(c))
            .collect()
    }
}
