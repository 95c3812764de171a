use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{CellValue, Dataset, SongRecord};
use crate::config;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the clustered dataset could not be provided.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error(
        "Clustered dataset not found at {}. Run the clustering notebook first to produce it.",
        path.display()
    )]
    ArtifactMissing { path: PathBuf },

    #[error("Clustered dataset could not be read: {0}")]
    Unreadable(String),
}

// ---------------------------------------------------------------------------
// Process-wide cache
// ---------------------------------------------------------------------------

static SHARED: OnceLock<DatasetCache> = OnceLock::new();

/// The process-wide cache for the fixed artifact location. Every window loads
/// through it, so the file is read at most once per process.
pub fn shared() -> &'static DatasetCache {
    SHARED.get_or_init(|| DatasetCache::new(config::ARTIFACT_PATH))
}

/// Load-once holder for a dataset file.
///
/// The first successful load is kept for the lifetime of the cache and every
/// later call hands out the same `Arc`. Failures are not kept, so a later call
/// retries. The mutex serialises callers, so two sessions can never load the
/// file concurrently.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    slot: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<Arc<Dataset>, LoadError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = slot.as_ref() {
            log::debug!("Dataset cache hit for {}", self.path.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_file(&self.path)?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read the clustered CSV at `path`.
///
/// Only the header row is required. Columns are not checked here; views
/// report the columns they need but cannot find.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        log::error!("Clustered dataset missing: {}", path.display());
        return Err(LoadError::ArtifactMissing {
            path: path.to_path_buf(),
        });
    }

    let parsed = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))
        .and_then(dataset_from_reader);

    match parsed {
        Ok(dataset) => {
            log::info!(
                "Loaded {} songs in {} clusters from {} (columns {:?})",
                dataset.len(),
                dataset.clusters.len(),
                path.display(),
                dataset.column_names
            );
            Ok(dataset)
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            Err(LoadError::Unreadable(format!("{e:#}")))
        }
    }
}

/// Parse CSV text with a header row into a [`Dataset`].
pub fn dataset_from_reader<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let fields: BTreeMap<String, CellValue> = headers
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.clone(), CellValue::parse(value.trim())))
            .collect();

        records.push(SongRecord { fields });
    }

    Ok(Dataset::from_records(headers, records))
}
