mod schema;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};

use crate::models::*;

pub use schema::{
    BOOSTER_CATEGORY, BOOSTER_VERSION, FLIGHT_NUMBER, LAUNCH_SITE, OUTCOME_CLASS, PAYLOAD_MASS,
};
use schema::ColumnLayout;

/// Errors raised while loading the launch table. Row numbers count data rows
/// from 1, not including the header.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: invalid payload mass '{value}'")]
    InvalidPayload { row: usize, value: String },
    #[error("row {row}: invalid outcome class '{value}'")]
    InvalidOutcome { row: usize, value: String },
    #[error("row {row}: invalid flight number '{value}'")]
    InvalidFlightNumber { row: usize, value: String },
    #[error("dataset contains no launch records")]
    Empty,
}

/// The launch table, loaded once and shared read-only for the life of the
/// process. Cloning is cheap; all clones share the same records.
pub struct Dataset {
    inner: Arc<DatasetInner>,
}

struct DatasetInner {
    records: Vec<LaunchRecord>,
    summary: DatasetSummary,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            "Loaded {} launches across {} sites from {}",
            dataset.len(),
            dataset.summary().sites.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let mut table = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let layout = ColumnLayout::from_headers(table.headers()?)?;

        let mut records = Vec::new();
        for (i, row) in table.records().enumerate() {
            records.push(parse_record(&layout, &row?, i + 1)?);
        }

        Self::from_records(records)
    }

    /// Build a dataset from already-parsed records, checking the payload
    /// invariant and computing the summary.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        if let Some((i, bad)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !valid_payload(r.payload_mass_kg))
        {
            return Err(DatasetError::InvalidPayload {
                row: i + 1,
                value: bad.payload_mass_kg.to_string(),
            });
        }

        let summary = summarize(&records);
        Ok(Self {
            inner: Arc::new(DatasetInner { records, summary }),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.inner.records
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.inner.summary
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    /// Always false; an empty table is rejected at load.
    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    pub fn site_records<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> {
        self.inner.records.iter().filter(move |r| r.launch_site == site)
    }

    /// The default selector state: all sites over the full observed range.
    pub fn default_selector(&self) -> SelectorState {
        SelectorState::all_sites(self.summary().payload_range())
    }
}

impl Clone for Dataset {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("launches", &self.len())
            .field("sites", &self.summary().sites)
            .finish()
    }
}

fn valid_payload(mass: f64) -> bool {
    mass.is_finite() && mass >= 0.0
}

fn parse_record(
    layout: &ColumnLayout,
    row: &StringRecord,
    row_number: usize,
) -> Result<LaunchRecord, DatasetError> {
    let payload_raw = layout.required(row, PAYLOAD_MASS);
    let payload_mass_kg = payload_raw
        .parse::<f64>()
        .ok()
        .filter(|m| valid_payload(*m))
        .ok_or_else(|| DatasetError::InvalidPayload {
            row: row_number,
            value: payload_raw.to_string(),
        })?;

    let class_raw = layout.required(row, OUTCOME_CLASS);
    let outcome = Outcome::from_class(class_raw).ok_or_else(|| DatasetError::InvalidOutcome {
        row: row_number,
        value: class_raw.to_string(),
    })?;

    let flight_number = match layout.get(row, FLIGHT_NUMBER) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| DatasetError::InvalidFlightNumber {
                row: row_number,
                value: raw.to_string(),
            })?,
        None => row_number as u32,
    };

    let booster_version_category = layout.required(row, BOOSTER_CATEGORY).to_string();
    let booster_version = layout
        .get(row, BOOSTER_VERSION)
        .map(str::to_string)
        .unwrap_or_else(|| booster_version_category.clone());

    Ok(LaunchRecord {
        flight_number,
        launch_site: layout.required(row, LAUNCH_SITE).to_string(),
        payload_mass_kg,
        booster_version,
        booster_version_category,
        outcome,
    })
}

fn summarize(records: &[LaunchRecord]) -> DatasetSummary {
    let sites: Vec<String> = records
        .iter()
        .map(|r| r.launch_site.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let (min_payload, max_payload) = records.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), r| (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg)),
    );

    DatasetSummary {
        launches: records.len(),
        successes: records.iter().filter(|r| r.is_success()).count(),
        min_payload,
        max_payload,
        sites,
    }
}
