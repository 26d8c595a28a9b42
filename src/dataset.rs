//! In-memory zip code dataset
//!
//! Loaded once at startup from CSV (`code,city,state`) and never mutated.
//! Malformed rows are skipped so one bad line never takes the page down.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::lookup::normalize;
use crate::models::{CsvRecord, Record};

/// Dataset shipped with the binary
const BUNDLED_CSV: &str = include_str!("../data/zipcodes.csv");

/// Outcome of a load: how many rows made it in and how many were dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Ordered, immutable collection of zip code records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Stored codes are normalized here so lookups by `normalize(code)`
    /// always hit, however the records were built.
    pub fn new(records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .map(|mut r| {
                r.code = normalize(&r.code);
                r
            })
            .collect();
        Self { records }
    }

    /// Parse CSV with a `code,city,state` header, skipping malformed rows
    pub fn from_reader<R: Read>(reader: R) -> (Self, LoadReport) {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for (i, row) in reader.deserialize::<CsvRecord>().enumerate() {
            // Header is line 1
            let line = i + 2;
            match row.map_err(anyhow::Error::from).and_then(|r| r.to_record()) {
                Ok(record) => {
                    records.push(record);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping malformed row at line {}: {}", line, e);
                    report.skipped += 1;
                }
            }
        }

        debug!("Parsed {} records ({} skipped)", report.loaded, report.skipped);
        (Self::new(records), report)
    }

    /// Load from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        info!("Reading zip codes from {:?}", path);
        let file = File::open(path).with_context(|| format!("Failed to open dataset {:?}", path))?;
        Ok(Self::from_reader(file))
    }

    /// The dataset compiled into the binary
    pub fn bundled() -> (Self, LoadReport) {
        Self::from_reader(BUNDLED_CSV.as_bytes())
    }

    /// Load from `path` if given, otherwise fall back to the bundled data
    pub fn load(path: Option<&Path>) -> Result<(Self, LoadReport)> {
        match path {
            Some(p) => Self::from_path(p),
            None => {
                info!("Using bundled zip code dataset");
                Ok(Self::bundled())
            }
        }
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
