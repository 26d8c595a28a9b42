//! Shared lookup logic for the web server and the CLI
//!
//! Holds the read-only dataset behind an `Arc` so every request can
//! borrow it without copying.

use serde::Serialize;
use std::sync::Arc;

use crate::dataset::Dataset;
use crate::lookup::{self, MatchMode};
use crate::models::Record;

#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    pub records: usize,
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone)]
pub struct LookupService {
    dataset: Arc<Dataset>,
    mode: MatchMode,
}

impl LookupService {
    pub fn new(dataset: Dataset, mode: MatchMode) -> Self {
        Self {
            dataset: Arc::new(dataset),
            mode,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// All matches for `query` under the configured mode
    pub fn find(&self, query: &str) -> Vec<&Record> {
        lookup::find(&self.dataset, query, self.mode)
    }

    /// First exact match, regardless of the configured mode
    pub fn get(&self, code: &str) -> Option<&Record> {
        lookup::find_exact(&self.dataset, code).into_iter().next()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            records: self.dataset.len(),
            match_mode: self.mode,
        }
    }
}
