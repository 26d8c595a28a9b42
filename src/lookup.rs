//! Zip code lookup
//!
//! `find` is a pure function of (dataset, query): it never mutates the
//! dataset and returns matches in dataset order. Duplicate codes are all
//! returned.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::dataset::Dataset;
use crate::models::Record;

/// How a normalized query is compared against a record's code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Code equals the query
    #[default]
    Exact,
    /// Code starts with the query (e.g., "902" matches "90210" and "90211")
    Prefix,
    /// Code contains the query anywhere (e.g., "021" matches "02108" and "90210")
    Substring,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Prefix => "prefix",
            MatchMode::Substring => "substring",
        }
    }

    fn matches(&self, code: &str, query: &str) -> bool {
        match self {
            MatchMode::Exact => code == query,
            MatchMode::Prefix => code.starts_with(query),
            MatchMode::Substring => code.contains(query),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "prefix" => Ok(MatchMode::Prefix),
            "substring" => Ok(MatchMode::Substring),
            other => Err(format!(
                "unknown match mode '{}' (expected 'exact', 'prefix' or 'substring')",
                other
            )),
        }
    }
}

/// Normalize a query or stored code: trim whitespace, uppercase ASCII letters.
/// Leading zeros are significant and kept.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Find all records whose code matches `query` under `mode`.
/// An empty (or all-whitespace) query matches nothing.
pub fn find<'a>(dataset: &'a Dataset, query: &str, mode: MatchMode) -> Vec<&'a Record> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    dataset
        .all()
        .iter()
        .filter(|r| mode.matches(&r.code, &query))
        .collect()
}

pub fn find_exact<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a Record> {
    find(dataset, query, MatchMode::Exact)
}
