use anyhow::{bail, Result};
use serde::Deserialize;

use crate::lookup::normalize;

/// Raw row from the zip code CSV
///
/// Every column is optional so a short or blank row can be reported
/// and skipped instead of aborting the whole load.
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    pub code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One zip code entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code: String,
    pub city: String,
    pub state: String,
}

impl Record {
    pub fn new(code: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        let code: String = code.into();
        Self {
            code: normalize(&code),
            city: city.into().trim().to_string(),
            state: state.into().trim().to_string(),
        }
    }

    /// Display form used on the results page (e.g., "Beverly Hills, CA")
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl CsvRecord {
    pub fn to_record(&self) -> Result<Record> {
        let code = required("code", self.code.as_deref())?;
        let city = required("city", self.city.as_deref())?;
        let state = required("state", self.state.as_deref())?;

        Ok(Record::new(code, city, state))
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => bail!("missing required field `{}`", field),
    }
}
