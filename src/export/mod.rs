//! Export module for kakeibo
//!
//! Writes a one-way snapshot of the in-memory ledger:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with totals and metadata
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};
use crate::services::LedgerStore;

pub use self::csv::export_csv;
pub use json::{export_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Write `store` to `writer` in this format
    pub fn write<W: Write>(&self, store: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
        match self {
            Self::Json => export_json(store, writer),
            Self::Yaml => export_yaml(store, writer),
            Self::Csv => export_csv(store, writer),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(LedgerError::Export(format!(
                "unknown export format '{}' (expected json, yaml or csv)",
                other
            ))),
        }
    }
}
