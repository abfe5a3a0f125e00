//! Configuration types for loading and analysing signals
//!
//! A report is described by a JSON document:
//!
//! ```json
//! {
//!   "input": { "data_folder": "data", "csv_name": "pump_1.csv" },
//!   "occurrence": { "n": 5, "ascending": true },
//!   "dwell": { "n": 3, "ascending": false },
//!   "cycles": { "n": 3, "smallest": false },
//!   "outliers": { "n": 2, "sample_fraction": 0.15 }
//! }
//! ```
//!
//! Every section except `input` may be omitted and falls back to its default.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use signal_outlier::{OutlierParameters, DEFAULT_SAMPLE_FRACTION};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names of the timestamp and value columns in an input table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub timestamp: String,
    pub value: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            timestamp: "timestamp_utc".to_string(),
            value: "sig_value".to_string(),
        }
    }
}

impl ColumnNames {
    pub fn new(timestamp: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value: value.into(),
        }
    }
}

/// Where the input data lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding the population of tables
    pub data_folder: PathBuf,
    /// Table analysed by the single-series analyses
    pub csv_name: String,
}

/// Ranking size and direction for the occurrence and dwell analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    pub n: usize,
    /// Least frequent / shortest first when true
    pub ascending: bool,
}

/// Ranking size and direction for the cycle analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    pub n: usize,
    /// Smallest amplitude first when true
    pub smallest: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            n: 3,
            smallest: false,
        }
    }
}

/// Outlier ranking settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierConfig {
    pub n: usize,
    #[serde(default = "default_sample_fraction")]
    pub sample_fraction: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub window: Option<usize>,
    #[serde(default = "default_use_pruning")]
    pub use_pruning: bool,
}

fn default_sample_fraction() -> f64 {
    DEFAULT_SAMPLE_FRACTION
}

fn default_use_pruning() -> bool {
    true
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            n: 2,
            sample_fraction: DEFAULT_SAMPLE_FRACTION,
            seed: None,
            window: None,
            use_pruning: true,
        }
    }
}

impl OutlierConfig {
    /// Validated ranking parameters
    ///
    /// # Errors
    /// `InvalidArgument` when the sample fraction is outside `(0, 1]`.
    pub fn parameters(&self) -> Result<OutlierParameters> {
        let mut params = OutlierParameters::new(self.sample_fraction)?.with_pruning(self.use_pruning);
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }
        if let Some(window) = self.window {
            params = params.with_window(window);
        }
        Ok(params)
    }
}

fn default_occurrence() -> RankConfig {
    RankConfig {
        n: 5,
        ascending: true,
    }
}

fn default_dwell() -> RankConfig {
    RankConfig {
        n: 3,
        ascending: false,
    }
}

/// Complete report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default = "default_occurrence")]
    pub occurrence: RankConfig,
    #[serde(default = "default_dwell")]
    pub dwell: RankConfig,
    #[serde(default)]
    pub cycles: CycleConfig,
    #[serde(default)]
    pub outliers: OutlierConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                data_folder: PathBuf::from("."),
                csv_name: String::new(),
            },
            columns: ColumnNames::default(),
            occurrence: default_occurrence(),
            dwell: default_dwell(),
            cycles: CycleConfig::default(),
            outliers: OutlierConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    ///
    /// A relative `data_folder` is resolved against the directory containing the
    /// configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_json_str(&text)?;

        if config.input.data_folder.is_relative() {
            if let Some(base) = path.parent() {
                config.input.data_folder = base.join(&config.input.data_folder);
            }
        }

        debug!(
            config = %path.display(),
            data_folder = %config.input.data_folder.display(),
            "Loaded report configuration"
        );
        Ok(config)
    }

    /// Path of the single table analysed by the per-series analyses
    pub fn series_path(&self) -> PathBuf {
        self.input.data_folder.join(&self.input.csv_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.columns.timestamp, "timestamp_utc");
        assert_eq!(config.columns.value, "sig_value");
        assert_eq!(config.occurrence, RankConfig { n: 5, ascending: true });
        assert_eq!(config.dwell, RankConfig { n: 3, ascending: false });
        assert_eq!(config.cycles, CycleConfig { n: 3, smallest: false });
        assert_eq!(config.outliers.n, 2);
        assert_eq!(config.outliers.sample_fraction, 0.15);
        assert_eq!(config.outliers.seed, None);
    }

    #[test]
    fn test_partial_document() {
        let config = ReportConfig::from_json_str(
            r#"{
                "input": {"data_folder": "/data", "csv_name": "a.csv"},
                "outliers": {"n": 4, "seed": 7}
            }"#,
        )
        .unwrap();

        assert_eq!(config.series_path(), PathBuf::from("/data/a.csv"));
        assert_eq!(config.outliers.n, 4);
        assert_eq!(config.outliers.seed, Some(7));
        assert_eq!(config.outliers.sample_fraction, 0.15);
        assert!(config.outliers.use_pruning);
        assert_eq!(config.occurrence.n, 5);
    }

    #[test]
    fn test_outlier_parameters() {
        let config = OutlierConfig {
            n: 1,
            sample_fraction: 0.5,
            seed: Some(3),
            window: Some(10),
            use_pruning: false,
        };
        let params = config.parameters().unwrap();
        assert_eq!(params.seed(), Some(3));
        assert_eq!(params.dtw().window(), Some(10));
        assert!(!params.dtw().use_pruning());

        let bad = OutlierConfig {
            sample_fraction: 0.0,
            ..OutlierConfig::default()
        };
        assert!(bad.parameters().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_input_section_is_required() {
        let err = ReportConfig::from_json_str(r#"{"outliers": {"n": 1}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("input"));
    }

    #[test]
    fn test_bad_json() {
        let err = ReportConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
