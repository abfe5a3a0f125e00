//! Extension trait for running signal analyses on Polars DataFrames

use crate::{ColumnNames, ColumnValue, Result};
use polars::prelude::*;
use signal_core::SeriesTable;

/// Extension trait for signal analyses on Polars DataFrames
///
/// Every analysis reads the timestamp and value columns named by `columns` and
/// returns its ranking as a new DataFrame. `name` identifies the series in logs
/// and errors, usually the file the frame was read from.
pub trait SignalStatsExt {
    /// Convert this frame into a [`SeriesTable`]
    fn to_series_table<V: ColumnValue>(
        &self,
        name: &str,
        columns: &ColumnNames,
    ) -> Result<SeriesTable<V>>;

    /// Rank distinct values by occurrence count
    ///
    /// # Returns
    /// DataFrame with columns `value` and `count`
    fn occurrence_ranking(
        &self,
        name: &str,
        columns: &ColumnNames,
        n: usize,
        ascending: bool,
    ) -> Result<DataFrame>;

    /// Rank distinct values by total dwell time
    ///
    /// # Returns
    /// DataFrame with columns `value`, `total_dwell_ns` and `total_dwell`, the
    /// last one a human-readable duration
    fn dwell_ranking(
        &self,
        name: &str,
        columns: &ColumnNames,
        n: usize,
        ascending: bool,
    ) -> Result<DataFrame>;

    /// Rank cycles by amplitude
    ///
    /// # Returns
    /// DataFrame with columns `minima`, `maxima`, `amplitude`, `duration_ns`,
    /// `start_ns` and `end_ns`; timestamps are nanoseconds since the Unix epoch
    fn cycle_ranking(
        &self,
        name: &str,
        columns: &ColumnNames,
        n: usize,
        smallest: bool,
    ) -> Result<DataFrame>;
}
