//! Cycle ranking on DataFrames

use super::{duration_nanos, timestamp_nanos};
use crate::loader::series_table_from_frame;
use crate::{ColumnNames, Result};
use polars::prelude::*;
use signal_core::SeriesTable;
use signal_cycles::rank_cycles;

pub(crate) fn cycle_ranking_impl(
    df: &DataFrame,
    name: &str,
    columns: &ColumnNames,
    n: usize,
    smallest: bool,
) -> Result<DataFrame> {
    let table: SeriesTable<f64> = series_table_from_frame(df, name, columns)?;
    let cycles = rank_cycles(&table, n, smallest)?;

    let mut minima = Vec::with_capacity(cycles.len());
    let mut maxima = Vec::with_capacity(cycles.len());
    let mut amplitude = Vec::with_capacity(cycles.len());
    let mut duration = Vec::with_capacity(cycles.len());
    let mut start = Vec::with_capacity(cycles.len());
    let mut end = Vec::with_capacity(cycles.len());

    for cycle in &cycles {
        minima.push(cycle.minima);
        maxima.push(cycle.maxima);
        amplitude.push(cycle.amplitude);
        duration.push(duration_nanos(cycle.duration)?);
        start.push(timestamp_nanos(cycle.start)?);
        end.push(timestamp_nanos(cycle.end)?);
    }

    Ok(DataFrame::new(vec![
        Series::new("minima".into(), minima).into(),
        Series::new("maxima".into(), maxima).into(),
        Series::new("amplitude".into(), amplitude).into(),
        Series::new("duration_ns".into(), duration).into(),
        Series::new("start_ns".into(), start).into(),
        Series::new("end_ns".into(), end).into(),
    ])?)
}
