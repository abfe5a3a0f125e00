//! Occurrence and dwell rankings on DataFrames

use super::cycles::cycle_ranking_impl;
use super::duration_nanos;
use crate::loader::series_table_from_frame;
use crate::{ColumnNames, ColumnValue, Error, Result, SignalStatsExt};
use polars::prelude::*;
use signal_core::{GroupKey, SeriesTable};
use signal_dwell::{format_duration, rank_by_dwell_time, rank_by_occurrence};

/// How the value column is grouped
enum ValueKind {
    Float,
    Integer,
    Text,
}

fn value_kind(df: &DataFrame, name: &str, columns: &ColumnNames) -> Result<ValueKind> {
    let column = df.column(&columns.value).map_err(|_| {
        Error::InvalidColumn(format!("'{}' is missing from '{name}'", columns.value))
    })?;

    match column.dtype() {
        dt if dt.is_float() => Ok(ValueKind::Float),
        dt if dt.is_integer() => Ok(ValueKind::Integer),
        DataType::String | DataType::Boolean => Ok(ValueKind::Text),
        dt => Err(Error::TypeMismatch {
            column: columns.value.clone(),
            expected: "numeric or text".to_string(),
            got: format!("{dt:?}"),
        }),
    }
}

fn occurrence_frame<V>(
    df: &DataFrame,
    name: &str,
    columns: &ColumnNames,
    n: usize,
    ascending: bool,
) -> Result<DataFrame>
where
    V: ColumnValue + GroupKey + Clone,
{
    let table: SeriesTable<V> = series_table_from_frame(df, name, columns)?;
    let ranked = rank_by_occurrence(&table, n, ascending)?;

    let (values, counts): (Vec<V>, Vec<u64>) = ranked
        .into_iter()
        .map(|r| (r.value, r.metric as u64))
        .unzip();

    Ok(DataFrame::new(vec![
        V::into_column("value", values),
        Series::new("count".into(), counts).into(),
    ])?)
}

fn dwell_frame<V>(
    df: &DataFrame,
    name: &str,
    columns: &ColumnNames,
    n: usize,
    ascending: bool,
) -> Result<DataFrame>
where
    V: ColumnValue + GroupKey + Clone,
{
    let table: SeriesTable<V> = series_table_from_frame(df, name, columns)?;
    let ranked = rank_by_dwell_time(&table, n, ascending)?;

    let mut values = Vec::with_capacity(ranked.len());
    let mut totals = Vec::with_capacity(ranked.len());
    let mut rendered = Vec::with_capacity(ranked.len());
    for rank in ranked {
        totals.push(duration_nanos(rank.metric)?);
        rendered.push(format_duration(rank.metric));
        values.push(rank.value);
    }

    Ok(DataFrame::new(vec![
        V::into_column("value", values),
        Series::new("total_dwell_ns".into(), totals).into(),
        Series::new("total_dwell".into(), rendered).into(),
    ])?)
}
impl SignalStatsExt for DataFrame {
    fn to_series_table<V: ColumnValue>(
        &self,
        name: &str,
        columns: &ColumnNames,
    ) -> Result<SeriesTable<V>> {
        series_table_from_frame(self, name, columns)
    }

    fn occurrence_ranking(
        &self,
        name: &str,
        columns: &ColumnNames,
        n: usize,
        ascending: bool,
    ) -> Result<DataFrame> {
        match value_kind(self, name, columns)? {
            ValueKind::Float => occurrence_frame::<f64>(self, name, columns, n, ascending),
            ValueKind::Integer => occurrence_frame::<i64>(self, name, columns, n, ascending),
            ValueKind::Text => occurrence_frame::<String>(self, name, columns, n, ascending),
        }
    }

    fn dwell_ranking(
        &self,
        name: &str,
        columns: &ColumnNames,
        n: usize,
        ascending: bool,
    ) -> Result<DataFrame> {
        match value_kind(self, name, columns)? {
            ValueKind::Float => dwell_frame::<f64>(self, name, columns, n, ascending),
            ValueKind::Integer => dwell_frame::<i64>(self, name, columns, n, ascending),
            ValueKind::Text => dwell_frame::<String>(self, name, columns, n, ascending),
        }
    }

    fn cycle_ranking(
        &self,
        name: &str,
        columns: &ColumnNames,
        n: usize,
        smallest: bool,
    ) -> Result<DataFrame> {
        cycle_ranking_impl(self, name, columns, n, smallest)
    }
}
