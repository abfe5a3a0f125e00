//! Reading signal tables with Polars
//!
//! Input tables are CSV files with a header row. Only the configured timestamp and
//! value columns are read; any other column, including a leading index column, is
//! ignored.
//!
//! Timestamps are accepted as
//! - text: RFC 3339, `YYYY-MM-DD HH:MM:SS[.f][offset]`, `YYYY-MM-DDTHH:MM:SS[.f]`
//!   or a bare `YYYY-MM-DD`; text without an offset is taken as UTC
//! - integers: nanoseconds since the Unix epoch
//! - Polars `Datetime` and `Date` columns

use crate::{ColumnNames, Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use polars::prelude::*;
use signal_core::SeriesTable;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// Offset-carrying layouts tried after RFC 3339
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Layouts without offset, read as UTC
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a textual timestamp
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Value types that can be read from a table column
pub trait ColumnValue: Sized {
    /// Description used in type mismatch errors
    const EXPECTED: &'static str;

    /// Read every row of `column`
    fn extract(column: &Column) -> Result<Vec<Self>>;

    /// Build a result column
    fn into_column(name: &str, values: Vec<Self>) -> Column;
}

fn missing_value(column: &Column, row: usize) -> Error {
    signal_core::Error::MalformedInput(format!(
        "Missing value in column '{}' at row {row}",
        column.name()
    ))
    .into()
}

fn parse_text<T: std::str::FromStr>(column: &Column, expected: &str) -> Result<Vec<T>> {
    column
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, raw)| {
            let raw = raw.ok_or_else(|| missing_value(column, row))?;
            raw.trim().parse::<T>().map_err(|_| {
                Error::from(signal_core::Error::MalformedInput(format!(
                    "Value '{raw}' in column '{}' at row {row} is not {expected}",
                    column.name()
                )))
            })
        })
        .collect()
}

impl ColumnValue for f64 {
    const EXPECTED: &'static str = "numeric";

    fn extract(column: &Column) -> Result<Vec<Self>> {
        match column.dtype() {
            DataType::String => parse_text(column, "numeric"),
            dt if dt.is_float() || dt.is_integer() => {
                let cast = column.cast(&DataType::Float64)?;
                cast.f64()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, v)| v.ok_or_else(|| missing_value(column, row)))
                    .collect()
            }
            dt => Err(Error::TypeMismatch {
                column: column.name().to_string(),
                expected: Self::EXPECTED.to_string(),
                got: format!("{dt:?}"),
            }),
        }
    }

    fn into_column(name: &str, values: Vec<Self>) -> Column {
        Series::new(name.into(), values).into()
    }
}

impl ColumnValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn extract(column: &Column) -> Result<Vec<Self>> {
        match column.dtype() {
            DataType::String => parse_text(column, "an integer"),
            dt if dt.is_integer() => {
                let cast = column.cast(&DataType::Int64)?;
                cast.i64()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, v)| v.ok_or_else(|| missing_value(column, row)))
                    .collect()
            }
            dt => Err(Error::TypeMismatch {
                column: column.name().to_string(),
                expected: Self::EXPECTED.to_string(),
                got: format!("{dt:?}"),
            }),
        }
    }

    fn into_column(name: &str, values: Vec<Self>) -> Column {
        Series::new(name.into(), values).into()
    }
}

impl ColumnValue for String {
    const EXPECTED: &'static str = "text";

    fn extract(column: &Column) -> Result<Vec<Self>> {
        let cast = column.cast(&DataType::String)?;
        cast.str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.map(str::to_string)
                    .ok_or_else(|| missing_value(column, row))
            })
            .collect()
    }

    fn into_column(name: &str, values: Vec<Self>) -> Column {
        Series::new(name.into(), values).into()
    }
}

fn epoch_scaled(column: &Column, nanos_per_unit: i64) -> Result<Vec<DateTime<Utc>>> {
    let cast = column.cast(&DataType::Int64)?;
    cast.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            let v = v.ok_or_else(|| missing_value(column, row))?;
            let nanos = v.checked_mul(nanos_per_unit).ok_or_else(|| {
                Error::from(signal_core::Error::unparseable_timestamp(&v.to_string(), row))
            })?;
            Ok(DateTime::from_timestamp_nanos(nanos))
        })
        .collect()
}

/// Read the timestamps of `column`
pub fn extract_timestamps(column: &Column) -> Result<Vec<DateTime<Utc>>> {
    match column.dtype() {
        DataType::String => column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, raw)| {
                let raw = raw.ok_or_else(|| missing_value(column, row))?;
                parse_timestamp(raw)
                    .ok_or_else(|| Error::from(signal_core::Error::unparseable_timestamp(raw, row)))
            })
            .collect(),
        DataType::Datetime(unit, _) => {
            let nanos_per_unit = match unit {
                TimeUnit::Nanoseconds => 1,
                TimeUnit::Microseconds => 1_000,
                TimeUnit::Milliseconds => 1_000_000,
            };
            epoch_scaled(column, nanos_per_unit)
        }
        DataType::Date => epoch_scaled(column, NANOS_PER_DAY),
        dt if dt.is_integer() => epoch_scaled(column, 1),
        dt => Err(Error::TypeMismatch {
            column: column.name().to_string(),
            expected: "timestamp".to_string(),
            got: format!("{dt:?}"),
        }),
    }
}

fn required_column<'a>(df: &'a DataFrame, series: &str, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| {
        Error::InvalidColumn(format!(
            "Required column '{name}' is missing from '{series}' (found {:?})",
            df.get_column_names()
        ))
    })
}

/// Convert a frame into a named [`SeriesTable`]
#[instrument(skip(df, columns), fields(rows = df.height()))]
pub fn series_table_from_frame<V: ColumnValue>(
    df: &DataFrame,
    name: &str,
    columns: &ColumnNames,
) -> Result<SeriesTable<V>> {
    let timestamps = extract_timestamps(required_column(df, name, &columns.timestamp)?)?;
    let values = V::extract(required_column(df, name, &columns.value)?)?;

    let table = SeriesTable::from_parts(name, timestamps, values);
    if !table.is_time_ordered() {
        debug!("Timestamps are not in non-decreasing order");
    }
    Ok(table)
}

/// Read a CSV file with a header row into a frame
pub fn read_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such table"),
        ));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(path = %path.display(), rows = df.height(), "Read table");
    Ok(df)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read one table from disk, named after its file
pub fn load_series<V: ColumnValue>(
    path: impl AsRef<Path>,
    columns: &ColumnNames,
) -> Result<SeriesTable<V>> {
    let path = path.as_ref();
    let df = read_table(path)?;
    series_table_from_frame(&df, &file_name(path), columns)
}

/// Read every `*.csv` table in `dir`, ordered by file name
#[instrument(skip(columns), fields(dir = %dir.as_ref().display()))]
pub fn load_population(
    dir: impl AsRef<Path>,
    columns: &ColumnNames,
) -> Result<Vec<SeriesTable<f64>>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    debug!("Loading {} tables", paths.len());
    paths.iter().map(|path| load_series(path, columns)).collect()
}
