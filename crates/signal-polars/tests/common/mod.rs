//! Common test utilities for signal-polars tests

#![allow(dead_code)]

use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Frame with the default column names
pub fn signal_df(timestamps: &[&str], values: &[f64]) -> DataFrame {
    df![
        "timestamp_utc" => timestamps,
        "sig_value" => values,
    ]
    .unwrap()
}

/// Frame with textual state values
pub fn state_df(timestamps: &[&str], values: &[&str]) -> DataFrame {
    df![
        "timestamp_utc" => timestamps,
        "sig_value" => values,
    ]
    .unwrap()
}

/// `n` timestamps one second apart starting at midnight
pub fn seconds(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("2024-01-01 {:02}:{:02}:{:02}", i / 3600, (i / 60) % 60, i % 60))
        .collect()
}

/// Write a CSV table with an index column, as exported from a DataFrame library
pub fn write_csv(dir: &Path, file: &str, timestamps: &[String], values: &[f64]) -> PathBuf {
    let mut text = String::from("idx,timestamp_utc,sig_value\n");
    for (i, (t, v)) in timestamps.iter().zip(values).enumerate() {
        text.push_str(&format!("{i},{t},{v}\n"));
    }
    let path = dir.join(file);
    std::fs::write(&path, text).unwrap();
    path
}

/// Extract a f64 column
pub fn f64_column(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

/// Extract a string column
pub fn str_column(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}

/// Extract an i64 column
pub fn i64_column(df: &DataFrame, name: &str) -> Vec<i64> {
    df.column(name)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}
