//! Outlier rankings as DataFrames

use crate::Result;
use polars::prelude::*;
use signal_outlier::OutlierRanking;

/// Series scores, most dissimilar first
///
/// Columns: `series` and `total_distance`.
pub fn outlier_frame(ranking: &OutlierRanking) -> Result<DataFrame> {
    let names: Vec<&str> = ranking.scores().iter().map(|s| s.name.as_str()).collect();
    let totals: Vec<f64> = ranking.scores().iter().map(|s| s.total_distance).collect();

    Ok(DataFrame::new(vec![
        Series::new("series".into(), names).into(),
        Series::new("total_distance".into(), totals).into(),
    ])?)
}

/// Every pair distance in enumeration order
///
/// Columns: `a`, `b` (population indices) and `distance`.
pub fn pair_distance_frame(ranking: &OutlierRanking) -> Result<DataFrame> {
    let a: Vec<u64> = ranking.pairs().iter().map(|p| p.a as u64).collect();
    let b: Vec<u64> = ranking.pairs().iter().map(|p| p.b as u64).collect();
    let distance: Vec<f64> = ranking.pairs().iter().map(|p| p.distance).collect();

    Ok(DataFrame::new(vec![
        Series::new("a".into(), a).into(),
        Series::new("b".into(), b).into(),
        Series::new("distance".into(), distance).into(),
    ])?)
}
