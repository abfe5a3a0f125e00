//! End-to-end report over one series and its population

use polars::prelude::DataFrame;
use signal_core::{auto_engine, check_count};
use signal_outlier::{DistanceMatrixBuilder, OutlierRanking};
use signal_polars::{load_population, read_table, ReportConfig, Result, SignalStatsExt};
use std::fmt;
use tracing::{debug, instrument};

/// Results of every analysis in a report
#[derive(Debug, Clone)]
pub struct Report {
    /// File name of the single analysed series
    pub series: String,
    pub config: ReportConfig,
    pub occurrence: DataFrame,
    pub dwell: DataFrame,
    pub cycles: DataFrame,
    /// `None` when the outlier analysis was skipped
    pub outliers: Option<OutlierRanking>,
}

/// Run the configured analyses
///
/// The single-series analyses read `data_folder/csv_name`; the outlier ranking
/// reads every table in `data_folder` unless `with_outliers` is false.
#[instrument(skip(config), fields(series = %config.input.csv_name))]
pub fn run_report(config: &ReportConfig, with_outliers: bool) -> Result<Report> {
    let columns = &config.columns;
    let df = read_table(config.series_path())?;

    let name = &config.input.csv_name;
    let occurrence =
        df.occurrence_ranking(name, columns, config.occurrence.n, config.occurrence.ascending)?;
    let dwell = df.dwell_ranking(name, columns, config.dwell.n, config.dwell.ascending)?;
    let cycles = df.cycle_ranking(name, columns, config.cycles.n, config.cycles.smallest)?;

    let outliers = if with_outliers {
        check_count(config.outliers.n)?;
        let population = load_population(&config.input.data_folder, columns)?;
        debug!(
            "Ranking {} series in {}",
            population.len(),
            config.input.data_folder.display()
        );
        let params = config.outliers.parameters()?;
        Some(DistanceMatrixBuilder::with_engine(auto_engine(), params).build(&population)?)
    } else {
        None
    };

    Ok(Report {
        series: config.input.csv_name.clone(),
        config: config.clone(),
        occurrence,
        dwell,
        cycles,
        outliers,
    })
}

fn direction(ascending: bool, low: &'static str, high: &'static str) -> &'static str {
    if ascending {
        low
    } else {
        high
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occurrence = &self.config.occurrence;
        let dwell = &self.config.dwell;
        let cycles = &self.config.cycles;

        writeln!(f, "Series: {}", self.series)?;
        writeln!(
            f,
            "\n{} {} frequent values:\n{}",
            occurrence.n,
            direction(occurrence.ascending, "least", "most"),
            self.occurrence
        )?;
        writeln!(
            f,
            "\n{} values with the {} dwell time:\n{}",
            dwell.n,
            direction(dwell.ascending, "shortest", "longest"),
            self.dwell
        )?;
        writeln!(
            f,
            "\n{} {} cycles:\n{}",
            cycles.n,
            direction(cycles.smallest, "smallest", "largest"),
            self.cycles
        )?;

        if let Some(ranking) = &self.outliers {
            let n = self.config.outliers.n;
            writeln!(f, "\nTop {n} outlier series (seed {}):", ranking.seed())?;
            for (rank, score) in ranking.top(n).iter().enumerate() {
                writeln!(f, "  {}. {}", rank + 1, score)?;
            }
        }
        Ok(())
    }
}
