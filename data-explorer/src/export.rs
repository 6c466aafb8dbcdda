//! CSV export of the assembled chart data.
//!
//! Written next to the HTML output when `--export-csv` is given, so the
//! numbers behind the charts can be inspected or post-processed without
//! re-reading the stores. Long format, one row per cell; missing values
//! export as empty fields.

use anyhow::Context;
use bde_charts::{CompletenessMatrix, SeriesBundle};
use std::fs;
use std::path::{Path, PathBuf};

/// Write the time-series bundle as `timeseries-{code}.csv`:
/// `station_id,date,{code}` rows in selection order.
pub fn write_series_csv(dir: &Path, bundle: &SeriesBundle) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("timeseries-{}.csv", bundle.parameter.code()));
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    wtr.write_record(["station_id", "date", bundle.parameter.code()])?;
    for series in &bundle.series {
        for (date, value) in series.dates.iter().zip(&series.values) {
            wtr.write_record([
                series.station_id.to_string(),
                date.format("%Y-%m-%d").to_string(),
                value.map(|v| v.to_string()).unwrap_or_default(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(path)
}

/// Write the completeness matrix as `completeness-{code}.csv`:
/// `station_id,month,percent` rows in heatmap row order (top row first).
pub fn write_matrix_csv(dir: &Path, matrix: &CompletenessMatrix) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("completeness-{}.csv", matrix.parameter.code()));
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    wtr.write_record(["station_id", "month", "percent"])?;
    for (station_id, row) in matrix.station_ids.iter().zip(&matrix.rows) {
        for (month, value) in matrix.months.iter().zip(row) {
            wtr.write_record([
                station_id.to_string(),
                month.format("%Y-%m-%d").to_string(),
                value.map(|v| v.to_string()).unwrap_or_default(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bde_charts::StationSeries;
    use bde_data::Parameter;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn series_csv_has_one_row_per_cell() {
        let dir = TempDir::new().unwrap();
        let bundle = SeriesBundle {
            parameter: Parameter::Rr,
            series: vec![StationSeries {
                station_id: 96783,
                label: "96783 - Bandung".to_string(),
                dates: vec![date(2022, 5, 4), date(2022, 5, 5)],
                values: vec![Some(1.5), None],
            }],
        };
        let path = write_series_csv(dir.path(), &bundle).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "station_id,date,RR\n96783,2022-05-04,1.5\n96783,2022-05-05,\n"
        );
        assert!(path.ends_with("timeseries-RR.csv"));
    }

    #[test]
    fn matrix_csv_preserves_row_order() {
        let dir = TempDir::new().unwrap();
        let matrix = CompletenessMatrix {
            parameter: Parameter::Rr,
            months: vec![date(2022, 5, 1)],
            station_ids: vec![96001, 96783],
            rows: vec![vec![Some(50.0)], vec![Some(85.7)]],
        };
        let path = write_matrix_csv(dir.path(), &matrix).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "station_id,month,percent\n96001,2022-05-01,50\n96783,2022-05-01,85.7\n"
        );
    }
}
