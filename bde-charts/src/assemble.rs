//! Chart data assembly.
//!
//! Turns a resolved station selection and a chosen parameter into the two
//! chart-ready shapes: one named series per station for the time-series
//! chart, and one stacked percentage matrix for the completeness heatmap.
//!
//! Both builders iterate in selection order and abort on the first station
//! without data; a chart is either complete or not produced at all.

use crate::error::Result;
use bde_data::{Catalog, Parameter};
use bde_db::Store;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// One station's values for the chosen parameter, date-indexed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationSeries {
    pub station_id: i64,
    /// `"{station_id} - {station_name}"`, shown in the legend.
    pub label: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Option<f64>>,
}

/// All series for the time-series chart, in selection order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesBundle {
    pub parameter: Parameter,
    pub series: Vec<StationSeries>,
}

/// The completeness heatmap matrix.
///
/// Rows follow `station_ids`; both are in reverse selection order so the
/// most-recently-selected station renders as the top row. That ordering is a
/// presentation convention, not a sort, and is relied upon by the UI.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletenessMatrix {
    pub parameter: Parameter,
    /// Union of all stations' month buckets, ascending.
    pub months: Vec<NaiveDate>,
    pub station_ids: Vec<i64>,
    /// Percentages in [0, 100]; `None` where a station has no bucket.
    pub rows: Vec<Vec<Option<f64>>>,
}

/// Build one labeled series per selected station.
///
/// Observation tables come back from the store already sanitized, so
/// sentinel readings appear here as missing values. Stations absent from
/// the catalog panic: the selection is always derived from catalog ids.
pub fn build_timeseries(
    store: &Store,
    catalog: &Catalog,
    stations: &[i64],
    parameter: Parameter,
) -> Result<SeriesBundle> {
    let mut series = Vec::with_capacity(stations.len());
    for &station_id in stations {
        let table = store.read_observations(station_id)?;
        let meta = catalog.station(station_id);
        series.push(StationSeries {
            station_id,
            label: meta.label(),
            dates: table.dates().to_vec(),
            values: table.column(parameter).to_vec(),
        });
    }
    log::debug!("assemble: {} series for {}", series.len(), parameter);
    Ok(SeriesBundle { parameter, series })
}

/// Build the percentage matrix for the completeness heatmap.
///
/// Stations are aligned on the union of their month buckets (outer join);
/// a month one station reports and another does not yields a missing cell,
/// never a zero.
pub fn build_completeness(
    store: &Store,
    stations: &[i64],
    parameter: Parameter,
) -> Result<CompletenessMatrix> {
    let mut per_station: Vec<(i64, BTreeMap<NaiveDate, f64>)> = Vec::with_capacity(stations.len());
    for &station_id in stations {
        let table = store.read_completeness(station_id)?;
        let cells: BTreeMap<NaiveDate, f64> = table
            .months()
            .iter()
            .copied()
            .zip(table.percentages(parameter))
            .filter_map(|(month, value)| value.map(|v| (month, v)))
            .collect();
        per_station.push((station_id, cells));
    }

    let months: Vec<NaiveDate> = per_station
        .iter()
        .flat_map(|(_, cells)| cells.keys().copied())
        .unique()
        .sorted()
        .collect();

    let mut station_ids = Vec::with_capacity(per_station.len());
    let mut rows = Vec::with_capacity(per_station.len());
    for (station_id, cells) in per_station.iter().rev() {
        station_ids.push(*station_id);
        rows.push(months.iter().map(|m| cells.get(m).copied()).collect());
    }

    log::debug!(
        "assemble: completeness matrix {}x{} for {}",
        rows.len(),
        months.len(),
        parameter
    );
    Ok(CompletenessMatrix {
        parameter,
        months,
        station_ids,
        rows,
    })
}
