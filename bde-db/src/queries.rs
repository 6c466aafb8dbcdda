//! Read-side queries against a store file.
//!
//! Every method opens its own read-only connection and drops it on return;
//! see the crate docs for why no handle is kept across calls.

use crate::error::{Result, StoreError};
use crate::schema;
use crate::Store;
use bde_data::sanitize::sanitize;
use bde_data::{Catalog, CompletenessTable, ObservationTable, StationMeta};
use chrono::NaiveDate;
use rusqlite::Connection;

impl Store {
    /// Read the station catalog from the metadata table.
    ///
    /// Fails with [`StoreError::MissingMetadata`] when the table is absent or
    /// empty. Callers treat this as fatal at startup; every later operation
    /// needs the catalog.
    pub fn read_catalog(&self) -> Result<Catalog> {
        let conn = self.open_read_only()?;
        if !table_exists(&conn, "metadata")? {
            return Err(StoreError::MissingMetadata);
        }
        let mut stmt = conn.prepare(
            "SELECT station_id, name, latitude, longitude FROM metadata
             ORDER BY station_id",
        )?;
        let stations = stmt
            .query_map([], |row| {
                Ok(StationMeta {
                    station_id: row.get(0)?,
                    name: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if stations.is_empty() {
            return Err(StoreError::MissingMetadata);
        }
        log::info!("store: catalog holds {} stations", stations.len());
        Ok(Catalog::new(stations))
    }

    /// Read one station's full observation table, sanitized and ordered by
    /// date.
    ///
    /// Fails with [`StoreError::StationNotFound`] when the station has no
    /// rows; not every catalog station is guaranteed to have data.
    pub fn read_observations(&self, station_id: i64) -> Result<ObservationTable> {
        let conn = self.open_read_only()?;
        let sql = format!(
            "SELECT date, {} FROM observations WHERE station_id = ?1 ORDER BY date",
            schema::parameter_column_list(),
        );
        let rows = read_wide_rows(&conn, &sql, station_id)?;
        if rows.is_empty() {
            return Err(StoreError::StationNotFound(station_id));
        }

        let mut table = ObservationTable::new(station_id);
        for (date, values) in rows {
            table.push_row(parse_date(&date)?, values)?;
        }
        sanitize(&mut table);
        log::debug!(
            "store: read {} observation rows for station {}",
            table.len(),
            station_id
        );
        Ok(table)
    }

    /// Read one station's monthly completeness table, ordered by month.
    ///
    /// Same not-found contract as [`Store::read_observations`].
    pub fn read_completeness(&self, station_id: i64) -> Result<CompletenessTable> {
        let conn = self.open_read_only()?;
        let sql = format!(
            "SELECT month, {} FROM completeness WHERE station_id = ?1 ORDER BY month",
            schema::parameter_column_list(),
        );
        let rows = read_wide_rows(&conn, &sql, station_id)?;
        if rows.is_empty() {
            return Err(StoreError::StationNotFound(station_id));
        }

        let mut table = CompletenessTable::new(station_id);
        for (month, values) in rows {
            table.push_row(parse_date(&month)?, values)?;
        }
        log::debug!(
            "store: read {} completeness rows for station {}",
            table.len(),
            station_id
        );
        Ok(table)
    }
}

/// Fetch (date, parameter cells) rows from one of the wide tables.
fn read_wide_rows(
    conn: &Connection,
    sql: &str,
    station_id: i64,
) -> Result<Vec<(String, [Option<f64>; 10])>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([station_id], |row| {
            let date: String = row.get(0)?;
            let mut values: [Option<f64>; 10] = [None; 10];
            for (offset, value) in values.iter_mut().enumerate() {
                *value = row.get(1 + offset)?;
            }
            Ok((date, values))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| StoreError::DateParse(text.to_string()))
}
