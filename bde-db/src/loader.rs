//! CSV loading for producing store files.
//!
//! The explorer never writes to a store; these loaders back the ingestion
//! tooling and the test fixtures. Each loader parses CSV from a string slice
//! and upserts rows into the corresponding table. Cells that do not parse as
//! numbers are stored as NULL; rows without a usable station id or date are
//! skipped and counted.
//!
//! # CSV Formats (all with headers)
//!
//! - **Metadata**: `station_id,name,latitude,longitude`
//! - **Observations**: `station_id,date,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car`
//!   with dates as `YYYY-MM-DD`
//! - **Completeness**: same columns as observations with `month` (first day
//!   of month) in place of `date`, cells as fractions in [0, 1]
//!
//! Sentinel readings (8888/9999) are loaded verbatim; sanitation belongs to
//! the read path, not the store.

use crate::error::Result;
use crate::schema;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::path::Path;

/// Write-side handle used to create and populate a store file.
pub struct StoreBuilder {
    conn: Connection,
}

impl StoreBuilder {
    /// Create (or open) a store file and apply the schema.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(schema::create_schema())?;
        Ok(StoreBuilder { conn })
    }

    /// Load station metadata from CSV. Returns the number of rows loaded.
    pub fn load_metadata(&self, csv_data: &str) -> Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        for result in rdr.records() {
            let r = result?;
            let station_id: i64 = match r.get(0).unwrap_or("").trim().parse() {
                Ok(id) => id,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let name = r.get(1).unwrap_or("").trim();
            let latitude: Option<f64> = r.get(2).and_then(|s| s.trim().parse().ok());
            let longitude: Option<f64> = r.get(3).and_then(|s| s.trim().parse().ok());
            let (latitude, longitude) = match (latitude, longitude) {
                (Some(lat), Some(lon)) if !name.is_empty() => (lat, lon),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            self.conn.execute(
                "INSERT OR REPLACE INTO metadata (station_id, name, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4)",
                params![station_id, name, latitude, longitude],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} stations, skipped {}", count, skipped);
        Ok(count)
    }

    /// Load daily observations from CSV. Returns the number of rows loaded.
    pub fn load_observations(&self, csv_data: &str) -> Result<usize> {
        self.load_wide_rows(csv_data, "observations", "date")
    }

    /// Load monthly completeness fractions from CSV.
    pub fn load_completeness(&self, csv_data: &str) -> Result<usize> {
        self.load_wide_rows(csv_data, "completeness", "month")
    }

    /// Shared insert path for the two wide per-parameter tables.
    fn load_wide_rows(&self, csv_data: &str, table: &str, date_column: &str) -> Result<usize> {
        let sql = format!(
            "INSERT OR REPLACE INTO {} (station_id, {}, {})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            table,
            date_column,
            schema::parameter_column_list(),
        );

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        for result in rdr.records() {
            let r = result?;
            let station_id: i64 = match r.get(0).unwrap_or("").trim().parse() {
                Ok(id) => id,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let date = match NaiveDate::parse_from_str(r.get(1).unwrap_or("").trim(), "%Y-%m-%d") {
                Ok(d) => d.format("%Y-%m-%d").to_string(),
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let mut values: [Option<f64>; 10] = [None; 10];
            for (offset, value) in values.iter_mut().enumerate() {
                *value = r.get(2 + offset).and_then(|s| s.trim().parse().ok());
            }

            self.conn.execute(
                &sql,
                params![
                    station_id, date, values[0], values[1], values[2], values[3], values[4],
                    values[5], values[6], values[7], values[8], values[9],
                ],
            )?;
            count += 1;
        }
        log::info!(
            "loader: loaded {} {} rows, skipped {}",
            count,
            table,
            skipped
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join("bmkg.db")
    }

    #[test]
    fn load_metadata_from_csv() {
        let dir = TempDir::new().unwrap();
        let builder = StoreBuilder::create(store_path(&dir)).unwrap();
        let csv = "\
station_id,name,latitude,longitude
96001,Maimun Saleh,5.87,95.33
96783,Bandung,-6.88,107.59
";
        assert_eq!(builder.load_metadata(csv).unwrap(), 2);

        let name: String = builder
            .conn
            .query_row(
                "SELECT name FROM metadata WHERE station_id = 96783",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(name, "Bandung");
    }

    #[test]
    fn load_metadata_skips_bad_rows() {
        let dir = TempDir::new().unwrap();
        let builder = StoreBuilder::create(store_path(&dir)).unwrap();
        let csv = "\
station_id,name,latitude,longitude
not-an-id,Nowhere,0.0,0.0
96783,Bandung,-6.88,107.59
96999,MissingCoords,,
";
        assert_eq!(builder.load_metadata(csv).unwrap(), 1);
    }

    #[test]
    fn load_observations_keeps_blank_cells_null() {
        let dir = TempDir::new().unwrap();
        let builder = StoreBuilder::create(store_path(&dir)).unwrap();
        let csv = "\
station_id,date,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car
96783,2022-05-04,23.0,31.2,26.5,80,1.5,6.2,5,270,2,C
96783,2022-05-05,,,,,9999,,,,,
";
        assert_eq!(builder.load_observations(csv).unwrap(), 2);

        let rr: Option<f64> = builder
            .conn
            .query_row(
                "SELECT RR FROM observations WHERE date = '2022-05-05'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        // Sentinels are loaded verbatim; sanitation happens on read.
        assert_eq!(rr, Some(9999.0));

        let ddd_car: Option<f64> = builder
            .conn
            .query_row(
                "SELECT ddd_car FROM observations WHERE date = '2022-05-04'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(ddd_car.is_none(), "non-numeric cells should be NULL");
    }

    #[test]
    fn load_observations_skips_undated_rows() {
        let dir = TempDir::new().unwrap();
        let builder = StoreBuilder::create(store_path(&dir)).unwrap();
        let csv = "\
station_id,date,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car
96783,05/04/2022,,,,,1.0,,,,,
96783,2022-05-04,,,,,1.0,,,,,
";
        assert_eq!(builder.load_observations(csv).unwrap(), 1);
    }

    #[test]
    fn load_completeness_from_csv() {
        let dir = TempDir::new().unwrap();
        let builder = StoreBuilder::create(store_path(&dir)).unwrap();
        let csv = "\
station_id,month,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car
96783,2022-05-01,1.0,1.0,0.97,1.0,0.8567,0.9,1.0,1.0,1.0,1.0
";
        assert_eq!(builder.load_completeness(csv).unwrap(), 1);

        let rr: Option<f64> = builder
            .conn
            .query_row(
                "SELECT RR FROM completeness WHERE month = '2022-05-01'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(rr, Some(0.8567));
    }

    #[test]
    fn upsert_replaces_existing_rows() {
        let dir = TempDir::new().unwrap();
        let builder = StoreBuilder::create(store_path(&dir)).unwrap();
        let header = "station_id,date,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car\n";
        builder
            .load_observations(&format!("{header}96783,2022-05-04,,,,,1.0,,,,,\n"))
            .unwrap();
        builder
            .load_observations(&format!("{header}96783,2022-05-04,,,,,2.0,,,,,\n"))
            .unwrap();

        let count: i64 = builder
            .conn
            .query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Should have 1 row after upsert");

        let rr: Option<f64> = builder
            .conn
            .query_row("SELECT RR FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rr, Some(2.0));
    }
}
