//! SQL schema definitions for the store files.
//!
//! One schema serves both store files. The observation store populates
//! `metadata` and `observations`; the completeness store populates
//! `completeness`. Observation and completeness tables are wide, with one
//! REAL column per parameter code, matching the shape of the source's
//! per-station tables.

use bde_data::Parameter;

/// Returns the full SQL schema as a single batch string.
///
/// Tables:
/// - `metadata` - Station metadata (id, name, latitude, longitude)
/// - `observations` - Daily readings, one column per parameter
/// - `completeness` - Monthly reporting-completeness fractions in [0, 1]
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS metadata (
        station_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS observations (
        station_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        Tn REAL,
        Tx REAL,
        Tavg REAL,
        RH_avg REAL,
        RR REAL,
        ss REAL,
        ff_x REAL,
        ddd_x REAL,
        ff_avg REAL,
        ddd_car REAL,
        PRIMARY KEY (station_id, date)
    );
    CREATE INDEX IF NOT EXISTS idx_obs_station ON observations(station_id);

    CREATE TABLE IF NOT EXISTS completeness (
        station_id INTEGER NOT NULL,
        month TEXT NOT NULL,
        Tn REAL,
        Tx REAL,
        Tavg REAL,
        RH_avg REAL,
        RR REAL,
        ss REAL,
        ff_x REAL,
        ddd_x REAL,
        ff_avg REAL,
        ddd_car REAL,
        PRIMARY KEY (station_id, month)
    );
    CREATE INDEX IF NOT EXISTS idx_completeness_station ON completeness(station_id);

    "#
}

/// Comma-separated parameter column list, in catalog order.
pub(crate) fn parameter_column_list() -> String {
    Parameter::ALL
        .iter()
        .map(|p| p.code())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["metadata", "observations", "completeness"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }

    #[test]
    fn column_list_matches_parameter_order() {
        assert_eq!(
            parameter_column_list(),
            "Tn, Tx, Tavg, RH_avg, RR, ss, ff_x, ddd_x, ff_avg, ddd_car"
        );
    }
}
