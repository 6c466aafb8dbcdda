//! Station metadata records.

use serde::Serialize;

/// Metadata for a single BMKG observation station.
///
/// One row per known station; `station_id` is the unique key used by the
/// store, the selection and the chart labels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationMeta {
    /// WMO-style numeric station identifier (e.g. 96783).
    pub station_id: i64,
    /// Station name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl StationMeta {
    /// Display label used for dropdown options and chart series names.
    pub fn label(&self) -> String {
        format!("{} - {}", self.station_id, self.name)
    }
}
