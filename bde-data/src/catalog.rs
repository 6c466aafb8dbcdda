//! The in-memory station catalog.
//!
//! Loaded once at startup from the store's metadata table and passed to every
//! component that needs station lookups; there is no global state.

use crate::station::StationMeta;
use std::collections::HashMap;

/// Immutable collection of all known stations.
#[derive(Debug, Clone)]
pub struct Catalog {
    stations: Vec<StationMeta>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    /// Build a catalog from metadata rows, keeping the given order.
    pub fn new(stations: Vec<StationMeta>) -> Self {
        let by_id = stations
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.station_id, idx))
            .collect();
        Catalog { stations, by_id }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationMeta> {
        self.stations.iter()
    }

    pub fn get(&self, station_id: i64) -> Option<&StationMeta> {
        self.by_id.get(&station_id).map(|&idx| &self.stations[idx])
    }

    /// Look up a station that is required to exist.
    ///
    /// Selections are always derived from catalog-backed ids, so a miss here
    /// is a programming error, not a runtime condition.
    pub fn station(&self, station_id: i64) -> &StationMeta {
        self.get(station_id)
            .unwrap_or_else(|| panic!("station {} is not in the catalog", station_id))
    }

    /// Mean (latitude, longitude) across all stations, for map centering.
    pub fn mean_position(&self) -> Option<(f64, f64)> {
        if self.stations.is_empty() {
            return None;
        }
        let n = self.stations.len() as f64;
        let lat: f64 = self.stations.iter().map(|s| s.latitude).sum();
        let lon: f64 = self.stations.iter().map(|s| s.longitude).sum();
        Some((lat / n, lon / n))
    }
}
