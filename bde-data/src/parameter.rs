//! The fixed catalog of BMKG meteorological parameters.
//!
//! The ten parameter codes are the column names of the per-station
//! observation tables and the join key for every label lookup. The set is
//! fixed at build time; it is not derived from data.

use crate::error::DataError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A meteorological parameter recorded by BMKG stations.
///
/// Variants are ordered the way the source publishes its columns; that order
/// is also the dropdown order in the explorer UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    /// Minimum temperature (°C)
    Tn,
    /// Maximum temperature (°C)
    Tx,
    /// Average temperature (°C)
    Tavg,
    /// Average relative humidity (%)
    RhAvg,
    /// Rainfall (mm)
    Rr,
    /// Sunshine duration (hours)
    Ss,
    /// Maximum wind speed (m/s)
    FfX,
    /// Wind direction at maximum speed (°)
    DddX,
    /// Average wind speed (m/s)
    FfAvg,
    /// Most frequent wind direction (°)
    DddCar,
}

impl Parameter {
    /// All parameters, in catalog order.
    pub const ALL: [Parameter; 10] = [
        Parameter::Tn,
        Parameter::Tx,
        Parameter::Tavg,
        Parameter::RhAvg,
        Parameter::Rr,
        Parameter::Ss,
        Parameter::FfX,
        Parameter::DddX,
        Parameter::FfAvg,
        Parameter::DddCar,
    ];

    /// The short code used as a table column name and as the dropdown value.
    pub fn code(&self) -> &'static str {
        match self {
            Parameter::Tn => "Tn",
            Parameter::Tx => "Tx",
            Parameter::Tavg => "Tavg",
            Parameter::RhAvg => "RH_avg",
            Parameter::Rr => "RR",
            Parameter::Ss => "ss",
            Parameter::FfX => "ff_x",
            Parameter::DddX => "ddd_x",
            Parameter::FfAvg => "ff_avg",
            Parameter::DddCar => "ddd_car",
        }
    }

    /// Human-readable display label, unit included.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Tn => "Temperatur minimum (°C)",
            Parameter::Tx => "Temperatur maksimum (°C)",
            Parameter::Tavg => "Temperatur rata-rata (°C)",
            Parameter::RhAvg => "Kelembapan rata-rata (%)",
            Parameter::Rr => "Curah hujan (mm)",
            Parameter::Ss => "Lamanya penyinaran matahari (jam)",
            Parameter::FfX => "Kecepatan angin maksimum (m/s)",
            Parameter::DddX => "Arah angin saat kecepatan maksimum (°)",
            Parameter::FfAvg => "Kecepatan angin rata-rata (m/s)",
            Parameter::DddCar => "Arah angin terbanyak (°)",
        }
    }

    /// The label without its unit suffix, for chart titles.
    pub fn quantity(&self) -> &'static str {
        match self.label().split_once(" (") {
            Some((name, _)) => name,
            None => self.label(),
        }
    }

    /// Zero-based position within [`Parameter::ALL`].
    pub fn index(&self) -> usize {
        Parameter::ALL
            .iter()
            .position(|p| p == self)
            .expect("parameter is always present in ALL")
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Parameter {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .iter()
            .find(|p| p.code() == s)
            .copied()
            .ok_or_else(|| DataError::UnknownParameter(s.to_string()))
    }
}
