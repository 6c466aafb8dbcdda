//! Core domain types for the BMKG Data Explorer.
//!
//! This crate holds everything the chart layer and the store layer agree on:
//! station metadata, the fixed meteorological parameter catalog, the
//! date-indexed observation and completeness tables, and the sentinel
//! sanitation applied to raw observation values.
//!
//! Nothing in here touches a file or a database; see `bde-db` for the
//! SQLite-backed store and `bde-charts` for selection and figure assembly.

pub mod catalog;
pub mod error;
pub mod parameter;
pub mod sanitize;
pub mod station;
pub mod table;

pub use catalog::Catalog;
pub use error::DataError;
pub use parameter::Parameter;
pub use station::StationMeta;
pub use table::{CompletenessTable, ObservationTable};
