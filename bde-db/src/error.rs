/// Error types for the store layer.
use bde_data::DataError;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite failure.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to parse CSV input while loading.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A stored date cell could not be parsed.
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// The metadata table is absent or empty. Startup cannot proceed
    /// without the station catalog.
    #[error("Station metadata missing from store")]
    MissingMetadata,

    /// The requested station has no row group in this store.
    #[error("No data for station {0}")]
    StationNotFound(i64),

    /// A domain-level invariant was violated by stored data.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Type alias for Results using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;
