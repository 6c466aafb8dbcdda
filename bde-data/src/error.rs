/// Error types for the core data layer.
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for domain data operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// A parameter code that is not one of the ten known BMKG codes.
    #[error("Unknown parameter code: {0}")]
    UnknownParameter(String),

    /// A table row arrived out of date order.
    #[error("Out-of-order date {date} for station {station_id}")]
    OutOfOrderDate { station_id: i64, date: NaiveDate },
}

/// Type alias for Results using DataError.
pub type Result<T> = std::result::Result<T, DataError>;
