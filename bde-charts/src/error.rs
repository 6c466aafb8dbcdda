/// Error types for selection and chart assembly.
use bde_db::StoreError;
use thiserror::Error;

/// Main error type for chart operations.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A store read failed during assembly (including a station with no
    /// data). Assembly aborts as a whole; partially built charts are never
    /// surfaced.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A theme name that does not match any preset.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Type alias for Results using ChartError.
pub type Result<T> = std::result::Result<T, ChartError>;
