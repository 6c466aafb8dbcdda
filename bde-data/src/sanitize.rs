//! Sentinel sanitation for raw observation tables.
//!
//! BMKG encodes "missing/invalid" as the literal values 8888 and 9999 inside
//! otherwise numeric columns. These are out-of-band flags, not measurements;
//! they must be replaced with an explicit missing marker before anything is
//! aggregated or plotted, otherwise they corrupt axis scales and heatmap
//! coloring. The substitution is an expected correction and is not reported
//! beyond a debug trace.

use crate::table::ObservationTable;

/// The literal values BMKG uses to flag a missing or invalid reading.
pub const SENTINEL_VALUES: [f64; 2] = [8888.0, 9999.0];

/// Replace every sentinel cell with `None`, across all columns, in place.
///
/// Idempotent: sanitizing twice is the same as sanitizing once.
pub fn sanitize(table: &mut ObservationTable) {
    let mut replaced = 0usize;
    for column in table.columns_mut() {
        for cell in column.iter_mut() {
            if matches!(cell, Some(v) if SENTINEL_VALUES.contains(v)) {
                *cell = None;
                replaced += 1;
            }
        }
    }
    if replaced > 0 {
        log::debug!(
            "sanitize: replaced {} sentinel cells for station {}",
            replaced,
            table.station_id()
        );
    }
}
