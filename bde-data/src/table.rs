//! Date-indexed observation and completeness tables.
//!
//! Both tables are wide: one `Option<f64>` column per parameter, with dates
//! as the row key. Rows must arrive in strictly increasing date order; this
//! keeps alignment across stations a simple merge by date value.

use crate::error::{DataError, Result};
use crate::parameter::Parameter;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A single station's full observation table, one row per day.
///
/// Cells are `None` where the source had no reading. Sentinel readings
/// (see [`crate::sanitize`]) are still present until the table is sanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    station_id: i64,
    dates: Vec<NaiveDate>,
    columns: BTreeMap<Parameter, Vec<Option<f64>>>,
}

impl ObservationTable {
    pub fn new(station_id: i64) -> Self {
        ObservationTable {
            station_id,
            dates: Vec::new(),
            columns: Parameter::ALL.iter().map(|&p| (p, Vec::new())).collect(),
        }
    }

    /// Append a row. Dates must be strictly increasing.
    pub fn push_row(&mut self, date: NaiveDate, values: [Option<f64>; 10]) -> Result<()> {
        if let Some(&last) = self.dates.last() {
            if date <= last {
                return Err(DataError::OutOfOrderDate {
                    station_id: self.station_id,
                    date,
                });
            }
        }
        self.dates.push(date);
        for (parameter, value) in Parameter::ALL.iter().zip(values) {
            self.columns
                .get_mut(parameter)
                .expect("all parameter columns exist")
                .push(value);
        }
        Ok(())
    }

    pub fn station_id(&self) -> i64 {
        self.station_id
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The column for one parameter, aligned with [`Self::dates`].
    pub fn column(&self, parameter: Parameter) -> &[Option<f64>] {
        self.columns
            .get(&parameter)
            .expect("all parameter columns exist")
    }

    pub(crate) fn columns_mut(&mut self) -> impl Iterator<Item = &mut Vec<Option<f64>>> {
        self.columns.values_mut()
    }
}

/// A single station's reporting-completeness table, one row per month.
///
/// Cells are fractions in `[0, 1]`; [`Self::percentages`] converts a column
/// to the 0–100 scale used for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessTable {
    station_id: i64,
    months: Vec<NaiveDate>,
    columns: BTreeMap<Parameter, Vec<Option<f64>>>,
}

impl CompletenessTable {
    pub fn new(station_id: i64) -> Self {
        CompletenessTable {
            station_id,
            months: Vec::new(),
            columns: Parameter::ALL.iter().map(|&p| (p, Vec::new())).collect(),
        }
    }

    /// Append a row. Month buckets must be strictly increasing.
    pub fn push_row(&mut self, month: NaiveDate, values: [Option<f64>; 10]) -> Result<()> {
        if let Some(&last) = self.months.last() {
            if month <= last {
                return Err(DataError::OutOfOrderDate {
                    station_id: self.station_id,
                    date: month,
                });
            }
        }
        self.months.push(month);
        for (parameter, value) in Parameter::ALL.iter().zip(values) {
            self.columns
                .get_mut(parameter)
                .expect("all parameter columns exist")
                .push(value);
        }
        Ok(())
    }

    pub fn station_id(&self) -> i64 {
        self.station_id
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The raw fraction column for one parameter, aligned with [`Self::months`].
    pub fn column(&self, parameter: Parameter) -> &[Option<f64>] {
        self.columns
            .get(&parameter)
            .expect("all parameter columns exist")
    }

    /// One parameter's column rescaled to percent: rounded to three decimals
    /// as a fraction, then multiplied by 100.
    pub fn percentages(&self, parameter: Parameter) -> Vec<Option<f64>> {
        self.column(parameter)
            .iter()
            .map(|cell| cell.map(|v| (v * 1000.0).round() / 10.0))
            .collect()
    }
}
