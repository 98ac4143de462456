//! One column per calendar year, rows aligned on the reference year.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{Datelike, NaiveDateTime};
use spei_series::Series;
use tracing::debug;

use crate::error::CalendarError;
use crate::reference::{REFERENCE_YEAR, to_reference_year, with_year};

/// A multi-year series reshaped into yearly columns.
///
/// Rows are timestamps in [`REFERENCE_YEAR`]; every column has one value per
/// row, `NaN` where the year has no observation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearlyTable {
    index: Vec<NaiveDateTime>,
    years: Vec<i32>,
    columns: Vec<Vec<f64>>,
}

impl YearlyTable {
    /// Builds a table from a row index and `(year, values)` columns, kept in
    /// the given order.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`CalendarError::RowOutsideReferenceYear`] | a row not in [`REFERENCE_YEAR`] |
    /// | [`CalendarError::ColumnLengthMismatch`] | a column without one value per row |
    /// | [`CalendarError::DuplicateYear`] | a year given twice |
    pub fn from_columns(
        index: Vec<NaiveDateTime>,
        columns: Vec<(i32, Vec<f64>)>,
    ) -> Result<Self, CalendarError> {
        if let Some(&row) = index.iter().find(|r| r.year() != REFERENCE_YEAR) {
            return Err(CalendarError::RowOutsideReferenceYear {
                row,
                reference_year: REFERENCE_YEAR,
            });
        }

        let mut seen = HashSet::with_capacity(columns.len());
        let mut years = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (year, column) in columns {
            if column.len() != index.len() {
                return Err(CalendarError::ColumnLengthMismatch {
                    year,
                    len: column.len(),
                    n_rows: index.len(),
                });
            }
            if !seen.insert(year) {
                return Err(CalendarError::DuplicateYear { year });
            }
            years.push(year);
            values.push(column);
        }

        Ok(Self {
            index,
            years,
            columns: values,
        })
    }

    /// Row timestamps, all in [`REFERENCE_YEAR`].
    pub fn index(&self) -> &[NaiveDateTime] {
        &self.index
    }

    /// Column years, in table order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Values of the column for `year`.
    pub fn column(&self, year: i32) -> Option<&[f64]> {
        self.years
            .iter()
            .position(|&y| y == year)
            .map(|i| self.columns[i].as_slice())
    }

    /// Iterates over `(year, values)` in table order.
    pub fn columns(&self) -> impl Iterator<Item = (i32, &[f64])> {
        self.years
            .iter()
            .copied()
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_columns(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty() && self.years.is_empty()
    }
}

/// Reshapes `series` into one column per calendar year.
///
/// Every year from the first to the last observed one gets a column, so
/// years without observations appear as all-`NaN` columns. Rows are the
/// sorted union of the timestamps moved to [`REFERENCE_YEAR`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CalendarError::NotDatetimeIndex`] | series not indexed by timestamps |
/// | [`CalendarError::DuplicateTimestamp`] | two observations for one (year, row) cell |
#[tracing::instrument(skip_all, fields(n = series.len()))]
pub fn group_yearly(series: &Series) -> Result<YearlyTable, CalendarError> {
    let dates = series
        .datetime_index()
        .ok_or_else(|| CalendarError::NotDatetimeIndex {
            kind: series.index().kind(),
        })?;

    let (Some(first), Some(last)) = (
        dates.iter().map(|d| d.year()).min(),
        dates.iter().map(|d| d.year()).max(),
    ) else {
        return Ok(YearlyTable::default());
    };

    let index: Vec<NaiveDateTime> = dates
        .iter()
        .map(|&d| to_reference_year(d))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let row_of: BTreeMap<NaiveDateTime, usize> =
        index.iter().enumerate().map(|(i, &r)| (r, i)).collect();

    let years: Vec<i32> = (first..=last).collect();
    let mut columns = vec![vec![f64::NAN; index.len()]; years.len()];
    let mut filled = HashSet::with_capacity(dates.len());
    for (&timestamp, &value) in dates.iter().zip(series.values()) {
        let col = (timestamp.year() - first) as usize;
        let row = row_of[&to_reference_year(timestamp)];
        if !filled.insert((col, row)) {
            return Err(CalendarError::DuplicateTimestamp { timestamp });
        }
        columns[col][row] = value;
    }

    debug!(years = years.len(), rows = index.len(), "grouped series by year");
    Ok(YearlyTable {
        index,
        years,
        columns,
    })
}

/// Flattens a [`YearlyTable`] back into a series.
///
/// Walks the columns in table order and, within each, the rows in row
/// order. 29 February rows are skipped for non-leap years and `NaN` cells
/// are dropped.
///
/// The output is NOT re-sorted: its order is the column-major walk above.
/// For tables produced by [`group_yearly`] this is chronological, but for
/// tables with unsorted rows or years it is not, which downstream code
/// should not rely on.
pub fn get_data_series(table: &YearlyTable) -> Series {
    table
        .columns()
        .flat_map(|(year, values)| {
            table
                .index
                .iter()
                .zip(values)
                .filter(|(_, v)| !v.is_nan())
                .filter_map(move |(&row, &v)| with_year(row, year).map(|t| (t, v)))
        })
        .collect()
}
