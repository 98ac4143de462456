//! Labeled one- and two-dimensional containers.

use chrono::NaiveDateTime;

use crate::error::SeriesError;
use crate::index::{DatetimeIndex, Index};
use crate::validate::validate_index;

/// One labeled sequence of values. Missing values are `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: Option<String>,
    index: Index,
    values: Vec<f64>,
}

impl Series {
    /// Creates an unnamed series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if `values` and `index`
    /// differ in length.
    pub fn new(index: impl Into<Index>, values: Vec<f64>) -> Result<Self, SeriesError> {
        let index = index.into();
        if index.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                index_len: index.len(),
                values_len: values.len(),
            });
        }
        Ok(Self {
            name: None,
            index,
            values,
        })
    }

    /// Creates an unnamed series over a temporal index.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the lengths differ.
    pub fn from_datetimes(
        dates: Vec<NaiveDateTime>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        Self::new(DatetimeIndex::new(dates), values)
    }

    /// Sets the series name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the series name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the row index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Returns the temporal index, if the series has one.
    pub fn datetime_index(&self) -> Option<&DatetimeIndex> {
        self.index.as_datetime()
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy whose index has been coerced with [`validate_index`].
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DateParse`] if a label cannot be coerced.
    pub fn with_datetime_index(&self) -> Result<Self, SeriesError> {
        let index = validate_index(&self.index)?;
        Ok(Self {
            name: self.name.clone(),
            index: Index::Datetime(index),
            values: self.values.clone(),
        })
    }
}

impl FromIterator<(NaiveDateTime, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (NaiveDateTime, f64)>>(iter: I) -> Self {
        let (dates, values): (Vec<_>, Vec<_>) = iter.into_iter().unzip();
        Self {
            name: None,
            index: Index::Datetime(DatetimeIndex::new(dates)),
            values,
        }
    }
}

/// A named column of a [`Frame`].
#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// Named columns sharing one row index.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: Index,
    columns: Vec<Column>,
}

impl Frame {
    /// Creates a frame with no columns.
    pub fn new(index: impl Into<Index>) -> Self {
        Self {
            index: index.into(),
            columns: Vec::new(),
        }
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ColumnLengthMismatch`] if the column does not
    /// match the index length.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        if values.len() != self.index.len() {
            return Err(SeriesError::ColumnLengthMismatch {
                column: name,
                index_len: self.index.len(),
                values_len: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Returns the row index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Returns the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the values of the first column called `name`.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Converts a single-column frame to a series named after the column.
    ///
    /// Returns `None` unless the frame has exactly one column.
    pub fn squeeze(&self) -> Option<Series> {
        match self.columns.as_slice() {
            [only] => Some(Series {
                name: Some(only.name.clone()),
                index: self.index.clone(),
                values: only.values.clone(),
            }),
            _ => None,
        }
    }
}

/// Input accepted by [`validate_series`](crate::validate_series).
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesInput {
    /// A labeled series; passed through.
    Series(Series),
    /// A table; accepted only with exactly one column.
    Frame(Frame),
    /// Bare values without an index; always rejected.
    Unlabeled(Vec<f64>),
}

impl From<Series> for SeriesInput {
    fn from(s: Series) -> Self {
        SeriesInput::Series(s)
    }
}

impl From<Frame> for SeriesInput {
    fn from(f: Frame) -> Self {
        SeriesInput::Frame(f)
    }
}

impl From<Vec<f64>> for SeriesInput {
    fn from(v: Vec<f64>) -> Self {
        SeriesInput::Unlabeled(v)
    }
}
