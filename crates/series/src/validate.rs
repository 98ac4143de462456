//! Normalization of caller input into a series with a temporal index.

use tracing::{info, warn};

use crate::error::{InputTypeError, SeriesError};
use crate::index::{DatetimeIndex, Index};
use crate::series::{Series, SeriesInput};

/// Normalizes `input` into a single [`Series`].
///
/// A single-column frame is squeezed into a series (with a warning); a
/// series is returned as a copy.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`InputTypeError::MultipleColumns`] | frame with more than one column |
/// | [`InputTypeError::NoColumns`] | frame without columns |
/// | [`InputTypeError::Unlabeled`] | bare values |
pub fn validate_series(input: &SeriesInput) -> Result<Series, SeriesError> {
    match input {
        SeriesInput::Series(series) => Ok(series.clone()),
        SeriesInput::Frame(frame) => match frame.n_columns() {
            0 => Err(InputTypeError::NoColumns.into()),
            1 => {
                warn!(
                    "Please convert a single-column Frame to a Series using Frame::squeeze(). \
                     Now done automatically."
                );
                frame.squeeze().ok_or_else(|| InputTypeError::NoColumns.into())
            }
            _ => Err(InputTypeError::MultipleColumns {
                columns: frame.column_names().into_iter().map(String::from).collect(),
            }
            .into()),
        },
        SeriesInput::Unlabeled(values) => {
            Err(InputTypeError::Unlabeled { len: values.len() }.into())
        }
    }
}

/// Returns `index` as a [`DatetimeIndex`], coercing labels if needed.
///
/// Integer and float labels are read as nanoseconds since the Unix epoch;
/// text labels go through [`parse_datetime`](crate::parse_datetime).
///
/// # Errors
///
/// Returns [`SeriesError::DateParse`] for the first label that cannot be
/// coerced.
pub fn validate_index(index: &Index) -> Result<DatetimeIndex, SeriesError> {
    match index {
        Index::Datetime(dates) => Ok(dates.clone()),
        Index::Labels(labels) => {
            info!(
                "Expected the index to be a DatetimeIndex. Automatically converted {} \
                 using best-effort datetime parsing",
                index.kind()
            );
            labels
                .iter()
                .enumerate()
                .map(|(position, label)| {
                    label.to_datetime().ok_or_else(|| SeriesError::DateParse {
                        position,
                        label: label.to_string(),
                    })
                })
                .collect()
        }
    }
}
