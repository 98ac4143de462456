//! Error types for the spei-series crate.

/// Rejection reasons for input that cannot be normalized into a single
/// [`Series`](crate::Series).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputTypeError {
    /// Returned when a frame has more than one column.
    #[error(
        "please provide a Series instead of a Frame with {} columns ({}): ambiguous which column to use",
        columns.len(),
        columns.join(", ")
    )]
    MultipleColumns {
        /// Names of the frame's columns.
        columns: Vec<String>,
    },

    /// Returned when a frame has no columns at all.
    #[error("please provide a Series instead of a Frame without columns")]
    NoColumns,

    /// Returned when the input carries values but no index.
    #[error("please provide a Series instead of {len} unlabeled values")]
    Unlabeled {
        /// Number of values that were provided.
        len: usize,
    },
}

/// Error type for all fallible operations in the spei-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Input is neither a series nor a single-column frame.
    #[error(transparent)]
    InputType(#[from] InputTypeError),

    /// Returned when an index label cannot be interpreted as a timestamp.
    #[error("cannot parse index label '{label}' at position {position} as a datetime")]
    DateParse {
        /// Position of the offending label in the index.
        position: usize,
        /// The label, rendered as text.
        label: String,
    },

    /// Returned when a series' values do not line up with its index.
    #[error("length mismatch: index has {index_len} entries, values have {values_len}")]
    LengthMismatch {
        /// Number of index entries.
        index_len: usize,
        /// Number of values.
        values_len: usize,
    },

    /// Returned when a frame column does not line up with the frame index.
    #[error("column '{column}' has {values_len} values but the index has {index_len} entries")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Number of index entries.
        index_len: usize,
        /// Number of values in the column.
        values_len: usize,
    },
}

impl SeriesError {
    /// Returns `true` for the input-type rejections of
    /// [`validate_series`](crate::validate_series).
    pub fn is_input_type(&self) -> bool {
        matches!(self, SeriesError::InputType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_multiple_columns() {
        let e = InputTypeError::MultipleColumns {
            columns: vec!["s1".to_string(), "s2".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "please provide a Series instead of a Frame with 2 columns (s1, s2): ambiguous which column to use"
        );
    }

    #[test]
    fn error_unlabeled() {
        let e = SeriesError::from(InputTypeError::Unlabeled { len: 3 });
        assert_eq!(
            e.to_string(),
            "please provide a Series instead of 3 unlabeled values"
        );
        assert!(e.is_input_type());
    }

    #[test]
    fn error_date_parse() {
        let e = SeriesError::DateParse {
            position: 2,
            label: "yesterday".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "cannot parse index label 'yesterday' at position 2 as a datetime"
        );
        assert!(!e.is_input_type());
    }

    #[test]
    fn error_length_mismatch() {
        let e = SeriesError::LengthMismatch {
            index_len: 3,
            values_len: 2,
        };
        assert_eq!(
            e.to_string(),
            "length mismatch: index has 3 entries, values have 2"
        );
    }

    #[test]
    fn error_column_length_mismatch() {
        let e = SeriesError::ColumnLengthMismatch {
            column: "pr".to_string(),
            index_len: 4,
            values_len: 5,
        };
        assert_eq!(
            e.to_string(),
            "column 'pr' has 5 values but the index has 4 entries"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SeriesError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
