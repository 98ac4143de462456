//! Error types for the spei-calendar crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the spei-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a series is not indexed by timestamps.
    #[error("expected a DatetimeIndex, got {kind}")]
    NotDatetimeIndex {
        /// Description of the index that was provided.
        kind: &'static str,
    },

    /// Returned when two observations map to the same (year, row) cell.
    #[error("duplicate timestamp: {timestamp}")]
    DuplicateTimestamp {
        /// The repeated timestamp.
        timestamp: NaiveDateTime,
    },

    /// Returned when a table row is not in the reference year.
    #[error("row {row} is outside the reference year {reference_year}")]
    RowOutsideReferenceYear {
        /// The offending row timestamp.
        row: NaiveDateTime,
        /// The expected year.
        reference_year: i32,
    },

    /// Returned when a column does not have one value per row.
    #[error("column {year} has {len} values but the table has {n_rows} rows")]
    ColumnLengthMismatch {
        /// Year of the offending column.
        year: i32,
        /// Number of values in the column.
        len: usize,
        /// Number of rows in the table.
        n_rows: usize,
    },

    /// Returned when the same year is given for two columns.
    #[error("duplicate column for year {year}")]
    DuplicateYear {
        /// The repeated year.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn error_not_datetime_index() {
        let err = CalendarError::NotDatetimeIndex {
            kind: "Index[object]",
        };
        assert_eq!(err.to_string(), "expected a DatetimeIndex, got Index[object]");
    }

    #[test]
    fn error_duplicate_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2001, 3, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = CalendarError::DuplicateTimestamp { timestamp };
        assert_eq!(err.to_string(), "duplicate timestamp: 2001-03-04 00:00:00");
    }

    #[test]
    fn error_row_outside_reference_year() {
        let row = NaiveDate::from_ymd_opt(1999, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let err = CalendarError::RowOutsideReferenceYear {
            row,
            reference_year: 2000,
        };
        assert_eq!(
            err.to_string(),
            "row 1999-01-01 12:00:00 is outside the reference year 2000"
        );
    }

    #[test]
    fn error_column_length_mismatch() {
        let err = CalendarError::ColumnLengthMismatch {
            year: 2001,
            len: 3,
            n_rows: 4,
        };
        assert_eq!(
            err.to_string(),
            "column 2001 has 3 values but the table has 4 rows"
        );
    }

    #[test]
    fn error_duplicate_year() {
        let err = CalendarError::DuplicateYear { year: 1990 };
        assert_eq!(err.to_string(), "duplicate column for year 1990");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
