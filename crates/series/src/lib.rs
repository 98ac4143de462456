//! Labeled series for the spei toolkit.
//!
//! Provides a minimal series/frame data model plus the two input checks
//! every downstream computation starts with, and sampling-cadence
//! inference for temporal indexes.
//!
//! # Conventions
//!
//! - Missing values are `NaN`.
//! - Timestamps are naive (`chrono::NaiveDateTime`); time-zone aware text
//!   is converted to UTC on parsing.
//!
//! # Quick Start
//!
//! ```
//! use spei_series::{Frame, SeriesInput, infer_frequency, validate_index, validate_series};
//!
//! let frame = Frame::new(vec!["2020-01-31", "2020-02-29", "2020-03-31"])
//!     .with_column("pr", vec![10.0, 12.5, 8.0])
//!     .unwrap();
//!
//! let series = validate_series(&SeriesInput::from(frame)).unwrap();
//! let index = validate_index(series.index()).unwrap();
//! assert_eq!(infer_frequency(&index).label(), "M");
//! ```

mod error;
mod frequency;
mod index;
mod series;
mod validate;

pub use error::{InputTypeError, SeriesError};
pub use frequency::{Anchor, FixedUnit, Frequency, infer_frequency};
pub use index::{DatetimeIndex, Index, Label, parse_datetime};
pub use series::{Frame, Series, SeriesInput};
pub use validate::{validate_index, validate_series};
