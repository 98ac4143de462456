//! # spei
//!
//! Data-validation and distribution-fitting helpers for SPEI-style drought
//! analysis.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Frame / Series / values"] -->|"validate_series()"| B["Series"]
//!     B -->|"validate_index()"| C["DatetimeIndex"]
//!     C -->|"infer_frequency()"| D["Frequency"]
//!     B -->|"group_yearly()"| E["YearlyTable"]
//!     E -->|"get_data_series()"| B
//!     B -->|"values"| F["dists_test()"]
//!     F --> G["Comparison"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use spei::{
//!     Frame, SeriesInput, SpeiConfig, get_data_series, group_yearly, infer_frequency,
//!     validate_index, validate_series,
//! };
//!
//! let dates: Vec<String> = (2001..=2002)
//!     .flat_map(|y| (1..=12).map(move |m| format!("{y}-{m:02}-01")))
//!     .collect();
//! let values: Vec<f64> = (0..24)
//!     .map(|i| 20.0 + 15.0 * (i as f64 * 0.5).sin().abs() + (i % 5) as f64)
//!     .collect();
//! let frame = Frame::new(dates.iter().map(String::as_str).collect::<Vec<_>>())
//!     .with_column("pr", values)
//!     .unwrap();
//!
//! let series = validate_series(&SeriesInput::from(frame)).unwrap();
//! let index = validate_index(series.index()).unwrap();
//! let series = series.with_datetime_index().unwrap();
//! assert_eq!(infer_frequency(&index).label(), "MS");
//!
//! let table = group_yearly(&series).unwrap();
//! assert_eq!(table.years(), &[2001, 2002]);
//! assert_eq!(table.n_rows(), 12);
//!
//! let flat = get_data_series(&table);
//! let comparison = SpeiConfig::default().evaluate(flat.values()).unwrap();
//! assert_eq!(comparison.len(), 8);
//! ```
//!
//! ## Crates
//!
//! | Crate | Description |
//! |-------|-------------|
//! | [`spei_series`] | Series data model, input validation, frequency inference |
//! | [`spei_calendar`] | Yearly regrouping and flattening |
//! | [`spei_dist`] | Distribution families, KS test, fit-testing |
//! | [`spei_stats`] | Sample moments and polygamma helpers |

pub mod config;
pub mod logging;

pub use config::{FitToml, SpeiConfig};

pub use spei_calendar::{
    CalendarError, REFERENCE_YEAR, YearlyTable, get_data_series, group_yearly, to_reference_year,
};
pub use spei_dist::{
    Comparison, ContinuousDist, DEFAULT_DISTRIBUTIONS, DistError, FitConfig, FitRecord, Fitted,
    KsResult, by_name, dist_test, dists_test, ks_test, kstest,
};
pub use spei_series::{
    DatetimeIndex, Frame, Frequency, Index, InputTypeError, Series, SeriesError, SeriesInput,
    infer_frequency, validate_index, validate_series,
};

pub use spei_calendar;
pub use spei_dist;
pub use spei_series;
pub use spei_stats;
