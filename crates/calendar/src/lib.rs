//! # spei-calendar
//!
//! Regrouping of multi-year series into calendar-aligned yearly columns.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Series (DatetimeIndex)"] -->|"group_yearly()"| B["YearlyTable"]
//!     B -->|"get_data_series()"| A
//!     C["timestamp"] -->|"to_reference_year()"| D["row in year 2000"]
//!     D -->|"with_year()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use spei_calendar::{get_data_series, group_yearly};
//! use spei_series::Series;
//!
//! let dates = (0..730)
//!     .map(|i| {
//!         NaiveDate::from_ymd_opt(2001, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
//!             + chrono::Duration::days(i)
//!     })
//!     .collect();
//! let values = (0..730).map(f64::from).collect();
//! let series = Series::from_datetimes(dates, values).unwrap();
//!
//! let table = group_yearly(&series).unwrap();
//! assert_eq!(table.years(), &[2001, 2002]);
//! assert_eq!(get_data_series(&table).values(), series.values());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `reference` | Reference-year arithmetic |
//! | `yearly` | Yearly table, regrouper and flattener |
//! | `error` | Error types |

mod error;
mod reference;
mod yearly;

pub use error::CalendarError;
pub use reference::{REFERENCE_YEAR, is_leap_year, to_reference_year, with_year};
pub use yearly::{YearlyTable, get_data_series, group_yearly};
