//! Distribution fitting and Kolmogorov-Smirnov goodness-of-fit testing.
//!
//! Fits continuous distributions to a sample and checks each fit with a
//! two-sided one-sample KS test.
//!
//! # Pipeline
//!
//! 1. **Fit** the candidate with its estimator, using the sample's
//!    population standard deviation as scale hint
//! 2. **Test** the sample against the fitted CDF (exact KS p-value up to
//!    [`EXACT_MAX_N`] observations, asymptotic above)
//! 3. **Reject** H0 when `p < alpha`
//!
//! [`dists_test`] repeats this over a candidate list (by default the eight
//! families in [`DEFAULT_DISTRIBUTIONS`]) and returns a [`Comparison`].
//!
//! # Families
//!
//! | name | parameters | estimator |
//! |------|------------|-----------|
//! | `norm` | loc, scale | maximum likelihood |
//! | `gamma` | a, loc, scale | maximum likelihood (`loc = 0`) or three moments with free `loc` |
//! | `genextreme` | c, loc, scale | L-moments |
//! | `pearson3` | skew, loc, scale | moments |
//! | `fisk` | c, loc, scale | L-moments with free `loc` |
//! | `lognorm` | s, loc, scale | maximum likelihood (`loc = 0`) or three moments with free `loc` |
//! | `logistic` | loc, scale | moments |
//! | `genlogistic` | c, loc, scale | moments |
//!
//! # Quick Start
//!
//! ```
//! use spei_dist::{FitConfig, Norm, dist_test, dists_test};
//!
//! let sample = [2.1, 3.4, 1.7, 5.9, 2.8, 4.2, 3.1, 2.5, 7.3, 3.9, 2.2, 4.8];
//! let config = FitConfig::new();
//!
//! let record = dist_test(&sample, &Norm, &config).unwrap();
//! assert_eq!(record.name, "norm");
//!
//! let comparison = dists_test(&sample, None, &config).unwrap();
//! assert_eq!(comparison.len(), 8);
//! println!("{comparison}");
//! ```

mod config;
mod dist;
mod error;
mod evaluate;
mod family;
mod fit_test;
mod ks;

pub use config::FitConfig;
pub use dist::{ContinuousDist, Fitted, check_params};
pub use error::DistError;
pub use evaluate::{Comparison, ComparisonRow, dists_test};
pub use family::{
    DEFAULT_DISTRIBUTIONS, Fisk, Gamma, GenExtreme, GenLogistic, LogNorm, Logistic, Norm,
    Pearson3, by_name,
};
pub use fit_test::{FitRecord, dist_test};
pub use ks::{EXACT_MAX_N, KsResult, ks_test, kstest};
