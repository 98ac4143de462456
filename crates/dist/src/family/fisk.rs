//! Log-logistic (Fisk) distribution.

use std::f64::consts::PI;

use spei_stats::l_moments;

use super::{check_sample, finite_estimates};
use crate::dist::{ContinuousDist, check_params};
use crate::error::DistError;

/// Bracket for the shape. `c > 1` keeps the mean finite; the upper end is
/// practically the logistic distribution.
const C_MIN: f64 = 1.001;
const C_MAX: f64 = 1e3;

/// Three-parameter log-logistic distribution, parameters `[c, loc, scale]`.
///
/// Fitted from sample L-moments (the PWM estimator of Vicente-Serrano et
/// al. 2010). `c = l2 / l3`, so the sample needs positive L-skewness; a
/// symmetric or left-skewed sample gets `c = 1000`. `loc` is free and can
/// be negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fisk;

impl ContinuousDist for Fisk {
    fn name(&self) -> &'static str {
        "fisk"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["c", "loc", "scale"]
    }

    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError> {
        check_sample(self.name(), sample, scale_hint, 3)?;
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        let [l1, l2, l3] = l_moments(&sorted).ok_or(DistError::TooFewObservations {
            dist: self.name(),
            needed: 3,
            got: sample.len(),
        })?;

        let c = if l3 * C_MAX > l2 {
            (l2 / l3).max(C_MIN)
        } else {
            C_MAX
        };
        // mean = loc + scale * (pi / c) / sin(pi / c) = l1
        let scale = l2 * c * c * (PI / c).sin() / PI;
        finite_estimates(self.name(), self.param_names(), vec![c, l1 - c * l2, scale])
    }

    fn validate_params(&self, params: &[f64]) -> Result<(), DistError> {
        check_params(self, params)?;
        if params[0] <= 0.0 {
            return Err(DistError::InvalidParams {
                dist: self.name(),
                reason: format!("c must be > 0, got {}", params[0]),
            });
        }
        Ok(())
    }

    fn cdf(&self, x: f64, params: &[f64]) -> f64 {
        let z = (x - params[1]) / params[2];
        if z <= 0.0 {
            return 0.0;
        }
        1.0 / (1.0 + z.powf(-params[0]))
    }
}
