//! Log-normal distribution.

use spei_stats::{mean, sd_pop, skewness};

use super::gamma::MIN_SKEW;
use super::{check_sample, finite_estimates, std_normal_cdf};
use crate::dist::{ContinuousDist, check_params};
use crate::error::DistError;

/// Log-normal distribution, parameters `[s, loc, scale]`.
///
/// For strictly positive samples `loc = 0` and `s`, `scale` are the
/// maximum-likelihood estimates on `ln x`. Otherwise the three-parameter
/// form is matched to mean, variance and skewness with a free `loc`;
/// skewness under 0.02 is raised to 0.02.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNorm;

impl ContinuousDist for LogNorm {
    fn name(&self) -> &'static str {
        "lognorm"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["s", "loc", "scale"]
    }

    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError> {
        check_sample(self.name(), sample, scale_hint, 3)?;

        let params = if sample.iter().all(|&x| x > 0.0) {
            let logs: Vec<f64> = sample.iter().map(|x| x.ln()).collect();
            vec![sd_pop(&logs), 0.0, mean(&logs).exp()]
        } else {
            let skew = skewness(sample).unwrap_or(0.0).max(MIN_SKEW);
            // skew = (w + 2) sqrt(w - 1) with w = exp(s^2)
            let g2 = skew * skew;
            let t = (1.0 + g2 / 2.0 + skew * (1.0 + g2 / 4.0).sqrt()).cbrt();
            let w = t + 1.0 / t - 1.0;
            let scale = scale_hint / (w * (w - 1.0)).sqrt();
            vec![w.ln().sqrt(), mean(sample) - scale * w.sqrt(), scale]
        };
        finite_estimates(self.name(), self.param_names(), params)
    }

    fn validate_params(&self, params: &[f64]) -> Result<(), DistError> {
        check_params(self, params)?;
        if params[0] <= 0.0 {
            return Err(DistError::InvalidParams {
                dist: self.name(),
                reason: format!("s must be > 0, got {}", params[0]),
            });
        }
        Ok(())
    }

    fn cdf(&self, x: f64, params: &[f64]) -> f64 {
        let z = (x - params[1]) / params[2];
        if z <= 0.0 {
            return 0.0;
        }
        std_normal_cdf(z.ln() / params[0])
    }
}
