//! Fit one distribution and test the fit.

use spei_stats::sd_pop;
use tracing::debug;

use crate::config::FitConfig;
use crate::dist::{ContinuousDist, Fitted};
use crate::error::DistError;
use crate::ks::{check_finite, ks_test};

/// Result of fitting and testing one distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRecord {
    /// Distribution name.
    pub name: &'static str,
    /// KS statistic `D`.
    pub statistic: f64,
    /// KS p-value in [0, 1].
    pub p_value: f64,
    /// `p_value < alpha`.
    pub reject_h0: bool,
    /// Fitted parameters, shape parameters first, then `loc` and `scale`.
    pub params: Vec<f64>,
}

/// Fits `dist` to `sample` and runs a two-sided KS test against the fit.
///
/// The sample's population standard deviation is passed to the estimator
/// as scale hint. H0 (the sample follows the fitted distribution) is
/// rejected when the p-value is strictly below `config.alpha()`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DistError::InvalidConfig`] | invalid `config` |
/// | [`DistError::EmptySample`] | empty sample |
/// | [`DistError::NonFiniteSample`] | NaN or infinite observation |
/// | [`DistError::InvalidScaleHint`] | constant sample |
/// | any estimator error | see the family's `fit` |
#[tracing::instrument(skip_all, fields(dist = dist.name(), n = sample.len()))]
pub fn dist_test(
    sample: &[f64],
    dist: &dyn ContinuousDist,
    config: &FitConfig,
) -> Result<FitRecord, DistError> {
    config.validate()?;
    check_finite(sample)?;

    let fitted = Fitted::fit(dist, sample, sd_pop(sample))?;
    let ks = ks_test(sample, &fitted)?;
    let reject_h0 = ks.p_value < config.alpha();

    debug!(
        params = ?fitted.params(),
        statistic = ks.statistic,
        p_value = ks.p_value,
        reject_h0,
        "tested fit"
    );

    Ok(FitRecord {
        name: dist.name(),
        statistic: ks.statistic,
        p_value: ks.p_value,
        reject_h0,
        params: fitted.params().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{Fisk, Gamma, Norm};

    #[test]
    fn record_for_normal() {
        let x = [1.2, 0.4, -0.3, 2.2, 0.9, 1.6, -1.1, 0.1, 0.7, 1.0];
        let r = dist_test(&x, &Norm, &FitConfig::new()).unwrap();
        assert_eq!(r.name, "norm");
        assert_eq!(r.params.len(), 2);
        assert!((0.0..=1.0).contains(&r.p_value));
        assert_eq!(r.reject_h0, r.p_value < 0.05);
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            dist_test(&[1.0, 2.0], &Gamma, &FitConfig::new()),
            Err(DistError::TooFewObservations {
                dist: "gamma",
                needed: 3,
                got: 2
            })
        );
        assert_eq!(
            dist_test(&[], &Norm, &FitConfig::new()),
            Err(DistError::EmptySample)
        );
        assert_eq!(
            dist_test(&[1.0, 1.0, 1.0], &Norm, &FitConfig::new()),
            Err(DistError::InvalidScaleHint { hint: 0.0 })
        );
    }

    #[test]
    fn mixed_sign_sample_fits_fisk() {
        let r = dist_test(&[-1.0, 2.0, 3.0, 0.5, 7.0], &Fisk, &FitConfig::new()).unwrap();
        assert!(r.params[1] < -1.0);
        assert_eq!(r.reject_h0, r.p_value < 0.05);
    }

    #[test]
    fn invalid_config_is_rejected_first() {
        let cfg = FitConfig::new().with_alpha(0.0);
        assert!(matches!(
            dist_test(&[], &Norm, &cfg),
            Err(DistError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn alpha_controls_rejection() {
        let x = [1.2, 0.4, -0.3, 2.2, 0.9, 1.6, -1.1, 0.1, 0.7, 1.0];
        let strict = dist_test(&x, &Norm, &FitConfig::new().with_alpha(0.999_999)).unwrap();
        assert!(strict.reject_h0);
    }
}
