//! Configuration for goodness-of-fit testing.

use crate::error::DistError;

/// Configuration for [`dist_test`](crate::dist_test) and
/// [`dists_test`](crate::dists_test).
///
/// # Example
///
/// ```
/// use spei_dist::FitConfig;
///
/// let config = FitConfig::new().with_sample_size(50).with_alpha(0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    sample_size: usize,
    alpha: f64,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `sample_size = 100`, `alpha = 0.05`.
    pub fn new() -> Self {
        Self {
            sample_size: 100,
            alpha: 0.05,
        }
    }

    // --- Builder methods ---

    /// Sets the `N` argument of the scipy-style call.
    ///
    /// Kept for call compatibility: KS p-values are exact up to
    /// [`EXACT_MAX_N`](crate::EXACT_MAX_N) observations whatever its value.
    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    /// Sets the significance level.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    // --- Accessors ---

    /// Returns `N`.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns the significance level.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Validates this configuration.
    ///
    /// Checks that `sample_size` is at least 1 and `alpha` is finite and in
    /// the open interval (0, 1).
    pub fn validate(&self) -> Result<(), DistError> {
        if self.sample_size < 1 {
            return Err(DistError::InvalidConfig {
                reason: format!("sample_size must be >= 1, got {}", self.sample_size),
            });
        }

        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(DistError::InvalidConfig {
                reason: format!("alpha must be in (0, 1), got {}", self.alpha),
            });
        }

        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
