//! The continuous-distribution capability and fitted instances.

use std::fmt;

use crate::error::DistError;

/// A continuous distribution family that can be fitted to a sample.
///
/// Parameters follow scipy's ordering: shape parameters first, then `loc`,
/// then `scale`. The last parameter is always the scale.
pub trait ContinuousDist: Send + Sync + fmt::Debug {
    /// scipy identifier of the family, e.g. `"norm"`.
    fn name(&self) -> &'static str;

    /// Parameter names in order.
    fn param_names(&self) -> &'static [&'static str];

    /// Estimates parameters from `sample`.
    ///
    /// `scale_hint` is the sample's population standard deviation; families
    /// whose scale is a moment estimate use it directly.
    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError>;

    /// Checks that `params` can be passed to [`cdf`](Self::cdf).
    ///
    /// The default checks the arity, finiteness and a positive scale.
    fn validate_params(&self, params: &[f64]) -> Result<(), DistError> {
        check_params(self, params)
    }

    /// Cumulative distribution function at `x`. Assumes validated parameters.
    fn cdf(&self, x: f64, params: &[f64]) -> f64;
}

/// Arity, finiteness and positive-scale checks shared by every family.
pub fn check_params<D: ContinuousDist + ?Sized>(dist: &D, params: &[f64]) -> Result<(), DistError> {
    let expected = dist.param_names().len();
    if params.len() != expected {
        return Err(DistError::InvalidParams {
            dist: dist.name(),
            reason: format!("expected {expected} parameters, got {}", params.len()),
        });
    }
    if let Some((name, value)) = dist
        .param_names()
        .iter()
        .zip(params)
        .find(|(_, v)| !v.is_finite())
    {
        return Err(DistError::InvalidParams {
            dist: dist.name(),
            reason: format!("{name} must be finite, got {value}"),
        });
    }
    match params.last() {
        Some(&scale) if scale <= 0.0 => Err(DistError::InvalidParams {
            dist: dist.name(),
            reason: format!("scale must be > 0, got {scale}"),
        }),
        _ => Ok(()),
    }
}

/// A distribution paired with validated parameters.
#[derive(Debug, Clone)]
pub struct Fitted<'a> {
    dist: &'a dyn ContinuousDist,
    params: Vec<f64>,
}

impl<'a> Fitted<'a> {
    /// Pairs `dist` with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`DistError::InvalidParams`] if the parameters fail
    /// [`ContinuousDist::validate_params`].
    pub fn new(dist: &'a dyn ContinuousDist, params: Vec<f64>) -> Result<Self, DistError> {
        dist.validate_params(&params)?;
        Ok(Self { dist, params })
    }

    /// Fits `dist` to `sample` with the given scale hint.
    pub fn fit(
        dist: &'a dyn ContinuousDist,
        sample: &[f64],
        scale_hint: f64,
    ) -> Result<Self, DistError> {
        let params = dist.fit(sample, scale_hint)?;
        Self::new(dist, params)
    }

    pub fn dist(&self) -> &'a dyn ContinuousDist {
        self.dist
    }

    pub fn name(&self) -> &'static str {
        self.dist.name()
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.dist.cdf(x, &self.params)
    }
}

impl fmt::Display for Fitted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, (name, value)) in self.dist.param_names().iter().zip(&self.params).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}
