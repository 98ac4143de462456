//! Error types for the spei-dist crate.

/// Error type for all fallible operations in the spei-dist crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistError {
    /// Returned when the sample has no observations.
    #[error("sample is empty")]
    EmptySample,

    /// Returned when the sample contains NaN or an infinite value.
    #[error("sample contains a non-finite value {value} at position {position}")]
    NonFiniteSample {
        /// Position of the first offending value.
        position: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the sample is too short to estimate the parameters.
    #[error("{dist} needs at least {needed} observations, got {got}")]
    TooFewObservations {
        /// Distribution being fitted.
        dist: &'static str,
        /// Minimum number of observations.
        needed: usize,
        /// Number of observations provided.
        got: usize,
    },

    /// Returned when the scale hint is not finite and positive.
    #[error("scale hint must be finite and > 0, got {hint}")]
    InvalidScaleHint {
        /// The rejected hint.
        hint: f64,
    },

    /// Returned when a parameter vector is unusable for a distribution.
    #[error("invalid parameters for {dist}: {reason}")]
    InvalidParams {
        /// Distribution the parameters were meant for.
        dist: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an estimator produces NaN or an infinite value.
    #[error("{dist} estimate of {param} is not finite")]
    NonFiniteEstimate {
        /// Distribution being fitted.
        dist: &'static str,
        /// Name of the parameter.
        param: &'static str,
    },

    /// Returned when a distribution name is not in the registry.
    #[error("unknown distribution '{name}'")]
    UnknownDistribution {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when an evaluation is asked to run over an empty list.
    #[error("no distributions to evaluate")]
    NoDistributions,

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
