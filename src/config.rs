use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use spei_dist::{Comparison, ContinuousDist, DEFAULT_DISTRIBUTIONS, FitConfig, by_name, dists_test};
use tracing::debug;

/// Top-level spei configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeiConfig {
    /// Distribution fit-testing settings.
    #[serde(default)]
    pub fit: FitToml,
}

/// The `[fit]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Candidate names; all eight built-in families when absent.
    #[serde(default)]
    pub distributions: Option<Vec<String>>,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            alpha: default_alpha(),
            distributions: None,
        }
    }
}

fn default_sample_size() -> usize {
    100
}
fn default_alpha() -> f64 {
    0.05
}

impl SpeiConfig {
    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses TOML text and validates the fit settings.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid TOML")?;
        config.fit_config().validate()?;
        config.distributions()?;
        Ok(config)
    }

    /// The `[fit]` settings as a [`FitConfig`].
    pub fn fit_config(&self) -> FitConfig {
        FitConfig::new()
            .with_sample_size(self.fit.sample_size)
            .with_alpha(self.fit.alpha)
    }

    /// Resolves the configured candidate names against the built-in families.
    pub fn distributions(&self) -> Result<Vec<&'static dyn ContinuousDist>> {
        let Some(names) = &self.fit.distributions else {
            return Ok(DEFAULT_DISTRIBUTIONS.to_vec());
        };
        if names.is_empty() {
            bail!("fit.distributions must not be empty");
        }
        names
            .iter()
            .map(|name| by_name(name).with_context(|| format!("unknown distribution: {name}")))
            .collect()
    }

    /// Fit-tests `sample` against the configured candidates.
    pub fn evaluate(&self, sample: &[f64]) -> Result<Comparison<'static>> {
        let dists = self.distributions()?;
        dists_test(sample, Some(dists.as_slice()), &self.fit_config())
            .context("distribution evaluation failed")
    }
}
