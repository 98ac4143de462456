//! Fit-test several distributions and tabulate the results.

use std::fmt;

use tracing::info;

use crate::config::FitConfig;
use crate::dist::{ContinuousDist, Fitted};
use crate::error::DistError;
use crate::family::DEFAULT_DISTRIBUTIONS;
use crate::fit_test::{FitRecord, dist_test};

/// One row of a [`Comparison`].
#[derive(Debug, Clone)]
pub struct ComparisonRow<'a> {
    /// Fit and test outcome.
    pub record: FitRecord,
    /// The distribution object that was fitted.
    pub dist: &'a dyn ContinuousDist,
}

/// Fit-test results for several distributions, in evaluation order.
///
/// Columns are `KS p-value`, `Reject H0`, `Param 1..k` and `Dist`, where
/// `k` is the largest parameter count among the rows.
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    rows: Vec<ComparisonRow<'a>>,
}

impl<'a> Comparison<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in evaluation order.
    pub fn rows(&self) -> &[ComparisonRow<'a>] {
        &self.rows
    }

    /// Row keys (distribution names) in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.record.name).collect()
    }

    /// First row for distribution `name`.
    pub fn get(&self, name: &str) -> Option<&ComparisonRow<'a>> {
        self.rows.iter().find(|r| r.record.name == name)
    }

    /// `Param i` (1-based) of `name`. `None` past the row's parameter count.
    pub fn param(&self, name: &str, i: usize) -> Option<f64> {
        let row = self.get(name)?;
        i.checked_sub(1).and_then(|i| row.record.params.get(i).copied())
    }

    /// Largest parameter count among the rows.
    pub fn n_params(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.record.params.len())
            .max()
            .unwrap_or(0)
    }

    /// Column labels.
    pub fn column_names(&self) -> Vec<String> {
        let mut cols = vec!["KS p-value".to_string(), "Reject H0".to_string()];
        cols.extend((1..=self.n_params()).map(|i| format!("Param {i}")));
        cols.push("Dist".to_string());
        cols
    }

    /// Names of the distributions whose fit was not rejected.
    pub fn accepted(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .filter(|r| !r.record.reject_h0)
            .map(|r| r.record.name)
            .collect()
    }

    /// The fitted distribution of row `name`, for evaluating its CDF.
    pub fn fitted(&self, name: &str) -> Option<Fitted<'a>> {
        let row = self.get(name)?;
        Fitted::new(row.dist, row.record.params.clone()).ok()
    }
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n_params = self.n_params();
        let mut header = vec![String::new()];
        header.extend(self.column_names());

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                let mut cells = vec![
                    r.record.name.to_string(),
                    format!("{:.6}", r.record.p_value),
                    r.record.reject_h0.to_string(),
                ];
                cells.extend((0..n_params).map(|i| {
                    r.record
                        .params
                        .get(i)
                        .map_or_else(String::new, |p| format!("{p:.6}"))
                }));
                cells.push(format!("{:?}", r.dist));
                cells
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|c| {
                std::iter::once(&header)
                    .chain(&body)
                    .map(|row| row[c].len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in std::iter::once(&header).chain(&body) {
            let line = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(c, (cell, &w))| {
                    if c == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Runs [`dist_test`] for each candidate and collects a [`Comparison`].
///
/// `None` evaluates [`DEFAULT_DISTRIBUTIONS`]. The first failing candidate
/// aborts the whole evaluation.
///
/// # Errors
///
/// [`DistError::NoDistributions`] for an empty candidate list, otherwise
/// the first error returned by [`dist_test`].
pub fn dists_test<'a>(
    sample: &[f64],
    distributions: Option<&[&'a dyn ContinuousDist]>,
    config: &FitConfig,
) -> Result<Comparison<'a>, DistError> {
    let candidates = distributions.unwrap_or(DEFAULT_DISTRIBUTIONS);
    if candidates.is_empty() {
        return Err(DistError::NoDistributions);
    }

    let rows = candidates
        .iter()
        .map(|&dist| {
            dist_test(sample, dist, config).map(|record| ComparisonRow { record, dist })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let comparison = Comparison { rows };
    info!(
        evaluated = comparison.len(),
        accepted = comparison.accepted().len(),
        "distribution comparison done"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{Fisk, Gamma, Logistic, Norm};

    const SAMPLE: [f64; 12] = [2.1, 3.4, 1.7, 5.9, 2.8, 4.2, 3.1, 2.5, 7.3, 3.9, 2.2, 4.8];

    #[test]
    fn custom_list_keeps_order() {
        let dists: [&dyn ContinuousDist; 2] = [&Logistic, &Norm];
        let cmp = dists_test(&SAMPLE, Some(&dists[..]), &FitConfig::new()).unwrap();
        assert_eq!(cmp.names(), vec!["logistic", "norm"]);
        assert_eq!(cmp.len(), 2);
        assert_eq!(cmp.column_names(), ["KS p-value", "Reject H0", "Param 1", "Param 2", "Dist"]);
    }

    #[test]
    fn empty_list_is_an_error() {
        let dists: [&dyn ContinuousDist; 0] = [];
        assert_eq!(
            dists_test(&SAMPLE, Some(&dists[..]), &FitConfig::new()).unwrap_err(),
            DistError::NoDistributions
        );
    }

    #[test]
    fn first_failure_aborts() {
        // norm fits two points, gamma needs three
        let dists: [&dyn ContinuousDist; 3] = [&Norm, &Gamma, &Logistic];
        assert_eq!(
            dists_test(&SAMPLE[..2], Some(&dists[..]), &FitConfig::new()).unwrap_err(),
            DistError::TooFewObservations {
                dist: "gamma",
                needed: 3,
                got: 2
            }
        );
    }

    #[test]
    fn default_rows_hold_the_registry_objects() {
        let cmp = dists_test(&SAMPLE, None, &FitConfig::new()).unwrap();
        assert_eq!(cmp.len(), DEFAULT_DISTRIBUTIONS.len());
        for (row, &dist) in cmp.rows().iter().zip(DEFAULT_DISTRIBUTIONS) {
            assert!(std::ptr::addr_eq(row.dist, dist));
        }
    }

    #[test]
    fn params_are_one_based_and_padded() {
        let dists: [&dyn ContinuousDist; 2] = [&Norm, &Gamma];
        let cmp = dists_test(&SAMPLE, Some(&dists[..]), &FitConfig::new()).unwrap();
        assert_eq!(cmp.n_params(), 3);
        assert!(cmp.param("norm", 2).is_some());
        assert!(cmp.param("norm", 3).is_none());
        assert!(cmp.param("norm", 0).is_none());
        assert_eq!(cmp.param("gamma", 2), Some(0.0));
        assert!(cmp.param("fisk", 1).is_none());
    }

    #[test]
    fn fitted_reproduces_params() {
        let dists: [&dyn ContinuousDist; 1] = [&Norm];
        let cmp = dists_test(&SAMPLE, Some(&dists[..]), &FitConfig::new()).unwrap();
        let fitted = cmp.fitted("norm").unwrap();
        assert_eq!(fitted.params(), cmp.get("norm").unwrap().record.params.as_slice());
        assert!((fitted.cdf(fitted.params()[0]) - 0.5).abs() < 1e-12);
        assert!(cmp.fitted("gamma").is_none());
    }

    #[test]
    fn display_has_header_and_rows() {
        let dists: [&dyn ContinuousDist; 2] = [&Norm, &Fisk];
        let cmp = dists_test(&SAMPLE, Some(&dists[..]), &FitConfig::new()).unwrap();
        let text = cmp.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("KS p-value"));
        assert!(lines[0].contains("Param 3"));
        assert!(lines[1].starts_with("norm"));
        assert!(lines[1].ends_with("Norm"));
        assert!(lines[2].starts_with("fisk"));
    }
}
