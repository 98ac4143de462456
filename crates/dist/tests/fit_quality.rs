//! Fit-then-test behaviour on samples with a known parent distribution.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal as NormalSampler};
use spei_dist::{
    DEFAULT_DISTRIBUTIONS, EXACT_MAX_N, Fisk, FitConfig, Gamma, Norm, dist_test, dists_test,
};
use statrs::distribution::{ContinuousCDF, Gamma as GammaDist, Normal};

/// Plotting-position quantiles `F^-1((i - 0.5) / n)`.
fn quantiles(n: usize, inverse_cdf: impl Fn(f64) -> f64) -> Vec<f64> {
    (1..=n)
        .map(|i| inverse_cdf((i as f64 - 0.5) / n as f64))
        .collect()
}

fn normal_sample(mean: f64, sd: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = NormalSampler::new(mean, sd).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

#[test]
fn normal_quantiles_fit_normal() {
    let parent = Normal::new(10.0, 2.0).unwrap();
    let x = quantiles(100, |p| parent.inverse_cdf(p));

    let r = dist_test(&x, &Norm, &FitConfig::new()).unwrap();
    assert!(!r.reject_h0);
    assert!(r.p_value > 0.99);
    assert!(r.statistic < 0.01);
    assert_relative_eq!(r.params[0], 10.0, epsilon = 1e-9);
    assert_relative_eq!(r.params[1], 2.0, epsilon = 0.05);
}

#[test]
fn exponential_quantiles_reject_normal() {
    let x = quantiles(500, |p| -(1.0 - p).ln());
    let r = dist_test(&x, &Norm, &FitConfig::new()).unwrap();
    assert!(r.reject_h0);
    assert!(r.p_value < 1e-6);
}

#[test]
fn gamma_quantiles_across_defaults() {
    // shape 2, scale 3
    let parent = GammaDist::new(2.0, 1.0 / 3.0).unwrap();
    let x = quantiles(200, |p| parent.inverse_cdf(p));

    let cmp = dists_test(&x, None, &FitConfig::new()).unwrap();
    let expected: Vec<&str> = DEFAULT_DISTRIBUTIONS.iter().map(|d| d.name()).collect();
    assert_eq!(cmp.names(), expected);
    for (row, &dist) in cmp.rows().iter().zip(DEFAULT_DISTRIBUTIONS) {
        assert!(std::ptr::addr_eq(row.dist, dist), "{} is a copy", row.record.name);
    }

    let gamma = cmp.get("gamma").unwrap();
    assert!(!gamma.record.reject_h0);
    assert!(gamma.record.p_value > 0.9);
    assert_relative_eq!(gamma.record.params[0], 2.0, epsilon = 0.05);
    assert_eq!(gamma.record.params[1], 0.0);
    assert_relative_eq!(gamma.record.params[2], 3.0, epsilon = 0.1);

    for name in ["genextreme", "pearson3", "fisk", "lognorm"] {
        assert!(cmp.accepted().contains(&name), "{name} rejected");
    }
    for row in cmp.rows() {
        assert!((0.0..=1.0).contains(&row.record.p_value));
        assert_eq!(row.record.reject_h0, row.record.p_value < 0.05);
    }
}

#[test]
fn gamma_fit_directly() {
    let parent = GammaDist::new(2.0, 1.0 / 3.0).unwrap();
    let x = quantiles(200, |p| parent.inverse_cdf(p));
    let r = dist_test(&x, &Gamma, &FitConfig::new()).unwrap();
    assert_eq!(r.name, "gamma");
    assert_eq!(r.params.len(), 3);
}

#[test]
fn random_normal_sample_recovers_moments() {
    let x = normal_sample(5.0, 2.0, 1000, 42);
    let r = dist_test(&x, &Norm, &FitConfig::new()).unwrap();
    assert!((r.params[0] - 5.0).abs() < 0.3);
    assert!((r.params[1] - 2.0).abs() < 0.2);
    assert!((0.0..=1.0).contains(&r.p_value));
}

#[test]
fn random_normal_sample_fits_all_defaults() {
    let x = normal_sample(0.0, 1.0, 150, 7);
    assert!(x.iter().any(|&v| v < 0.0) && x.iter().any(|&v| v > 0.0));

    let a = dists_test(&x, None, &FitConfig::new()).unwrap();
    let b = dists_test(&normal_sample(0.0, 1.0, 150, 7), None, &FitConfig::new()).unwrap();
    assert_eq!(a.len(), 8);
    for (ra, rb) in a.rows().iter().zip(b.rows()) {
        assert_eq!(ra.record, rb.record);
        assert!((0.0..=1.0).contains(&ra.record.p_value));
    }
}

#[test]
fn mixed_sign_seasonal_sample_fits_all_defaults() {
    // water-balance-like: 10 years of a monthly cycle plus a deterministic wobble
    let x: Vec<f64> = (0..120)
        .map(|i| {
            let season = 30.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin();
            season + 10.0 * ((i * 7919 % 13) as f64 - 6.0) / 6.0
        })
        .collect();

    let cmp = dists_test(&x, None, &FitConfig::new()).unwrap();
    assert_eq!(cmp.len(), 8);
    assert!(cmp.accepted().contains(&"norm"));

    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    for name in ["gamma", "fisk", "lognorm"] {
        let loc = cmp.param(name, 2).unwrap();
        assert!(loc < min, "{name} loc {loc} not below {min}");
    }
}

#[test]
fn log_logistic_quantiles_recover_parameters() {
    // c = 4, loc = -3, scale = 5
    let x = quantiles(200, |p| -3.0 + 5.0 * (p / (1.0 - p)).powf(0.25));
    let r = dist_test(&x, &Fisk, &FitConfig::new()).unwrap();
    assert!(!r.reject_h0);
    assert_relative_eq!(r.params[0], 4.0, epsilon = 0.15);
    assert_relative_eq!(r.params[1], -3.0, epsilon = 0.15);
    assert_relative_eq!(r.params[2], 5.0, epsilon = 0.15);
}

#[test]
fn sample_size_does_not_change_p_value() {
    let parent = Normal::new(0.0, 1.0).unwrap();
    let mut x = quantiles(200, |p| parent.inverse_cdf(p));
    x[0] -= 1.5;
    assert!(x.len() <= EXACT_MAX_N);
    let default = dist_test(&x, &Norm, &FitConfig::new()).unwrap();
    let small = dist_test(&x, &Norm, &FitConfig::new().with_sample_size(10)).unwrap();
    assert_eq!(default, small);
}
