//! Statistical helper functions for the spei distribution fitters.
//!
//! Moments here use the population (N) denominator, matching numpy's
//! `std()` and scipy's default biased skewness, because the fitted
//! parameters are compared against that convention.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (N denominator).
/// Returns 0.0 if empty.
pub fn variance_pop(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation (N denominator, numpy's `std()` default).
pub fn sd_pop(data: &[f64]) -> f64 {
    variance_pop(data).sqrt()
}

/// Biased sample skewness `m3 / m2^1.5` (scipy's `skew(bias=True)`).
///
/// Returns `None` if fewer than 3 elements or the data are constant.
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let m = mean(data);
    let (m2, m3) = data.iter().fold((0.0, 0.0), |(s2, s3), &x| {
        let d = x - m;
        (s2 + d * d, s3 + d * d * d)
    });
    let m2 = m2 / nf;
    let m3 = m3 / nf;
    if m2 <= 1e-300 {
        return None;
    }
    Some(m3 / m2.powf(1.5))
}

/// First three sample L-moments `[l1, l2, l3]` (Hosking 1990), computed
/// from unbiased probability-weighted moments.
///
/// **Expects pre-sorted input** (caller's responsibility).
/// Returns `None` if fewer than 3 elements.
pub fn l_moments(sorted: &[f64]) -> Option<[f64; 3]> {
    let n = sorted.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let mut b0 = 0.0;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        let j = i as f64;
        b0 += x;
        b1 += j / (nf - 1.0) * x;
        b2 += j * (j - 1.0) / ((nf - 1.0) * (nf - 2.0)) * x;
    }
    b0 /= nf;
    b1 /= nf;
    b2 /= nf;

    Some([b0, 2.0 * b1 - b0, 6.0 * b2 - 6.0 * b1 + b0])
}

/// Trigamma function ψ'(x).
///
/// Recurrence ψ'(x) = ψ'(x+1) + 1/x² up to x ≥ 8, then the asymptotic
/// expansion (Abramowitz & Stegun 6.4.12). Returns NaN for x ≤ 0.
pub fn trigamma(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    let mut val = 0.0;
    let mut x = x;
    while x < 8.0 {
        val += 1.0 / (x * x);
        x += 1.0;
    }
    let inv_x = 1.0 / x;
    let inv_x2 = inv_x * inv_x;
    val + inv_x
        + 0.5 * inv_x2
        + inv_x2
            * inv_x
            * (1.0 / 6.0 - inv_x2 * (1.0 / 30.0 - inv_x2 * (1.0 / 42.0 - inv_x2 / 30.0)))
}

/// Tetragamma function ψ''(x).
///
/// Recurrence ψ''(x) = ψ''(x+1) − 2/x³ up to x ≥ 8, then the derivative of
/// the trigamma expansion. Returns NaN for x ≤ 0.
pub fn tetragamma(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    let mut val = 0.0;
    let mut x = x;
    while x < 8.0 {
        val -= 2.0 / (x * x * x);
        x += 1.0;
    }
    let inv_x = 1.0 / x;
    let inv_x2 = inv_x * inv_x;
    val - inv_x2 - inv_x2 * inv_x - 0.5 * inv_x2 * inv_x2
        + inv_x2.powi(3) / 6.0
        - inv_x2.powi(4) / 6.0
        + 0.3 * inv_x2.powi(5)
}
