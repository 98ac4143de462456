//! Two-sided one-sample Kolmogorov-Smirnov test.
//!
//! Samples of up to [`EXACT_MAX_N`] observations get the exact p-value
//! (Marsaglia, Tsang & Wang 2003); larger ones the asymptotic Kolmogorov
//! distribution with Stephens' correction.

use std::f64::consts::PI;

use crate::dist::Fitted;
use crate::error::DistError;
use crate::family::by_name;

/// Largest sample size that uses the exact distribution of `D`.
pub const EXACT_MAX_N: usize = 10_000;

/// Outcome of a KS test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsResult {
    /// `D = max(D+, D-)`.
    pub statistic: f64,
    /// Two-sided p-value in [0, 1].
    pub p_value: f64,
}

/// KS test of `sample` against a fitted distribution.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DistError::EmptySample`] | empty sample |
/// | [`DistError::NonFiniteSample`] | NaN or infinite observation |
pub fn ks_test(sample: &[f64], fitted: &Fitted<'_>) -> Result<KsResult, DistError> {
    check_finite(sample)?;
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let statistic = statistic(&sorted, |x| fitted.cdf(x));
    let p_value = p_value(sorted.len(), statistic);
    Ok(KsResult { statistic, p_value })
}

/// KS test of `sample` against the built-in family `dist_name` with the
/// given parameters.
///
/// `_sample_size` mirrors the `N` argument of scipy's `kstest`, which only
/// applies to generated samples; array input ignores it.
///
/// # Errors
///
/// [`DistError::UnknownDistribution`] for names outside the registry,
/// [`DistError::InvalidParams`] for unusable parameters, plus the errors of
/// [`ks_test`].
pub fn kstest(
    sample: &[f64],
    dist_name: &str,
    params: &[f64],
    _sample_size: usize,
) -> Result<KsResult, DistError> {
    let dist = by_name(dist_name).ok_or_else(|| DistError::UnknownDistribution {
        name: dist_name.to_string(),
    })?;
    let fitted = Fitted::new(dist, params.to_vec())?;
    ks_test(sample, &fitted)
}

pub(crate) fn check_finite(sample: &[f64]) -> Result<(), DistError> {
    if sample.is_empty() {
        return Err(DistError::EmptySample);
    }
    match sample.iter().position(|v| !v.is_finite()) {
        Some(position) => Err(DistError::NonFiniteSample {
            position,
            value: sample[position],
        }),
        None => Ok(()),
    }
}

/// `max(D+, D-)` over an ascending sample.
fn statistic(sorted: &[f64], cdf: impl Fn(f64) -> f64) -> f64 {
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let d_plus = (i + 1) as f64 / n - f;
            let d_minus = f - i as f64 / n;
            d_plus.max(d_minus)
        })
        .fold(0.0, f64::max)
}

fn p_value(n: usize, d: f64) -> f64 {
    let p = if n <= EXACT_MAX_N {
        1.0 - kolmogorov_cdf(n, d)
    } else {
        asymptotic_sf(n, d)
    };
    p.clamp(0.0, 1.0)
}

/// Asymptotic `P(D > d)` with Stephens' small-sample correction.
fn asymptotic_sf(n: usize, d: f64) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    if lambda <= 0.0 {
        return 1.0;
    }
    if lambda < 1.18 {
        let y = (-PI * PI / (8.0 * lambda * lambda)).exp();
        let cdf = (2.0 * PI).sqrt() / lambda * (y + y.powi(9) + y.powi(25) + y.powi(49));
        1.0 - cdf
    } else {
        let x = (-2.0 * lambda * lambda).exp();
        2.0 * (x - x.powi(4) + x.powi(9) - x.powi(16))
    }
}

/// Exact `P(D <= d)` for a sample of `n` (Marsaglia, Tsang & Wang 2003).
fn kolmogorov_cdf(n: usize, d: f64) -> f64 {
    let nf = n as f64;
    if d * nf <= 0.5 {
        return 0.0;
    }
    if d >= 1.0 {
        return 1.0;
    }
    let s = d * d * nf;
    if s > 7.24 || (s > 3.76 && n > 99) {
        return 1.0 - 2.0 * (-(2.000071 + 0.331 / nf.sqrt() + 1.409 / nf) * s).exp();
    }

    let k = (nf * d) as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nf * d;

    let mut hm = Matrix::zeros(m);
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                hm.set(i, j, 1.0);
            }
        }
    }
    for i in 0..m {
        hm.set(i, 0, hm.get(i, 0) - h.powi(i as i32 + 1));
        hm.set(m - 1, i, hm.get(m - 1, i) - h.powi((m - i) as i32));
    }
    if 2.0 * h - 1.0 > 0.0 {
        hm.set(m - 1, 0, hm.get(m - 1, 0) + (2.0 * h - 1.0).powi(m as i32));
    }
    for i in 0..m {
        for j in 0..m {
            if i + 1 > j {
                for g in 1..=(i + 1 - j) {
                    hm.set(i, j, hm.get(i, j) / g as f64);
                }
            }
        }
    }

    let (q, mut exp10) = hm.power(n);
    let mut s = q.get(k - 1, k - 1);
    for i in 1..=n {
        s = s * i as f64 / nf;
        if s < 1e-140 {
            s *= 1e140;
            exp10 -= 140;
        }
    }
    s * 10f64.powi(exp10)
}

/// Dense square matrix with a decimal exponent kept on the side.
#[derive(Debug, Clone)]
struct Matrix {
    m: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn zeros(m: usize) -> Self {
        Self {
            m,
            data: vec![0.0; m * m],
        }
    }

    fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.m + j]
    }

    fn set(&mut self, i: usize, j: usize, v: f64) {
        self.data[i * self.m + j] = v;
    }

    fn mul(&self, other: &Matrix) -> Matrix {
        let m = self.m;
        let mut out = Matrix::zeros(m);
        for i in 0..m {
            for j in 0..m {
                out.data[i * m + j] = (0..m).map(|k| self.get(i, k) * other.get(k, j)).sum();
            }
        }
        out
    }

    /// `self^n` as `(matrix, exponent)` with the value `matrix * 10^exponent`.
    fn power(&self, n: usize) -> (Matrix, i32) {
        if n == 1 {
            return (self.clone(), 0);
        }
        let (half, e_half) = self.power(n / 2);
        let sq = half.mul(&half);
        let (mut v, mut e) = if n % 2 == 0 {
            (sq, 2 * e_half)
        } else {
            (self.mul(&sq), 2 * e_half)
        };
        let mid = self.m / 2;
        if v.get(mid, mid) > 1e140 {
            v.data.iter_mut().for_each(|x| *x *= 1e-140);
            e += 140;
        }
        (v, e)
    }
}
