//! Standard normal density and cumulative distribution.
//!
//! The cumulative uses the three-term polynomial approximation from Abramowitz & Stegun
//! (26.2.16 family) with `c = 0.33267`. It is not exact: the absolute error against the true
//! normal CDF stays below roughly `1.2e-5` over the whole real line, with the largest
//! deviation in the shoulders around `|x| ≈ 0.5..2`. At `x = 0` the result is
//! `0.50000005`, not `0.5`, because `a1 + a2 + a3` only approximates `√(π/2)`.
//!
//! [`ErfNormal`] is available when that error matters more than the cost of `erf`.

use std::f64::consts::PI;

const C: f64 = 0.33267;
const A1: f64 = 0.4361836;
const A2: f64 = -0.1201676;
const A3: f64 = 0.9372980;

/// Standard normal probability density `n(x) = e^(-x²/2) / √(2π)`.
#[inline]
pub fn density(x: f64) -> f64 {
    let inv_sqrt_2pi = 1.0 / (2.0 * PI).sqrt();
    inv_sqrt_2pi * (-0.5 * x * x).exp()
}

/// Polynomial approximation of `P(Z <= x)` for a standard normal `Z`.
///
/// Negative arguments are reflected through `N(x) = 1 - N(-x)` so both halves of the line
/// share one evaluation path.
pub fn cumulative(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= 0.0 {
        let k = 1.0 / (1.0 + C * x);
        1.0 - density(x) * (A1 * k + A2 * k * k + A3 * k * k * k)
    } else {
        1.0 - cumulative(-x)
    }
}

/// A source of standard normal density and cumulative values.
///
/// Implementors must be stateless (or at least immutable) so a pricer can be shared freely
/// across threads.
pub trait NormalDistribution: Send + Sync {
    fn density(&self, x: f64) -> f64;
    fn cumulative(&self, x: f64) -> f64;
}

/// The polynomial approximation above. This is the default for pricing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolynomialNormal;

impl NormalDistribution for PolynomialNormal {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        density(x)
    }

    #[inline]
    fn cumulative(&self, x: f64) -> f64 {
        cumulative(x)
    }
}

/// Cumulative via `0.5 * (1 + erf(x / √2))`, accurate to machine precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErfNormal;

impl NormalDistribution for ErfNormal {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        density(x)
    }

    fn cumulative(&self, x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / 2.0_f64.sqrt()))
    }
}
