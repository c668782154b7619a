//! Root search for the D/M/1 geometric parameter.
//!
//! # Algorithm
//!
//! In a D/M/1 queue the number of customers seen by an arrival is
//! geometric with parameter σ, the unique root in (0, 1) of
//!
//! ```text
//! σ = exp(−μ·a·(1 − σ)) = exp(−(1 − σ)/u)
//! ```
//!
//! The search runs on `ε = 1 − σ`, where `h(ε) = ε + expm1(−ε/u)` keeps
//! full relative precision as `ε → 0`. `h` is convex with `h(0) = 0` and
//! `h(1) = exp(−1/u) ≥ 0`. For `δ = u(1 − u)`, `h(δ) ≤ −δ(1 − u)/(2u) < 0`,
//! so `[δ, 1]` brackets the non-trivial root.
//!
//! Two regimes bypass bisection:
//! - `exp(−1/u) < f64::EPSILON` (u below ~1/36): `h(1)` rounds to zero, and
//!   σ = exp(−(1 − exp(−1/u))/u) to full precision (zero once it underflows).
//! - `1 − u < 1e-5`: the root is too flat for bisection to resolve `ε`
//!   relatively, so the heavy-traffic expansion
//!   `ε ≈ 2u(1 − u)(1 + 2(1 − u)/3)` is used (relative error below 1e-10).
//!
//! # Reference
//! Gross & Harris (1998), "Fundamentals of Queueing Theory", Ch. 6.2 (G/M/1)

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::QueueError;

/// Below this `1 − u` the heavy-traffic expansion replaces bisection.
const HEAVY_TRAFFIC_GAP: f64 = 1e-5;

/// Iteration budget for bisection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootFinderConfig {
    /// Maximum number of halvings.
    pub max_iterations: usize,
    /// Bracket width, relative to the larger bracket end, at which the search stops.
    pub tolerance: f64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-14,
        }
    }
}

/// Finds a root of `f` in `[lo, hi]` where `f(lo)` and `f(hi)` have
/// strictly opposite signs.
///
/// Stops once `hi − lo <= tolerance · max(|lo|, |hi|)`.
///
/// # Errors
/// `NumericalNonConvergence` if the bracket does not change sign or the
/// width stays above the tolerance after `config.max_iterations`.
pub fn bisect<F>(f: F, mut lo: f64, mut hi: f64, config: &RootFinderConfig) -> Result<f64, QueueError>
where
    F: Fn(f64) -> f64,
{
    let (f_lo, f_hi) = (f(lo), f(hi));
    let brackets = (f_lo < 0.0 && f_hi > 0.0) || (f_lo > 0.0 && f_hi < 0.0);
    if !brackets {
        return Err(QueueError::NumericalNonConvergence {
            iterations: 0,
            residual: f_lo.abs().min(f_hi.abs()),
        });
    }
    let rising = f_lo < 0.0;
    let converged = |lo: f64, hi: f64| hi - lo <= config.tolerance * lo.abs().max(hi.abs());

    for iteration in 0..config.max_iterations {
        let mid = 0.5 * (lo + hi);
        if converged(lo, hi) {
            trace!(iteration, root = mid, "bisection converged");
            return Ok(mid);
        }
        if (f(mid) < 0.0) == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let mid = 0.5 * (lo + hi);
    if converged(lo, hi) {
        return Ok(mid);
    }
    Err(QueueError::NumericalNonConvergence {
        iterations: config.max_iterations,
        residual: f(mid).abs(),
    })
}

/// Solves `σ = exp(−(1 − σ)/u)` for σ ∈ [0, 1), given `0 < u < 1`.
pub fn dm1_sigma(utilization: f64, config: &RootFinderConfig) -> Result<f64, QueueError> {
    let u = utilization;
    let gap = 1.0 - u;

    let floor = (-1.0 / u).exp();
    if floor < f64::EPSILON {
        // 1 − σ rounds to 1; one fixed-point step from exp(−1/u) is exact to f64
        let sigma = (-(1.0 - floor) / u).exp();
        trace!(utilization = u, sigma, "light-load closed form");
        return Ok(sigma);
    }
    if gap < HEAVY_TRAFFIC_GAP {
        let eps = 2.0 * u * gap * (1.0 + 2.0 * gap / 3.0);
        trace!(utilization = u, eps, "heavy-traffic expansion");
        return Ok(1.0 - eps);
    }

    let eps = bisect(|e| e + (-e / u).exp_m1(), u * gap, 1.0, config)?;
    Ok(1.0 - eps)
}
