//! First and second moments of the two queue processes.
//!
//! For a rate `r` the mean time is `m = 1/r`; the variance follows from
//! the distribution family:
//!
//! | Family | Variance | c² = var/m² |
//! |--------|----------|-------------|
//! | Exponential | `m²` | 1 |
//! | Deterministic | `0` | 0 |
//! | General | supplied | `var/m²` |

use crate::error::QueueError;
use crate::models::{DistributionKind, Side};

/// Mean and variance of one time process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessMoments {
    /// Mean time between events (`+∞` for a zero rate).
    pub mean: f64,
    /// Variance of that time.
    pub variance: f64,
}

impl ProcessMoments {
    /// Derives moments from a rate and its distribution family.
    ///
    /// A zero rate gives an infinite mean. For an exponential process the
    /// variance is then infinite as well.
    ///
    /// # Errors
    /// `MissingVariance` for a `General` family without `variance`.
    pub fn from_rate(
        kind: DistributionKind,
        rate: f64,
        variance: Option<f64>,
        side: Side,
    ) -> Result<Self, QueueError> {
        let mean = if rate > 0.0 { 1.0 / rate } else { f64::INFINITY };
        let variance = match kind {
            DistributionKind::Exponential => mean * mean,
            DistributionKind::Deterministic => 0.0,
            DistributionKind::General => variance.ok_or(QueueError::MissingVariance { side })?,
        };
        Ok(Self { mean, variance })
    }

    /// Squared coefficient of variation, `variance / mean²`.
    ///
    /// Only meaningful for a finite, positive mean.
    pub fn scv(&self) -> f64 {
        self.variance / (self.mean * self.mean)
    }
}
