//! Queue-length formulas by distribution pair.
//!
//! # Families
//!
//! | Pair | Formula | Kind |
//! |------|---------|------|
//! | M/M/1 | `Lq = u²/(1−u)` | exact |
//! | M/D/1 | `Lq = u²/(2(1−u))` | exact (Pollaczek–Khinchine) |
//! | M/G/1 | `Lq = u²(1+cs²)/(2(1−u))` | exact (Pollaczek–Khinchine) |
//! | D/M/1 | `Wq = σ/(μ(1−σ))` | exact (embedded Markov chain) |
//! | other | `Lq ≈ u²/(1−u)·(ca²+cs²)/2` | Kingman approximation |
//!
//! Exact pairs take precedence; everything else (any `G` arrival, `D/D`,
//! `D/G`) falls back to Kingman. `D/D/1` collapses to zero queueing.
//!
//! # References
//! - Kleinrock (1975), "Queueing Systems, Vol. 1", Ch. 3, 5
//! - Kingman (1961), "The single server queue in heavy traffic"

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use super::moments::ProcessMoments;
use super::root::{dm1_sigma, RootFinderConfig};
use crate::error::QueueError;
use crate::models::{DistributionKind, QueueingNotation};

/// Formula family applied to a distribution pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaFamily {
    /// Exponential arrivals and service.
    Mm1,
    /// Exponential arrivals, fixed service.
    Md1,
    /// Exponential arrivals, general service.
    Mg1,
    /// Fixed arrivals, exponential service.
    Dm1,
    /// Kingman's G/G/1 approximation.
    Kingman,
}

impl FormulaFamily {
    /// Selects the family for a notation.
    pub fn select(notation: &QueueingNotation) -> Self {
        use DistributionKind::{Deterministic, Exponential, General};

        match (notation.arrival, notation.service) {
            (Exponential, Exponential) => Self::Mm1,
            (Exponential, Deterministic) => Self::Md1,
            (Exponential, General) => Self::Mg1,
            (Deterministic, Exponential) => Self::Dm1,
            _ => Self::Kingman,
        }
    }

    /// Whether the family is an exact steady-state result.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Kingman)
    }
}

impl fmt::Display for FormulaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mm1 => "M/M/1",
            Self::Md1 => "M/D/1 (Pollaczek-Khinchine)",
            Self::Mg1 => "M/G/1 (Pollaczek-Khinchine)",
            Self::Dm1 => "D/M/1",
            Self::Kingman => "G/G/1 (Kingman)",
        };
        f.write_str(name)
    }
}

/// Queue-side metrics produced by a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueLengths {
    /// Mean number waiting.
    pub lq: f64,
    /// Mean wait before service.
    pub wq: f64,
}

impl QueueLengths {
    fn from_lq(lq: f64, arrival_rate: f64) -> Self {
        Self {
            lq,
            wq: lq / arrival_rate,
        }
    }
}

/// Inputs shared by every formula. Requires `0 < ar < sr`.
#[derive(Debug, Clone, Copy)]
pub struct FormulaInputs {
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub utilization: f64,
    pub arrival: ProcessMoments,
    pub service: ProcessMoments,
}

/// Applies the formula of `family`.
///
/// # Errors
/// `NumericalNonConvergence` from the D/M/1 root search.
pub fn apply(
    family: FormulaFamily,
    inputs: &FormulaInputs,
    root_finder: &RootFinderConfig,
) -> Result<QueueLengths, QueueError> {
    let ar = inputs.arrival_rate;
    let u = inputs.utilization;

    let lengths = match family {
        FormulaFamily::Mm1 => QueueLengths::from_lq(u * u / (1.0 - u), ar),
        FormulaFamily::Md1 => QueueLengths::from_lq(u * u / (2.0 * (1.0 - u)), ar),
        FormulaFamily::Mg1 => {
            let cs2 = inputs.service.scv();
            QueueLengths::from_lq(u * u * (1.0 + cs2) / (2.0 * (1.0 - u)), ar)
        }
        FormulaFamily::Dm1 => {
            let sigma = dm1_sigma(u, root_finder)?;
            let wq = sigma / (inputs.service_rate * (1.0 - sigma));
            QueueLengths { lq: ar * wq, wq }
        }
        FormulaFamily::Kingman => {
            let ca2 = inputs.arrival.scv();
            let cs2 = inputs.service.scv();
            QueueLengths::from_lq(u * u / (1.0 - u) * (ca2 + cs2) / 2.0, ar)
        }
    };

    trace!(%family, lq = lengths.lq, wq = lengths.wq, "queue lengths computed");
    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;

    fn inputs(notation: &str, ar: f64, sr: f64, va: Option<f64>, vs: Option<f64>) -> FormulaInputs {
        let n = QueueingNotation::parse(notation).unwrap();
        FormulaInputs {
            arrival_rate: ar,
            service_rate: sr,
            utilization: ar / sr,
            arrival: ProcessMoments::from_rate(n.arrival, ar, va, Side::Arrival).unwrap(),
            service: ProcessMoments::from_rate(n.service, sr, vs, Side::Service).unwrap(),
        }
    }

    fn run(notation: &str, ar: f64, sr: f64, va: Option<f64>, vs: Option<f64>) -> QueueLengths {
        let n = QueueingNotation::parse(notation).unwrap();
        apply(
            FormulaFamily::select(&n),
            &inputs(notation, ar, sr, va, vs),
            &RootFinderConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_select() {
        let cases = [
            ("M/M/1", FormulaFamily::Mm1),
            ("M/D/1", FormulaFamily::Md1),
            ("M/G/1", FormulaFamily::Mg1),
            ("D/M/1", FormulaFamily::Dm1),
            ("D/D/1", FormulaFamily::Kingman),
            ("D/G/1", FormulaFamily::Kingman),
            ("G/M/1", FormulaFamily::Kingman),
            ("G/D/1", FormulaFamily::Kingman),
            ("G/G/1", FormulaFamily::Kingman),
        ];
        for (s, expected) in cases {
            assert_eq!(FormulaFamily::select(&s.parse().unwrap()), expected, "{s}");
        }
        assert!(FormulaFamily::Dm1.is_exact());
        assert!(!FormulaFamily::Kingman.is_exact());
    }

    #[test]
    fn test_mm1() {
        let q = run("M/M/1", 80.0, 100.0, None, None);
        assert!((q.lq - 3.2).abs() < 1e-9);
        assert!((q.wq - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_md1() {
        let q = run("M/D/1", 80.0, 100.0, None, None);
        assert!((q.lq - 1.6).abs() < 1e-9);
        assert!((q.wq - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_mg1_matches_special_cases() {
        // cs² = 1 reproduces M/M/1, cs² = 0 reproduces M/D/1
        let s = 0.01;
        let exp_like = run("M/G/1", 80.0, 100.0, None, Some(s * s));
        assert!((exp_like.lq - 3.2).abs() < 1e-9);
        let det_like = run("M/G/1", 80.0, 100.0, None, Some(0.0));
        assert!((det_like.lq - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_dm1() {
        let q = run("D/M/1", 80.0, 100.0, None, None);
        // σ ≈ 0.6286298 at u = 0.8
        assert!((q.wq - 0.0169273).abs() < 1e-6);
        assert!((q.lq - 80.0 * q.wq).abs() < 1e-12);
        // Deterministic arrivals queue less than Poisson arrivals
        assert!(q.lq < run("M/M/1", 80.0, 100.0, None, None).lq);
    }

    #[test]
    fn test_kingman_general() {
        // ca² = 0.5, cs² = 1.5 at u = 0.5 → Lq = 0.5 · 1.0 = 0.5
        let a = 1.0 / 50.0;
        let s = 1.0 / 100.0;
        let q = run("G/G/1", 50.0, 100.0, Some(0.5 * a * a), Some(1.5 * s * s));
        assert!((q.lq - 0.5).abs() < 1e-9);
        assert!((q.wq - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_kingman_gm1_with_exponential_variance_matches_mm1() {
        let a = 1.0 / 80.0;
        let q = run("G/M/1", 80.0, 100.0, Some(a * a), None);
        assert!((q.lq - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_dd1_no_queue() {
        for ar in [1.0, 50.0, 99.9] {
            let q = run("D/D/1", ar, 100.0, None, None);
            assert_eq!(q.lq, 0.0);
            assert_eq!(q.wq, 0.0);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FormulaFamily::Kingman.to_string(), "G/G/1 (Kingman)");
    }
}
