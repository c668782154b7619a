//! Evaluation errors.
//!
//! Every failure is reported to the immediate caller. None of them are
//! transient: they describe a request the evaluator cannot answer.

use crate::models::Side;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QueueError>;

/// Reasons an evaluation request is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueueError {
    /// Malformed or unsupported `A/B/1` notation.
    #[error("invalid queueing notation '{notation}': {reason}")]
    InvalidNotation { notation: String, reason: String },

    /// A General side was requested without its variance.
    #[error("missing {side} time variance for a general (G) distribution")]
    MissingVariance { side: Side },

    /// Arrival rate is not strictly below service rate.
    #[error(
        "unstable system: arrival rate {arrival_rate} >= service rate {service_rate} (utilization {utilization})"
    )]
    UnstableSystem {
        arrival_rate: f64,
        service_rate: f64,
        utilization: f64,
    },

    /// The D/M/1 root search exhausted its budget.
    #[error("root search did not converge after {iterations} iterations (residual {residual:e})")]
    NumericalNonConvergence { iterations: usize, residual: f64 },

    /// A rate or variance is negative, zero where it must be positive, or not finite.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
