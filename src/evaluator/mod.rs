//! Steady-state evaluation of single-server queues.
//!
//! # Pipeline
//!
//! 1. Validate the request (rates, variances, stability)
//! 2. Derive mean and variance of inter-arrival and service times
//! 3. Compute utilization `u = λ/μ`
//! 4. Dispatch to a formula family for `(Lq, Wq)`
//! 5. Complete with `L = Lq + u`, `W = Wq + 1/μ`
//!
//! A zero arrival rate short-circuits step 4: the system is idle and
//! `Lq = Wq = 0`.
//!
//! The evaluator holds no mutable state and can be shared across threads.

mod formulas;
mod moments;
mod root;

pub use formulas::{FormulaFamily, QueueLengths};
pub use moments::ProcessMoments;
pub use root::{bisect, RootFinderConfig};

use tracing::trace;

use crate::error::QueueError;
use crate::models::{EvaluationRequest, EvaluationResult, QueueingNotation, Side};
use crate::validation::validate_request;
use formulas::FormulaInputs;

/// Computes steady-state metrics for `A/B/1` queues.
///
/// # Example
/// ```
/// use u_queueing::evaluator::QueueMetricsEvaluator;
/// use u_queueing::models::EvaluationRequest;
///
/// let request = EvaluationRequest::parse("M/D/1", 80.0, 100.0).unwrap();
/// let result = QueueMetricsEvaluator::new().evaluate(&request).unwrap();
/// assert!((result.lq - 1.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueueMetricsEvaluator {
    root_finder: RootFinderConfig,
}

impl QueueMetricsEvaluator {
    /// Creates an evaluator with the default root-search budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with a custom D/M/1 root-search budget.
    pub fn with_root_finder(root_finder: RootFinderConfig) -> Self {
        Self { root_finder }
    }

    /// Root-search budget in use.
    pub fn root_finder(&self) -> &RootFinderConfig {
        &self.root_finder
    }

    /// Evaluates one request.
    ///
    /// # Errors
    /// - `InvalidParameter` for negative, zero or non-finite inputs
    /// - `UnstableSystem` when `arrival_rate >= service_rate`
    /// - `MissingVariance` when a `G` side has no variance
    /// - `NumericalNonConvergence` if the D/M/1 root search fails
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, QueueError> {
        if let Err(errors) = validate_request(request) {
            if let Some(first) = errors.into_iter().next() {
                return Err(first);
            }
        }

        let notation = request.notation;
        let ar = request.arrival_rate;
        let sr = request.service_rate;

        let arrival = ProcessMoments::from_rate(
            notation.arrival,
            ar,
            request.arrival_variance,
            Side::Arrival,
        )?;
        let service = ProcessMoments::from_rate(
            notation.service,
            sr,
            request.service_variance,
            Side::Service,
        )?;
        let u = ar / sr;

        let lengths = if ar > 0.0 {
            let family = FormulaFamily::select(&notation);
            trace!(%notation, %family, utilization = u, "dispatching");
            let inputs = FormulaInputs {
                arrival_rate: ar,
                service_rate: sr,
                utilization: u,
                arrival,
                service,
            };
            formulas::apply(family, &inputs, &self.root_finder)?
        } else {
            trace!(%notation, "idle system");
            QueueLengths { lq: 0.0, wq: 0.0 }
        };

        Ok(EvaluationResult {
            qs: notation,
            ar,
            sr,
            a: arrival.mean,
            va: arrival.variance,
            s: service.mean,
            vs: service.variance,
            u,
            lq: lengths.lq,
            l: lengths.lq + u,
            wq: lengths.wq,
            w: lengths.wq + service.mean,
        })
    }
}

/// Evaluates a queue given its notation string and rates.
///
/// Convenience wrapper around [`QueueMetricsEvaluator::evaluate`] with the
/// default root-search budget.
///
/// # Example
/// ```
/// let r = u_queueing::evaluate("M/M/1", 80.0, 100.0, None, None).unwrap();
/// assert!((r.w - 0.05).abs() < 1e-12);
/// ```
pub fn evaluate(
    notation: &str,
    arrival_rate: f64,
    service_rate: f64,
    arrival_variance: Option<f64>,
    service_variance: Option<f64>,
) -> Result<EvaluationResult, QueueError> {
    let request = EvaluationRequest {
        notation: QueueingNotation::parse(notation)?,
        arrival_rate,
        service_rate,
        arrival_variance,
        service_variance,
    };
    QueueMetricsEvaluator::new().evaluate(&request)
}
