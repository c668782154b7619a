//! Evaluation request.
//!
//! Rates are in entities per time unit; variances are of the times
//! (inter-arrival, service), in squared time units.

use serde::{Deserialize, Serialize};

use super::QueueingNotation;
use crate::error::QueueError;

/// Inputs to one steady-state evaluation.
///
/// Variances are only read for a `G` side. A variance supplied for an
/// `M` or `D` side is ignored because the family already fixes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Queue type.
    pub notation: QueueingNotation,
    /// Arrival rate (λ). May be zero.
    pub arrival_rate: f64,
    /// Service rate (μ). Must be positive.
    pub service_rate: f64,
    /// Inter-arrival time variance, required for `G/*/1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_variance: Option<f64>,
    /// Service time variance, required for `*/G/1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_variance: Option<f64>,
}

impl EvaluationRequest {
    /// Creates a request without variances.
    pub fn new(notation: QueueingNotation, arrival_rate: f64, service_rate: f64) -> Self {
        Self {
            notation,
            arrival_rate,
            service_rate,
            arrival_variance: None,
            service_variance: None,
        }
    }

    /// Creates a request from a notation string such as `"M/D/1"`.
    pub fn parse(notation: &str, arrival_rate: f64, service_rate: f64) -> Result<Self, QueueError> {
        Ok(Self::new(
            QueueingNotation::parse(notation)?,
            arrival_rate,
            service_rate,
        ))
    }

    /// Sets the inter-arrival time variance.
    pub fn with_arrival_variance(mut self, variance: f64) -> Self {
        self.arrival_variance = Some(variance);
        self
    }

    /// Sets the service time variance.
    pub fn with_service_variance(mut self, variance: f64) -> Self {
        self.service_variance = Some(variance);
        self
    }

    /// Same request at a different arrival rate.
    pub fn at_arrival_rate(&self, arrival_rate: f64) -> Self {
        Self {
            arrival_rate,
            ..self.clone()
        }
    }
}
