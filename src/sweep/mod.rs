//! Parameter sweeps over arrival rate.
//!
//! Evaluates every `(notation, arrival_rate)` pair of a grid and collects
//! the results into a [`SweepTable`]. Rows are ordered notation-major,
//! rate-minor regardless of whether evaluation runs in parallel.
//!
//! # Example
//! ```
//! use u_queueing::sweep::{ArrivalRateRange, SweepConfig, SweepTable};
//! use u_queueing::models::Metric;
//!
//! let config = SweepConfig::parse(&["M/M/1", "M/D/1"], ArrivalRateRange::new(0.0, 80.0, 0.5), 100.0)
//!     .unwrap();
//! let table = SweepTable::run(&config).unwrap();
//! let md1 = "M/D/1".parse().unwrap();
//! assert_eq!(table.max_arrival_rate_within(md1, Metric::SystemTime, 0.02), Some(66.5));
//! ```

mod range;
mod table;

pub use range::{ArrivalRateRange, MAX_POINTS};
pub use table::SweepTable;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QueueError;
use crate::evaluator::QueueMetricsEvaluator;
use crate::models::{EvaluationRequest, QueueingNotation};

/// Description of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Queues to evaluate, in output order.
    pub notations: Vec<QueueingNotation>,
    /// Arrival-rate grid.
    pub arrivals: ArrivalRateRange,
    /// Service rate shared by every row.
    pub service_rate: f64,
    /// Inter-arrival variance for `G` arrivals.
    #[serde(default)]
    pub arrival_variance: Option<f64>,
    /// Service variance for `G` service.
    #[serde(default)]
    pub service_variance: Option<f64>,
    /// Evaluate rows on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl SweepConfig {
    /// Creates a sequential sweep without variances.
    pub fn new(
        notations: Vec<QueueingNotation>,
        arrivals: ArrivalRateRange,
        service_rate: f64,
    ) -> Self {
        Self {
            notations,
            arrivals,
            service_rate,
            arrival_variance: None,
            service_variance: None,
            parallel: false,
        }
    }

    /// Creates a sweep from notation strings.
    pub fn parse(
        notations: &[&str],
        arrivals: ArrivalRateRange,
        service_rate: f64,
    ) -> Result<Self, QueueError> {
        let notations = notations
            .iter()
            .map(|s| QueueingNotation::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(notations, arrivals, service_rate))
    }

    /// Sets the inter-arrival variance used by `G` arrivals.
    pub fn with_arrival_variance(mut self, variance: f64) -> Self {
        self.arrival_variance = Some(variance);
        self
    }

    /// Sets the service variance used by `G` service.
    pub fn with_service_variance(mut self, variance: f64) -> Self {
        self.service_variance = Some(variance);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Expands the sweep into one request per row.
    pub fn requests(&self) -> Result<Vec<EvaluationRequest>, QueueError> {
        let rates = self.arrivals.values()?;
        let mut requests = Vec::with_capacity(self.notations.len() * rates.len());
        for &notation in &self.notations {
            for &ar in &rates {
                requests.push(EvaluationRequest {
                    notation,
                    arrival_rate: ar,
                    service_rate: self.service_rate,
                    arrival_variance: self.arrival_variance,
                    service_variance: self.service_variance,
                });
            }
        }
        Ok(requests)
    }
}

impl SweepTable {
    /// Runs a sweep with the default evaluator.
    ///
    /// # Errors
    /// The first failing row in table order. No partial table is returned.
    pub fn run(config: &SweepConfig) -> Result<Self, QueueError> {
        Self::run_with(&QueueMetricsEvaluator::new(), config)
    }

    /// Runs a sweep with a given evaluator.
    pub fn run_with(
        evaluator: &QueueMetricsEvaluator,
        config: &SweepConfig,
    ) -> Result<Self, QueueError> {
        let requests = config.requests()?;
        debug!(
            rows = requests.len(),
            notations = config.notations.len(),
            parallel = config.parallel,
            "sweep started"
        );

        let outcomes: Vec<Result<_, QueueError>> = if config.parallel {
            requests.par_iter().map(|r| evaluator.evaluate(r)).collect()
        } else {
            requests.iter().map(|r| evaluator.evaluate(r)).collect()
        };
        let table = outcomes.into_iter().collect::<Result<SweepTable, _>>()?;

        debug!(rows = table.len(), "sweep finished");
        Ok(table)
    }
}
