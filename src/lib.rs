//! Steady-state analysis of single-server queues for the U-Engine ecosystem.
//!
//! Given an `A/B/1` notation, arrival and service rates (and variances for
//! general distributions), computes utilization, queue length, waiting time
//! and time in system without simulation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DistributionKind`, `QueueingNotation`,
//!   `EvaluationRequest`, `EvaluationResult`, `Metric`
//! - **`validation`**: Request checks (rates, variances, stability)
//! - **`evaluator`**: Moments, formula dispatch, D/M/1 root search
//! - **`sweep`**: Arrival-rate sweeps collected into a result table
//!
//! # Supported Queues
//!
//! | Arrival \ Service | M | D | G |
//! |-------------------|---|---|---|
//! | M | exact | exact (P-K) | exact (P-K) |
//! | D | exact | Kingman (= 0) | Kingman |
//! | G | Kingman | Kingman | Kingman |
//!
//! # Example
//! ```
//! let r = u_queueing::evaluate("M/D/1", 80.0, 100.0, None, None).unwrap();
//! assert!((r.u - 0.8).abs() < 1e-12);
//! assert!((r.w - 0.03).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Kleinrock (1975), "Queueing Systems, Vol. 1: Theory"
//! - Gross & Harris (1998), "Fundamentals of Queueing Theory"
//! - Kingman (1961), "The single server queue in heavy traffic"

pub mod error;
pub mod evaluator;
pub mod models;
pub mod sweep;
pub mod validation;

pub use error::{QueueError, Result};
pub use evaluator::{evaluate, QueueMetricsEvaluator};
