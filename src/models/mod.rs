//! Queueing domain models.
//!
//! Value types exchanged at the evaluator boundary. Requests and results
//! are built per call and owned by the caller.
//!
//! # Notation
//!
//! | Type | Role |
//! |------|------|
//! | `DistributionKind` | `M`, `D` or `G` family of one side |
//! | `QueueingNotation` | `A/B/1` pair |
//! | `EvaluationRequest` | Rates plus optional variances |
//! | `EvaluationResult` | Full metric record |

mod distribution;
mod notation;
mod request;
mod result;

pub use distribution::{DistributionKind, Side};
pub use notation::QueueingNotation;
pub use request::EvaluationRequest;
pub use result::{EvaluationResult, Metric};
