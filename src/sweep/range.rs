//! Arrival-rate grid.

use serde::{Deserialize, Serialize};

use crate::error::QueueError;

/// Largest grid `values` will materialize.
pub const MAX_POINTS: usize = 10_000_000;

/// Inclusive grid `start, start + step, ..., stop`.
///
/// Points are computed as `start + i·step` so that long grids do not
/// accumulate rounding drift. `stop` is included when it lies on the grid
/// (within a relative 1e-9 of a step).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrivalRateRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl ArrivalRateRange {
    /// Creates a grid description.
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Materializes the grid.
    ///
    /// # Errors
    /// `InvalidParameter` when `start < 0`, `stop < start`, `step <= 0`,
    /// any bound is not finite, or the grid exceeds [`MAX_POINTS`].
    pub fn values(&self) -> Result<Vec<f64>, QueueError> {
        if !(self.start.is_finite() && self.start >= 0.0) {
            return Err(QueueError::InvalidParameter {
                name: "start",
                value: self.start,
            });
        }
        if !(self.stop.is_finite() && self.stop >= self.start) {
            return Err(QueueError::InvalidParameter {
                name: "stop",
                value: self.stop,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(QueueError::InvalidParameter {
                name: "step",
                value: self.step,
            });
        }

        let intervals = ((self.stop - self.start) / self.step + 1e-9).floor();
        if !(intervals < MAX_POINTS as f64) {
            return Err(QueueError::InvalidParameter {
                name: "step",
                value: self.step,
            });
        }
        let count = intervals as usize + 1;
        Ok((0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect())
    }
}
