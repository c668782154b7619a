//! Distribution families for inter-arrival and service times.
//!
//! # Kendall Letters
//!
//! | Letter | Family | Variance of a time with mean `m` |
//! |--------|--------|----------------------------------|
//! | `M` | Exponential (Markovian) | `m²` |
//! | `D` | Deterministic | `0` |
//! | `G` | General | supplied by the caller |
//!
//! # Reference
//! Kendall (1953), "Stochastic Processes Occurring in the Theory of Queues"

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distribution family of one side of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionKind {
    /// Memoryless times (`M`).
    Exponential,
    /// Fixed times (`D`).
    Deterministic,
    /// Arbitrary times with a known variance (`G`).
    General,
}

impl DistributionKind {
    /// Parses a single Kendall letter.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "M" => Some(Self::Exponential),
            "D" => Some(Self::Deterministic),
            "G" => Some(Self::General),
            _ => None,
        }
    }

    /// Kendall letter for this family.
    pub fn letter(&self) -> char {
        match self {
            Self::Exponential => 'M',
            Self::Deterministic => 'D',
            Self::General => 'G',
        }
    }

    /// Whether the caller must supply the variance.
    pub fn requires_variance(&self) -> bool {
        matches!(self, Self::General)
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which process of the queue a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Inter-arrival process.
    Arrival,
    /// Service process.
    Service,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrival => f.write_str("inter-arrival"),
            Self::Service => f.write_str("service"),
        }
    }
}
