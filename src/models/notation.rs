//! Kendall notation for single-server queues.
//!
//! Accepts strings of the form `A/B/1` where `A` and `B` are one of
//! `M`, `D`, `G`. The server count is fixed at one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DistributionKind;
use crate::error::QueueError;

/// An `A/B/1` queue: arrival family, service family, one server.
///
/// Serializes as its string form (e.g. `"M/D/1"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QueueingNotation {
    /// Inter-arrival time distribution.
    pub arrival: DistributionKind,
    /// Service time distribution.
    pub service: DistributionKind,
}

impl QueueingNotation {
    /// Creates a notation from its two distribution families.
    pub fn new(arrival: DistributionKind, service: DistributionKind) -> Self {
        Self { arrival, service }
    }

    /// Parses `"<A>/<B>/1"`.
    ///
    /// # Errors
    /// `InvalidNotation` when the token count is not 3, the server count is
    /// not `1`, or a distribution letter is outside `{M, D, G}`.
    pub fn parse(notation: &str) -> Result<Self, QueueError> {
        let invalid = |reason: String| QueueError::InvalidNotation {
            notation: notation.to_string(),
            reason,
        };

        let tokens: Vec<&str> = notation.trim().split('/').collect();
        if tokens.len() != 3 {
            return Err(invalid(format!(
                "expected 3 '/'-separated tokens, found {}",
                tokens.len()
            )));
        }
        if tokens[2] != "1" {
            return Err(invalid(format!(
                "only single-server queues are supported, got '{}' servers",
                tokens[2]
            )));
        }

        let arrival = DistributionKind::from_letter(tokens[0])
            .ok_or_else(|| invalid(format!("unknown arrival distribution '{}'", tokens[0])))?;
        let service = DistributionKind::from_letter(tokens[1])
            .ok_or_else(|| invalid(format!("unknown service distribution '{}'", tokens[1])))?;

        Ok(Self::new(arrival, service))
    }
}

impl fmt::Display for QueueingNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/1", self.arrival, self.service)
    }
}

impl FromStr for QueueingNotation {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QueueingNotation {
    type Error = QueueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<QueueingNotation> for String {
    fn from(value: QueueingNotation) -> Self {
        value.to_string()
    }
}
