//! Ordered table of sweep results.
//!
//! Rows are keyed by `(qs, ar)` and kept in insertion order, so "first"
//! and "last" follow the sweep direction.

use serde::{Deserialize, Serialize};

use crate::models::{EvaluationResult, Metric, QueueingNotation};

/// Results of many evaluations, one row each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepTable {
    rows: Vec<EvaluationResult>,
}

impl SweepTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: EvaluationResult) {
        self.rows.push(row);
    }

    /// All rows in order.
    pub fn rows(&self) -> &[EvaluationResult] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct notations in first-seen order.
    pub fn notations(&self) -> Vec<QueueingNotation> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.qs) {
                seen.push(row.qs);
            }
        }
        seen
    }

    /// Rows for one notation.
    pub fn rows_for(
        &self,
        notation: QueueingNotation,
    ) -> impl Iterator<Item = &EvaluationResult> + '_ {
        self.rows.iter().filter(move |r| r.qs == notation)
    }

    /// Row for an exact `(notation, arrival_rate)` key.
    pub fn get(&self, notation: QueueingNotation, arrival_rate: f64) -> Option<&EvaluationResult> {
        self.rows_for(notation).find(|r| r.ar == arrival_rate)
    }

    /// `(x, y)` points of one notation, for plotting `y` against `x`.
    pub fn series(&self, notation: QueueingNotation, x: Metric, y: Metric) -> Vec<(f64, f64)> {
        self.rows_for(notation)
            .map(|r| (r.get(x), r.get(y)))
            .collect()
    }

    /// First row of `notation` satisfying `predicate`.
    pub fn first_where<P>(&self, notation: QueueingNotation, predicate: P) -> Option<&EvaluationResult>
    where
        P: Fn(&EvaluationResult) -> bool,
    {
        self.rows_for(notation).find(|r| predicate(r))
    }

    /// Last row of `notation` satisfying `predicate`.
    pub fn last_where<P>(&self, notation: QueueingNotation, predicate: P) -> Option<&EvaluationResult>
    where
        P: Fn(&EvaluationResult) -> bool,
    {
        self.rows_for(notation).filter(|r| predicate(r)).last()
    }

    /// Largest swept arrival rate at which `metric` stays at or below
    /// `threshold` (last qualifying row in sweep order).
    ///
    /// Typical use: the maximum load that keeps the mean time in system
    /// under a service-level target.
    pub fn max_arrival_rate_within(
        &self,
        notation: QueueingNotation,
        metric: Metric,
        threshold: f64,
    ) -> Option<f64> {
        self.last_where(notation, |r| r.get(metric) <= threshold)
            .map(|r| r.ar)
    }
}

impl FromIterator<EvaluationResult> for SweepTable {
    fn from_iter<I: IntoIterator<Item = EvaluationResult>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SweepTable {
    type Item = EvaluationResult;
    type IntoIter = std::vec::IntoIter<EvaluationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;

    fn table() -> SweepTable {
        let mut rows = Vec::new();
        for qs in ["M/M/1", "D/D/1"] {
            for ar in [10.0, 50.0, 90.0] {
                rows.push(evaluate(qs, ar, 100.0, None, None).unwrap());
            }
        }
        rows.into_iter().collect()
    }

    #[test]
    fn test_rows_for_and_notations() {
        let t = table();
        assert_eq!(t.len(), 6);
        let mm1: QueueingNotation = "M/M/1".parse().unwrap();
        assert_eq!(t.rows_for(mm1).count(), 3);
        assert_eq!(
            t.notations(),
            vec![mm1, "D/D/1".parse::<QueueingNotation>().unwrap()]
        );
    }

    #[test]
    fn test_get_by_key() {
        let t = table();
        let dd1: QueueingNotation = "D/D/1".parse().unwrap();
        let row = t.get(dd1, 50.0).unwrap();
        assert_eq!(row.qs, dd1);
        assert_eq!(row.lq, 0.0);
        assert!(t.get(dd1, 51.0).is_none());
    }

    #[test]
    fn test_series() {
        let t = table();
        let mm1: QueueingNotation = "M/M/1".parse().unwrap();
        let points = t.series(mm1, Metric::Utilization, Metric::SystemLength);
        assert_eq!(points.len(), 3);
        // M/M/1: L = u / (1 - u)
        for (u, l) in points {
            assert!((l - u / (1.0 - u)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_and_last_where() {
        let t = table();
        let mm1: QueueingNotation = "M/M/1".parse().unwrap();
        let first = t.first_where(mm1, |r| r.lq > 0.1).unwrap();
        assert_eq!(first.ar, 50.0);
        let last = t.last_where(mm1, |r| r.lq < 1.0).unwrap();
        assert_eq!(last.ar, 50.0);
        assert!(t.first_where(mm1, |r| r.u > 0.95).is_none());
    }

    #[test]
    fn test_max_arrival_rate_within() {
        let t = table();
        let mm1: QueueingNotation = "M/M/1".parse().unwrap();
        // W = 1 / (μ - λ): 0.0111, 0.02, 0.1
        assert_eq!(
            t.max_arrival_rate_within(mm1, Metric::SystemTime, 0.05),
            Some(50.0)
        );
        assert_eq!(
            t.max_arrival_rate_within(mm1, Metric::SystemTime, 0.001),
            None
        );
    }

    #[test]
    fn test_empty() {
        let t = SweepTable::new();
        assert!(t.is_empty());
        assert!(t.notations().is_empty());
    }
}
