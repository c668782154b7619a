//! Evaluation result and metric selection.
//!
//! # Fields
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `qs` | Queue notation |
//! | `ar`, `sr` | Arrival and service rate |
//! | `a`, `va` | Mean and variance of inter-arrival time |
//! | `s`, `vs` | Mean and variance of service time |
//! | `u` | Server utilization |
//! | `lq`, `l` | Mean number in queue / in system |
//! | `wq`, `w` | Mean waiting time in queue / in system |
//!
//! # Reference
//! Little (1961), "A Proof for the Queuing Formula: L = λW"

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::QueueingNotation;

/// Steady-state metrics of a single-server queue.
///
/// Every field is always populated. With a zero arrival rate the mean
/// inter-arrival time `a` is `+∞` (and so is `va` for `M` arrivals); those
/// two fields serialize `+∞` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Queue notation.
    pub qs: QueueingNotation,
    /// Arrival rate.
    pub ar: f64,
    /// Service rate.
    pub sr: f64,
    /// Mean inter-arrival time (1/ar).
    #[serde(with = "unbounded")]
    pub a: f64,
    /// Inter-arrival time variance.
    #[serde(with = "unbounded")]
    pub va: f64,
    /// Mean service time (1/sr).
    pub s: f64,
    /// Service time variance.
    pub vs: f64,
    /// Utilization (ar/sr).
    pub u: f64,
    /// Mean number of entities waiting in queue.
    pub lq: f64,
    /// Mean number of entities in system.
    pub l: f64,
    /// Mean waiting time in queue.
    pub wq: f64,
    /// Mean time in system.
    pub w: f64,
}

impl EvaluationResult {
    /// Reads one numeric field.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::ArrivalRate => self.ar,
            Metric::ServiceRate => self.sr,
            Metric::MeanInterArrival => self.a,
            Metric::InterArrivalVariance => self.va,
            Metric::MeanService => self.s,
            Metric::ServiceVariance => self.vs,
            Metric::Utilization => self.u,
            Metric::QueueLength => self.lq,
            Metric::SystemLength => self.l,
            Metric::QueueWait => self.wq,
            Metric::SystemTime => self.w,
        }
    }

    /// Checks the steady-state identities within `tolerance`.
    ///
    /// - `u ∈ [0, 1)`
    /// - `l = lq + u`, `w = wq + s`
    /// - `l = ar·w`, `lq = ar·wq` (Little's law)
    ///
    /// Comparisons are relative for magnitudes above one.
    ///
    /// # Errors
    /// A description of the first violated identity.
    pub fn check_invariants(&self, tolerance: f64) -> Result<(), String> {
        let close = |x: f64, y: f64| (x - y).abs() <= tolerance * x.abs().max(y.abs()).max(1.0);

        if !(0.0..1.0).contains(&self.u) {
            return Err(format!("utilization {} outside [0, 1)", self.u));
        }
        let checks = [
            ("l = lq + u", self.l, self.lq + self.u),
            ("w = wq + s", self.w, self.wq + self.s),
            ("l = ar*w", self.l, self.ar * self.w),
            ("lq = ar*wq", self.lq, self.ar * self.wq),
            ("u = ar/sr", self.u, self.ar / self.sr),
            ("s = 1/sr", self.s, 1.0 / self.sr),
        ];
        for (name, lhs, rhs) in checks {
            if !close(lhs, rhs) {
                return Err(format!("{name} violated: {lhs} vs {rhs}"));
            }
        }
        Ok(())
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System {} parameters:", self.qs)?;
        for metric in Metric::ALL {
            writeln!(f, " - {}: {}", metric.label(), self.get(metric))?;
        }
        Ok(())
    }
}

// Custom serialization for +∞ as null (JSON has no infinity)
mod unbounded {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let finite = if value.is_finite() { Some(*value) } else { None };
        finite.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.unwrap_or(f64::INFINITY))
    }
}

/// Numeric fields of [`EvaluationResult`], addressable by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    ArrivalRate,
    ServiceRate,
    MeanInterArrival,
    InterArrivalVariance,
    MeanService,
    ServiceVariance,
    Utilization,
    QueueLength,
    SystemLength,
    QueueWait,
    SystemTime,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 11] = [
        Metric::ArrivalRate,
        Metric::ServiceRate,
        Metric::MeanInterArrival,
        Metric::InterArrivalVariance,
        Metric::MeanService,
        Metric::ServiceVariance,
        Metric::Utilization,
        Metric::QueueLength,
        Metric::SystemLength,
        Metric::QueueWait,
        Metric::SystemTime,
    ];

    /// Result field key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ArrivalRate => "ar",
            Self::ServiceRate => "sr",
            Self::MeanInterArrival => "a",
            Self::InterArrivalVariance => "va",
            Self::MeanService => "s",
            Self::ServiceVariance => "vs",
            Self::Utilization => "u",
            Self::QueueLength => "lq",
            Self::SystemLength => "l",
            Self::QueueWait => "wq",
            Self::SystemTime => "w",
        }
    }

    /// Human-readable name for reports and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ArrivalRate => "Arrival rate",
            Self::ServiceRate => "Service rate",
            Self::MeanInterArrival => "Mean of inter-arrival times",
            Self::InterArrivalVariance => "Variance of inter-arrival time",
            Self::MeanService => "Mean of service times",
            Self::ServiceVariance => "Variance of service times",
            Self::Utilization => "Server utilization (load)",
            Self::QueueLength => "Mean number of entities in queue",
            Self::SystemLength => "Mean number of entities in system",
            Self::QueueWait => "Mean waiting time in queue",
            Self::SystemTime => "Mean waiting time (total time) in system",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| format!("unknown metric '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm1_80_100() -> EvaluationResult {
        EvaluationResult {
            qs: "M/M/1".parse().unwrap(),
            ar: 80.0,
            sr: 100.0,
            a: 0.0125,
            va: 0.0125 * 0.0125,
            s: 0.01,
            vs: 0.0001,
            u: 0.8,
            lq: 3.2,
            l: 4.0,
            wq: 0.04,
            w: 0.05,
        }
    }

    #[test]
    fn test_get_by_key() {
        let r = mm1_80_100();
        let wq: Metric = "wq".parse().unwrap();
        assert_eq!(wq, Metric::QueueWait);
        assert!((r.get(wq) - 0.04).abs() < 1e-12);
        assert!((r.get("l".parse().unwrap()) - 4.0).abs() < 1e-12);
        assert!("qs".parse::<Metric>().is_err());
    }

    #[test]
    fn test_keys_unique() {
        for (i, a) in Metric::ALL.iter().enumerate() {
            for b in &Metric::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_invariants_hold() {
        assert!(mm1_80_100().check_invariants(1e-9).is_ok());
    }

    #[test]
    fn test_invariants_detect_violation() {
        let mut r = mm1_80_100();
        r.l = 5.0;
        let err = r.check_invariants(1e-9).unwrap_err();
        assert!(err.contains("l = lq + u"));

        let mut r = mm1_80_100();
        r.u = 1.2;
        assert!(r.check_invariants(1e-9).is_err());
    }

    #[test]
    fn test_report() {
        let text = mm1_80_100().to_string();
        assert!(text.starts_with("System M/M/1 parameters:"));
        assert!(text.contains(" - Server utilization (load): 0.8"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(mm1_80_100()).unwrap();
        for key in ["qs", "ar", "sr", "a", "va", "s", "vs", "u", "lq", "l", "wq", "w"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["qs"], "M/M/1");
    }

    #[test]
    fn test_idle_row_json_roundtrip() {
        let idle = crate::evaluate("M/M/1", 0.0, 100.0, None, None).unwrap();
        assert!(idle.a.is_infinite() && idle.va.is_infinite());

        let json = serde_json::to_string(&idle).unwrap();
        assert!(json.contains("\"a\":null"));
        let back: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, idle);

        let busy = mm1_80_100();
        let back: EvaluationResult =
            serde_json::from_str(&serde_json::to_string(&busy).unwrap()).unwrap();
        assert_eq!(back, busy);
    }
}
