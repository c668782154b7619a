//! Input validation for evaluation requests.
//!
//! Runs before any formula so that bad input fails fast. Detects:
//! - Negative, zero or non-finite rates
//! - Negative or non-finite variances
//! - Unstable systems (utilization ≥ 1)
//! - Missing variances on a General side
//!
//! All problems are collected; callers that need a single error take the
//! first, which follows the order above.

use crate::error::QueueError;
use crate::models::{EvaluationRequest, Side};

/// Validation result.
pub type ValidationResult = Result<(), Vec<QueueError>>;

/// Validates one request against its notation.
///
/// Checks:
/// 1. `arrival_rate` is finite and ≥ 0
/// 2. `service_rate` is finite and > 0
/// 3. Supplied variances are finite and ≥ 0
/// 4. `arrival_rate < service_rate`
/// 5. Every `G` side has a variance
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &EvaluationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let ar = request.arrival_rate;
    let sr = request.service_rate;

    let ar_ok = ar.is_finite() && ar >= 0.0;
    if !ar_ok {
        errors.push(QueueError::InvalidParameter {
            name: "arrival_rate",
            value: ar,
        });
    }
    let sr_ok = sr.is_finite() && sr > 0.0;
    if !sr_ok {
        errors.push(QueueError::InvalidParameter {
            name: "service_rate",
            value: sr,
        });
    }

    let variances = [
        ("arrival_variance", request.arrival_variance),
        ("service_variance", request.service_variance),
    ];
    for (name, variance) in variances {
        if let Some(v) = variance {
            if !(v.is_finite() && v >= 0.0) {
                errors.push(QueueError::InvalidParameter { name, value: v });
            }
        }
    }

    // Stability only makes sense once both rates are usable
    if ar_ok && sr_ok && ar >= sr {
        errors.push(QueueError::UnstableSystem {
            arrival_rate: ar,
            service_rate: sr,
            utilization: ar / sr,
        });
    }

    if request.notation.arrival.requires_variance() && request.arrival_variance.is_none() {
        errors.push(QueueError::MissingVariance {
            side: Side::Arrival,
        });
    }
    if request.notation.service.requires_variance() && request.service_variance.is_none() {
        errors.push(QueueError::MissingVariance {
            side: Side::Service,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(notation: &str, ar: f64, sr: f64) -> EvaluationRequest {
        EvaluationRequest::parse(notation, ar, sr).unwrap()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_request(&request("M/M/1", 80.0, 100.0)).is_ok());
        assert!(validate_request(&request("D/D/1", 0.0, 100.0)).is_ok());
        assert!(validate_request(
            &request("G/G/1", 10.0, 20.0)
                .with_arrival_variance(0.01)
                .with_service_variance(0.0)
        )
        .is_ok());
    }

    #[test]
    fn test_negative_arrival_rate() {
        let errors = validate_request(&request("M/M/1", -1.0, 100.0)).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            QueueError::InvalidParameter {
                name: "arrival_rate",
                ..
            }
        )));
    }

    #[test]
    fn test_non_positive_service_rate() {
        for sr in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let errors = validate_request(&request("M/M/1", 1.0, sr)).unwrap_err();
            assert!(matches!(
                errors[0],
                QueueError::InvalidParameter {
                    name: "service_rate",
                    ..
                }
            ));
            assert!(!errors
                .iter()
                .any(|e| matches!(e, QueueError::UnstableSystem { .. })));
        }
    }

    #[test]
    fn test_unstable() {
        for ar in [100.0, 150.0] {
            let errors = validate_request(&request("D/D/1", ar, 100.0)).unwrap_err();
            assert!(matches!(errors[0], QueueError::UnstableSystem { .. }));
        }
    }

    #[test]
    fn test_missing_variance() {
        let errors = validate_request(&request("G/M/1", 10.0, 20.0)).unwrap_err();
        assert_eq!(
            errors,
            vec![QueueError::MissingVariance {
                side: Side::Arrival
            }]
        );

        let errors = validate_request(&request("M/G/1", 10.0, 20.0)).unwrap_err();
        assert_eq!(
            errors,
            vec![QueueError::MissingVariance {
                side: Side::Service
            }]
        );
    }

    #[test]
    fn test_negative_variance() {
        let req = request("G/M/1", 10.0, 20.0).with_arrival_variance(-0.1);
        let errors = validate_request(&req).unwrap_err();
        assert!(matches!(
            errors[0],
            QueueError::InvalidParameter {
                name: "arrival_variance",
                ..
            }
        ));
    }

    #[test]
    fn test_unused_variance_ignored() {
        let req = request("M/M/1", 10.0, 20.0).with_service_variance(123.0);
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_multiple_errors_ordered() {
        let errors = validate_request(&request("G/G/1", 30.0, 20.0)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], QueueError::UnstableSystem { .. }));
        assert!(matches!(errors[1], QueueError::MissingVariance { .. }));
    }
}
