//! Risk classification rules.
//!
//! `classify` is the discrete decision (OK / RIESGOSO) with one human-readable
//! reason per violated rule. `score` is a continuous 0..=100 severity estimate
//! and never feeds back into the status.
//!
//! Rules are evaluated in a fixed order and never short-circuit, so the
//! reasons list is stable for a given input:
//! error rate, latency p95, throughput, 5xx count.

use serde::Serialize;

use crate::model::{Metrics, RiskStatus};
use crate::thresholds::{Thresholds, ERRORS_5XX_MAX};

/// Reason reported when no rule is violated.
pub const ALL_WITHIN_THRESHOLDS: &str = "All metrics within acceptable thresholds";

/// Reason reported when a release has nothing to classify.
pub const NO_METRICS_AVAILABLE: &str = "No metrics available for analysis";

const ERROR_WEIGHT: f64 = 40.0;
const LATENCY_WEIGHT: f64 = 30.0;
const THROUGHPUT_WEIGHT: f64 = 30.0;
const MAX_SCORE: f64 = 100.0;

/// Outcome of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub status: RiskStatus,
    pub reasons: Vec<String>,
}

impl Classification {
    /// Outcome for a release that carries no metrics.
    pub fn unknown() -> Self {
        Self {
            status: RiskStatus::Unknown,
            reasons: vec![NO_METRICS_AVAILABLE.to_string()],
        }
    }

    pub fn is_risky(&self) -> bool {
        self.status == RiskStatus::Risky
    }
}

/// Evaluate `metrics` against `thresholds`.
///
/// Comparisons are strict: a value sitting exactly on its threshold is not a
/// violation.
pub fn classify(metrics: &Metrics, thresholds: &Thresholds) -> Classification {
    let mut reasons = Vec::with_capacity(4);

    if metrics.error_rate > thresholds.error_rate_threshold {
        reasons.push(format!(
            "Error rate too high ({:.2}% > {:.2}%)",
            metrics.error_rate * 100.0,
            thresholds.error_rate_threshold * 100.0
        ));
    }

    if metrics.latency_p95 > thresholds.latency_p95_threshold {
        reasons.push(format!(
            "Latency P95 exceeds threshold ({:.1}ms > {:.1}ms)",
            metrics.latency_p95, thresholds.latency_p95_threshold
        ));
    }

    if metrics.throughput < thresholds.throughput_min {
        reasons.push(format!(
            "Throughput below minimum ({} < {} req/s)",
            metrics.throughput, thresholds.throughput_min
        ));
    }

    if metrics.errors_5xx > ERRORS_5XX_MAX {
        reasons.push(format!(
            "High number of 5xx errors ({} errors)",
            metrics.errors_5xx
        ));
    }

    if reasons.is_empty() {
        Classification {
            status: RiskStatus::Ok,
            reasons: vec![ALL_WITHIN_THRESHOLDS.to_string()],
        }
    } else {
        tracing::debug!(violations = reasons.len(), "metrics classified as risky");
        Classification {
            status: RiskStatus::Risky,
            reasons,
        }
    }
}

/// Weighted risk score in `0.0..=100.0`.
///
/// Error rate contributes up to 40 points, latency and (inverse) throughput up
/// to 30 each. Each term is capped before summing. Throughput is floored at 1
/// so an idle release saturates its term instead of dividing by zero.
pub fn score(metrics: &Metrics, thresholds: &Thresholds) -> f64 {
    let error = capped(
        metrics.error_rate / thresholds.error_rate_threshold,
        ERROR_WEIGHT,
    );
    let latency = capped(
        metrics.latency_p95 / thresholds.latency_p95_threshold,
        LATENCY_WEIGHT,
    );
    let throughput = capped(
        thresholds.throughput_min as f64 / metrics.throughput.max(1) as f64,
        THROUGHPUT_WEIGHT,
    );

    (error + latency + throughput).min(MAX_SCORE)
}

// NaN ratios (0/0) count as no contribution.
fn capped(ratio: f64, weight: f64) -> f64 {
    let v = ratio * weight;
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, weight)
    }
}
