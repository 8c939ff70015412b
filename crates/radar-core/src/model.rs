//! Release records and the metrics attached to them.
//!
//! `Release` is the unit stored by the gateway and returned to clients; its
//! JSON shape is part of the public API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::thresholds::Thresholds;

/// Risk classification outcome.
///
/// Wire values are the display strings clients already consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "RIESGOSO")]
    Risky,
    #[serde(rename = "DESCONOCIDO")]
    Unknown,
}

impl RiskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskStatus::Ok => "OK",
            RiskStatus::Risky => "RIESGOSO",
            RiskStatus::Unknown => "DESCONOCIDO",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational measurements for a release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Fraction of failed requests, `0.0..=1.0`.
    pub error_rate: f64,
    /// 95th percentile latency in milliseconds.
    pub latency_p95: f64,
    /// Requests per second.
    #[serde(deserialize_with = "whole_number")]
    pub throughput: u64,
    /// Count of 5xx responses.
    #[serde(default, deserialize_with = "whole_number")]
    pub errors_5xx: u64,
}

/// Non-negative integer that may arrive as a whole-number float (`1200.0`).
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeNumber;

    impl<'de> Visitor<'de> for WholeNumber {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative whole number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<u64, E> {
            // 2^64 is exactly representable; anything at or above it overflows.
            if v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v < 18_446_744_073_709_551_616.0 {
                Ok(v as u64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeNumber)
}

/// A named, committed software version under risk evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub commit: String,
    pub timestamp: DateTime<Utc>,
    pub status: RiskStatus,
    pub metrics: Option<Metrics>,
}

impl Release {
    /// New release without metrics. Status stays `Unknown` until metrics are attached.
    pub fn new(version: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
            timestamp: Utc::now(),
            status: RiskStatus::Unknown,
            metrics: None,
        }
    }

    /// Attach metrics and snapshot the status they classify to under `thresholds`.
    ///
    /// The stored status is not revisited if thresholds change later.
    pub fn with_metrics(mut self, metrics: Metrics, thresholds: &Thresholds) -> Self {
        self.status = classify(&metrics, thresholds).status;
        self.metrics = Some(metrics);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_release_is_unknown() {
        let r = Release::new("v1.0.0", "abc1234");
        assert_eq!(r.status, RiskStatus::Unknown);
        assert!(r.metrics.is_none());
    }

    #[test]
    fn with_metrics_snapshots_status() {
        let m = Metrics { error_rate: 0.05, latency_p95: 220.0, throughput: 1200, errors_5xx: 0 };
        let r = Release::new("v1.0.1", "def4567").with_metrics(m, &Thresholds::default());
        assert_eq!(r.status, RiskStatus::Risky);
        assert_eq!(r.metrics, Some(m));
    }

    #[test]
    fn status_serializes_to_display_strings() {
        assert_eq!(serde_json::to_string(&RiskStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(serde_json::to_string(&RiskStatus::Risky).unwrap(), "\"RIESGOSO\"");
        assert_eq!(serde_json::to_string(&RiskStatus::Unknown).unwrap(), "\"DESCONOCIDO\"");
    }

    #[test]
    fn errors_5xx_defaults_to_zero() {
        let m: Metrics =
            serde_json::from_str(r#"{"error_rate":0.01,"latency_p95":100,"throughput":10}"#)
                .unwrap();
        assert_eq!(m.errors_5xx, 0);
        assert_eq!(m.throughput, 10);
    }

    #[test]
    fn whole_number_floats_are_accepted_for_counts() {
        let m: Metrics = serde_json::from_str(
            r#"{"error_rate":0.01,"latency_p95":100,"throughput":1200.0,"errors_5xx":3.0}"#,
        )
        .unwrap();
        assert_eq!(m.throughput, 1200);
        assert_eq!(m.errors_5xx, 3);
    }

    #[test]
    fn fractional_or_negative_counts_are_rejected() {
        for raw in [
            r#"{"error_rate":0.01,"latency_p95":100,"throughput":1200.5}"#,
            r#"{"error_rate":0.01,"latency_p95":100,"throughput":-1}"#,
            r#"{"error_rate":0.01,"latency_p95":100,"throughput":-1.0}"#,
            r#"{"error_rate":0.01,"latency_p95":100,"throughput":"1200"}"#,
            r#"{"error_rate":0.01,"latency_p95":100,"throughput":10,"errors_5xx":0.5}"#,
        ] {
            assert!(serde_json::from_str::<Metrics>(raw).is_err(), "accepted {raw}");
        }
    }
}
