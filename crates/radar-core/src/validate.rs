//! Shape and range validation for inbound release submissions.
//!
//! Runs before any state is touched; a draft that passes can be turned into a
//! [`Release`] without further checks.

use serde::Deserialize;

use crate::error::{RadarError, Result};
use crate::model::{Metrics, Release};
use crate::thresholds::Thresholds;

pub const COMMIT_MIN_LEN: usize = 7;
pub const COMMIT_MAX_LEN: usize = 40;

/// Release submission as received from a client.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseDraft {
    pub version: String,
    pub commit: String,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

impl ReleaseDraft {
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(RadarError::Validation("version must not be empty".into()));
        }

        let commit_len = self.commit.chars().count();
        if !(COMMIT_MIN_LEN..=COMMIT_MAX_LEN).contains(&commit_len) {
            return Err(RadarError::Validation(format!(
                "commit must be between {COMMIT_MIN_LEN} and {COMMIT_MAX_LEN} characters (got {commit_len})"
            )));
        }

        if let Some(m) = &self.metrics {
            validate_metrics(m)?;
        }
        Ok(())
    }

    /// Validate and build the release, classifying eagerly when metrics are present.
    pub fn into_release(self, thresholds: &Thresholds) -> Result<Release> {
        self.validate()?;
        let release = Release::new(self.version, self.commit);
        Ok(match self.metrics {
            Some(m) => release.with_metrics(m, thresholds),
            None => release,
        })
    }
}

/// Range checks for metrics. Integer fields are unsigned, so only the float
/// fields need explicit bounds.
pub fn validate_metrics(m: &Metrics) -> Result<()> {
    if !m.error_rate.is_finite() || !(0.0..=1.0).contains(&m.error_rate) {
        return Err(RadarError::Validation(format!(
            "metrics.error_rate must be between 0 and 1 (got {})",
            m.error_rate
        )));
    }
    if !m.latency_p95.is_finite() || m.latency_p95 < 0.0 {
        return Err(RadarError::Validation(format!(
            "metrics.latency_p95 must be >= 0 (got {})",
            m.latency_p95
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ClientCode;
    use crate::model::RiskStatus;

    fn draft(version: &str, commit: &str, metrics: Option<Metrics>) -> ReleaseDraft {
        ReleaseDraft {
            version: version.into(),
            commit: commit.into(),
            metrics,
        }
    }

    fn ok_metrics() -> Metrics {
        Metrics {
            error_rate: 0.005,
            latency_p95: 220.0,
            throughput: 1200,
            errors_5xx: 0,
        }
    }

    #[test]
    fn accepts_minimal_draft() {
        assert!(draft("v1.0.0", "abc1234", None).validate().is_ok());
    }

    #[test]
    fn rejects_empty_version_only() {
        let err = draft("", "abc1234", None).validate().unwrap_err();
        assert_eq!(err.client_code(), ClientCode::ValidationFailed);
        assert!(draft("   ", "abc1234", None).validate().is_ok());
    }

    #[test]
    fn commit_length_bounds() {
        assert!(draft("v1", "abc123", None).validate().is_err());
        assert!(draft("v1", "abc1234", None).validate().is_ok());
        assert!(draft("v1", &"a".repeat(40), None).validate().is_ok());
        assert!(draft("v1", &"a".repeat(41), None).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_metrics() {
        let too_high = Metrics { error_rate: 1.5, ..ok_metrics() };
        let negative_latency = Metrics { latency_p95: -1.0, ..ok_metrics() };
        let nan_rate = Metrics { error_rate: f64::NAN, ..ok_metrics() };
        assert!(validate_metrics(&too_high).is_err());
        assert!(validate_metrics(&negative_latency).is_err());
        assert!(validate_metrics(&nan_rate).is_err());
        assert!(validate_metrics(&Metrics { error_rate: 1.0, ..ok_metrics() }).is_ok());
    }

    #[test]
    fn into_release_classifies_when_metrics_present() {
        let t = Thresholds::default();
        let with = draft("v1.0.0", "abc1234", Some(ok_metrics())).into_release(&t).unwrap();
        assert_eq!(with.status, RiskStatus::Ok);

        let without = draft("v1.0.1", "abc1234", None).into_release(&t).unwrap();
        assert_eq!(without.status, RiskStatus::Unknown);
    }

    #[test]
    fn negative_counts_fail_to_deserialize() {
        let raw = r#"{"version":"v1","commit":"abc1234","metrics":{"error_rate":0.1,"latency_p95":1,"throughput":-5}}"#;
        assert!(serde_json::from_str::<ReleaseDraft>(raw).is_err());
    }
}
