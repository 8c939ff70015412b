//! Response bodies for the release endpoints.
//!
//! Request bodies reuse `radar_core::validate::ReleaseDraft`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use radar_core::{Metrics, Release, RiskStatus};

use crate::app_state::Analysis;

#[derive(Debug, Clone, Serialize)]
pub struct ReleaseResponse {
    pub version: String,
    pub commit: String,
    pub timestamp: DateTime<Utc>,
    pub status: RiskStatus,
    pub metrics: Option<Metrics>,
}

impl From<Release> for ReleaseResponse {
    fn from(r: Release) -> Self {
        Self {
            version: r.version,
            commit: r.commit,
            timestamp: r.timestamp,
            status: r.status,
            metrics: r.metrics,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub version: String,
    pub status: RiskStatus,
    pub metrics: Option<Metrics>,
    pub reasons: Vec<String>,
    /// 0..=100, `null` when the release has no metrics.
    pub risk_score: Option<f64>,
}

impl From<Analysis> for AnalysisResponse {
    fn from(a: Analysis) -> Self {
        Self {
            version: a.release.version,
            status: a.classification.status,
            metrics: a.release.metrics,
            reasons: a.classification.reasons,
            risk_score: a.risk_score,
        }
    }
}
