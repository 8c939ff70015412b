//! Shared application state for the Release Radar gateway.
//!
//! Owns the config, the release store, and metrics. The store sits behind a
//! single `RwLock`: the duplicate check and the insert of a new release happen
//! under one write guard, so two concurrent submissions of the same version
//! cannot both succeed.

use std::sync::Arc;

use tokio::sync::RwLock;

use radar_core::classifier::{classify, score, Classification};
use radar_core::error::{RadarError, Result};
use radar_core::validate::ReleaseDraft;
use radar_core::{Release, Thresholds};

use crate::config::RadarConfig;
use crate::obs::RadarMetrics;
use crate::store::{self, ReleaseStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<RwLock<Box<dyn ReleaseStore>>>,
}

struct AppStateInner {
    cfg: RadarConfig,
    metrics: RadarMetrics,
}

/// Result of re-running the classifier against a stored release.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub release: Release,
    pub classification: Classification,
    pub risk_score: Option<f64>,
}

impl AppState {
    /// Build state with the store selected by `cfg.storage`.
    pub fn new(cfg: RadarConfig) -> Result<Self> {
        cfg.validate()?;
        let store = store::from_kind(cfg.storage.kind)?;
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an explicit store (tests, embedding).
    pub fn with_store(cfg: RadarConfig, store: Box<dyn ReleaseStore>) -> Self {
        let metrics = RadarMetrics::default();
        metrics.releases_stored.set(store.len() as i64);
        Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn cfg(&self) -> &RadarConfig {
        &self.inner.cfg
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.inner.cfg.thresholds
    }

    pub fn metrics(&self) -> &RadarMetrics {
        &self.inner.metrics
    }

    /// Validate, reject duplicates, classify, and store a new release.
    pub async fn create_release(&self, draft: ReleaseDraft) -> Result<Release> {
        let release = draft.into_release(self.thresholds())?;

        let mut store = self.store.write().await;
        if store.get(&release.version).is_some() {
            return Err(RadarError::release_exists(&release.version));
        }
        let saved = store.save(release);
        self.inner.metrics.releases_stored.set(store.len() as i64);
        drop(store);

        self.inner
            .metrics
            .releases_created
            .inc(&[("status", saved.status.as_str())]);
        tracing::info!(version = %saved.version, status = %saved.status, "release created");
        Ok(saved)
    }

    pub async fn get_release(&self, version: &str) -> Result<Release> {
        self.store
            .read()
            .await
            .get(version)
            .ok_or_else(|| RadarError::release_not_found(version))
    }

    pub async fn list_releases(&self) -> Vec<Release> {
        self.store.read().await.list()
    }

    pub async fn delete_release(&self, version: &str) -> Result<()> {
        let mut store = self.store.write().await;
        if !store.delete(version) {
            return Err(RadarError::release_not_found(version));
        }
        self.inner.metrics.releases_stored.set(store.len() as i64);
        drop(store);

        tracing::info!(%version, "release deleted");
        Ok(())
    }

    /// Classify the stored metrics against the current thresholds.
    ///
    /// The result can differ from the status snapshotted at creation.
    pub async fn analyze(&self, version: &str) -> Result<Analysis> {
        let release = self.get_release(version).await?;
        let thresholds = self.thresholds();

        let (classification, risk_score) = match &release.metrics {
            Some(m) => (classify(m, thresholds), Some(score(m, thresholds))),
            None => (Classification::unknown(), None),
        };

        self.inner
            .metrics
            .analyses
            .inc(&[("status", classification.status.as_str())]);
        tracing::debug!(
            %version,
            status = %classification.status,
            reasons = ?classification.reasons,
            "release analyzed"
        );

        Ok(Analysis {
            release,
            classification,
            risk_score,
        })
    }

    /// Count an error response by its client code.
    pub fn record_error(&self, err: &RadarError) {
        self.inner
            .metrics
            .request_errors
            .inc(&[("code", err.client_code().as_str())]);
    }
}
