//! Release storage.
//!
//! Stores are plain data structures with no internal locking; `AppState`
//! serializes access through one lock around the whole store.

use std::collections::HashMap;

use radar_core::error::{RadarError, Result};
use radar_core::Release;

use crate::config::StorageKind;

/// Version-keyed release storage.
pub trait ReleaseStore: Send + Sync {
    /// Insert or overwrite by version. Uniqueness is the caller's job.
    fn save(&mut self, release: Release) -> Release;
    fn get(&self, version: &str) -> Option<Release>;
    /// All releases, newest first.
    fn list(&self) -> Vec<Release>;
    /// Returns whether the version existed.
    fn delete(&mut self, version: &str) -> bool;
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the store selected by configuration.
pub fn from_kind(kind: StorageKind) -> Result<Box<dyn ReleaseStore>> {
    match kind {
        StorageKind::Memory => Ok(Box::new(InMemoryReleaseStore::new())),
        StorageKind::Sqlite => Err(RadarError::Internal(
            "sqlite storage backend is not implemented".into(),
        )),
    }
}

#[derive(Debug, Default)]
pub struct InMemoryReleaseStore {
    releases: HashMap<String, Release>,
}

impl InMemoryReleaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReleaseStore for InMemoryReleaseStore {
    fn save(&mut self, release: Release) -> Release {
        self.releases.insert(release.version.clone(), release.clone());
        release
    }

    fn get(&self, version: &str) -> Option<Release> {
        self.releases.get(version).cloned()
    }

    fn list(&self) -> Vec<Release> {
        let mut out: Vec<Release> = self.releases.values().cloned().collect();
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        out
    }

    fn delete(&mut self, version: &str) -> bool {
        self.releases.remove(version).is_some()
    }

    fn clear(&mut self) {
        self.releases.clear();
    }

    fn len(&self) -> usize {
        self.releases.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use radar_core::{Metrics, RiskStatus, Thresholds};

    use super::*;

    fn release_at(version: &str, secs: i64) -> Release {
        let mut r = Release::new(version, "abc1234");
        r.timestamp = Utc.timestamp_opt(secs, 0).single().unwrap_or_else(Utc::now);
        r
    }

    #[test]
    fn save_then_get_returns_equivalent_record() {
        let mut store = InMemoryReleaseStore::new();
        let m = Metrics { error_rate: 0.01, latency_p95: 120.0, throughput: 1500, errors_5xx: 3 };
        let r = Release::new("v1.0.0", "abc1234").with_metrics(m, &Thresholds::default());
        store.save(r.clone());
        assert_eq!(store.get("v1.0.0"), Some(r));
        assert_eq!(store.get("v2.0.0"), None);
    }

    #[test]
    fn list_is_newest_first() {
        let mut store = InMemoryReleaseStore::new();
        store.save(release_at("A", 1));
        store.save(release_at("B", 2));
        let versions: Vec<String> = store.list().into_iter().map(|r| r.version).collect();
        assert_eq!(versions, vec!["B", "A"]);
    }

    #[test]
    fn save_overwrites_same_version() {
        let mut store = InMemoryReleaseStore::new();
        store.save(release_at("v1", 1));
        let mut replacement = release_at("v1", 5);
        replacement.status = RiskStatus::Ok;
        store.save(replacement);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("v1").map(|r| r.status), Some(RiskStatus::Ok));
    }

    #[test]
    fn delete_reports_existence() {
        let mut store = InMemoryReleaseStore::new();
        store.save(release_at("v1", 1));
        assert!(store.delete("v1"));
        assert!(store.get("v1").is_none());
        assert!(!store.delete("v1"));
    }

    #[test]
    fn clear_empties_store() {
        let mut store = InMemoryReleaseStore::new();
        store.save(release_at("v1", 1));
        store.save(release_at("v2", 2));
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn only_memory_backend_is_available() {
        assert!(from_kind(StorageKind::Memory).is_ok());
        assert!(from_kind(StorageKind::Sqlite).is_err());
    }
}
