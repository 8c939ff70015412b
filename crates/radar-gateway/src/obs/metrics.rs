//! Minimal metrics registry for the gateway.
//!
//! Labels are flattened into sorted key vectors to keep deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Single unlabeled gauge.
#[derive(Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} gauge", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

/// Gateway-wide metrics.
#[derive(Default)]
pub struct RadarMetrics {
    /// Releases created, by status at creation.
    pub releases_created: CounterVec,
    /// Analysis calls, by computed status.
    pub analyses: CounterVec,
    /// Error responses, by client code.
    pub request_errors: CounterVec,
    pub releases_stored: Gauge,
}

impl RadarMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.releases_created
            .render("radar_releases_created_total", &mut out);
        self.analyses.render("radar_analyses_total", &mut out);
        self.request_errors
            .render("radar_request_errors_total", &mut out);
        self.releases_stored.render("radar_releases_stored", &mut out);
        out
    }
}
