//! Tunable classification limits.

use serde::Deserialize;

/// Ceiling for 5xx responses. Fixed, unlike the configurable limits.
pub const ERRORS_5XX_MAX: u64 = 50;

/// Limits a release's metrics are measured against.
///
/// Read-only while requests are being served; passed explicitly into the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    /// Error-rate ceiling as a fraction (0.02 = 2%).
    #[serde(default = "default_error_rate_threshold")]
    pub error_rate_threshold: f64,
    /// Latency p95 ceiling in milliseconds.
    #[serde(default = "default_latency_p95_threshold")]
    pub latency_p95_threshold: f64,
    /// Throughput floor in requests per second.
    #[serde(default = "default_throughput_min")]
    pub throughput_min: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            error_rate_threshold: default_error_rate_threshold(),
            latency_p95_threshold: default_latency_p95_threshold(),
            throughput_min: default_throughput_min(),
        }
    }
}

impl Thresholds {
    pub fn errors_5xx_max(&self) -> u64 {
        ERRORS_5XX_MAX
    }
}

fn default_error_rate_threshold() -> f64 {
    0.02
}
fn default_latency_p95_threshold() -> f64 {
    300.0
}
fn default_throughput_min() -> u64 {
    1000
}
