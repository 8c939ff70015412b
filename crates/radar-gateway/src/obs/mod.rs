//! Lightweight in-process metrics.
//!
//! Counters and gauges are stored as atomics and rendered by the `/metrics`
//! handler in Prometheus text format.

pub mod metrics;

pub use metrics::RadarMetrics;
