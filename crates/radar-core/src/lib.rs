//! Release Radar core: release model, thresholds, and the risk classifier.
//!
//! This crate holds everything that decides whether a release is risky. It
//! carries no transport or runtime dependencies so the classifier can be
//! exercised directly from tests, the gateway, or offline tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `RadarError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classifier;
pub mod error;
pub mod model;
pub mod thresholds;
pub mod validate;

/// Shared result type.
pub use error::{Result, RadarError};

pub use classifier::{classify, score, Classification};
pub use model::{Metrics, Release, RiskStatus};
pub use thresholds::Thresholds;
