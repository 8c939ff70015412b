//! Release Radar gateway library entry.
//!
//! Wires config, the release store, and the HTTP surface around the
//! `radar-core` classifier. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
