//! Top-level facade crate for Release Radar.
//!
//! Re-exports the classifier core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use radar_core::*;
}

pub mod gateway {
    pub use radar_gateway::*;
}
