//! Release HTTP surface: DTOs and handlers.

pub mod dto;
pub mod releases;

pub use dto::{AnalysisResponse, ReleaseResponse};
