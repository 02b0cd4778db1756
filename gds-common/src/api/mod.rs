//! Shared API types
//!
//! Request/response types exchanged between the gds-ui service and its
//! embedded web frontend.

pub mod types;

pub use types::{EstimateResponse, GenerationMixEntry, GenerationMixResponse, RegionEmission};
