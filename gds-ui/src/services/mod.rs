//! External service clients

pub mod carbon_intensity_client;

pub use carbon_intensity_client::{CarbonIntensityClient, CiError};
