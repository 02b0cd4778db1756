//! Workload emission estimation
//!
//! Converts a workload description (cores + memory) into an annual energy
//! figure, then combines it with per-region carbon intensity to produce a
//! ranked set of annual CO2 estimates.
//!
//! The power model is a fixed industry rule of thumb for a typical server:
//! 10 W per core and 2 W per GB of RAM, running 24/7 for a non-leap year.
//! The coefficients are part of the output contract and are not configurable.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Watts drawn per CPU core
pub const WATTS_PER_CORE: f64 = 10.0;
/// Watts drawn per GB of memory
pub const WATTS_PER_GB: f64 = 2.0;
/// Hours in a non-leap year, assuming continuous operation
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Accepted core count range
pub const CORES_RANGE: std::ops::RangeInclusive<u32> = 1..=128;
/// Accepted memory range in GB
pub const MEMORY_GB_RANGE: std::ops::RangeInclusive<u32> = 1..=1024;

/// A hypothetical compute workload to be placed in some grid region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of CPU cores (1-128)
    pub cores: u32,
    /// Memory in gigabytes (1-1024)
    pub memory_gb: u32,
}

impl WorkloadSpec {
    /// Check the workload against the accepted input ranges
    pub fn validate(&self) -> Result<()> {
        if !CORES_RANGE.contains(&self.cores) {
            return Err(Error::InvalidInput(format!(
                "cores must be between {} and {}, got {}",
                CORES_RANGE.start(),
                CORES_RANGE.end(),
                self.cores
            )));
        }
        if !MEMORY_GB_RANGE.contains(&self.memory_gb) {
            return Err(Error::InvalidInput(format!(
                "memory_gb must be between {} and {}, got {}",
                MEMORY_GB_RANGE.start(),
                MEMORY_GB_RANGE.end(),
                self.memory_gb
            )));
        }
        Ok(())
    }

    /// Continuous power draw in watts
    pub fn power_watts(&self) -> f64 {
        self.cores as f64 * WATTS_PER_CORE + self.memory_gb as f64 * WATTS_PER_GB
    }

    /// Energy consumed over one year of continuous operation, in kWh
    pub fn annual_kwh(&self) -> f64 {
        (self.power_watts() / 1000.0) * HOURS_PER_YEAR
    }
}

/// Annual CO2 estimate for one region
///
/// `annual_co2_kg` is kept unrounded so downstream numeric consumers (color
/// normalization, legend endpoints) do not compound rounding error. Use
/// [`EmissionResult::rounded_kg`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionResult {
    /// Region display name
    pub region: String,
    /// Annual CO2 in kilograms, unrounded
    pub annual_co2_kg: f64,
}

impl EmissionResult {
    /// Display value, rounded to 2 decimal places
    pub fn rounded_kg(&self) -> f64 {
        (self.annual_co2_kg * 100.0).round() / 100.0
    }
}

/// Estimate annual CO2 for the workload in every region present in
/// `intensities` (display name -> kgCO2/kWh)
///
/// Returns one result per map entry, ranked ascending by emissions (ties
/// broken by name so output order is deterministic). Regions absent from the
/// map are simply absent from the output; an empty map yields an empty
/// result set. Out-of-range workloads are rejected, not computed.
pub fn estimate(
    workload: &WorkloadSpec,
    intensities: &HashMap<String, f64>,
) -> Result<Vec<EmissionResult>> {
    workload.validate()?;

    let annual_kwh = workload.annual_kwh();

    let mut results: Vec<EmissionResult> = intensities
        .iter()
        .map(|(region, kg_per_kwh)| EmissionResult {
            region: region.clone(),
            annual_co2_kg: annual_kwh * kg_per_kwh,
        })
        .collect();

    results.sort_by(|a, b| {
        a.annual_co2_kg
            .total_cmp(&b.annual_co2_kg)
            .then_with(|| a.region.cmp(&b.region))
    });

    Ok(results)
}
