//! API request/response types
//!
//! All mass values are kilograms, energy values kilowatt-hours, and fuel
//! percentages 0-100 (not fractions): the units the frontend displays
//! without further conversion.

use crate::estimate::WorkloadSpec;
use crate::heatmap::HeatmapLayout;
use serde::{Deserialize, Serialize};

/// One row of the ranked results table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionEmission {
    /// Region display name
    pub region: String,
    /// Annual CO2 in kilograms, unrounded
    pub annual_co2_kg: f64,
    /// Annual CO2 rounded to 2 decimal places for display
    pub display_kg: f64,
}

/// Response to `POST /api/estimate`
///
/// `results` is ranked ascending by emissions; `heatmap` is the colored
/// tile layout derived from the same result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResponse {
    /// Echo of the workload the estimate was computed for
    pub workload: WorkloadSpec,
    /// Ranked per-region estimates (lowest emissions first)
    pub results: Vec<RegionEmission>,
    /// Colored tile layout plus legend endpoints
    pub heatmap: HeatmapLayout,
}

/// One fuel source's share of a region's generation
///
/// Percentages are reported exactly as the upstream service returns them;
/// the set is not renormalized and is not guaranteed to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMixEntry {
    /// Fuel type, e.g. "wind", "gas", "nuclear"
    pub fuel: String,
    /// Share of generation, 0-100
    pub perc: f64,
}

/// Response to `GET /api/mix/:region`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationMixResponse {
    /// Region display name
    pub region: String,
    /// Upstream region id the mix was fetched for
    pub region_id: u16,
    /// Fuel breakdown as reported
    pub mix: Vec<GenerationMixEntry>,
}
