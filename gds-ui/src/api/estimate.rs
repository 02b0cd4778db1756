//! Workload emission estimate endpoint

use axum::{extract::State, Json};
use gds_common::api::types::{EstimateResponse, RegionEmission};
use gds_common::{estimate, heatmap, WorkloadSpec};
use tracing::info;

use crate::error::ApiResult;
use crate::AppState;

/// POST /api/estimate
///
/// Body: a workload spec `{cores, memory_gb}`. Fetches the live regional
/// forecast, estimates annual CO2 per region, and returns the ranked
/// results together with the colored heatmap layout. The intensity fetch
/// happens after validation so a bad workload never costs a network round
/// trip.
pub async fn estimate(
    State(state): State<AppState>,
    Json(workload): Json<WorkloadSpec>,
) -> ApiResult<Json<EstimateResponse>> {
    workload.validate()?;

    let intensities = state.carbon_client.fetch_intensities().await?;
    let results = estimate::estimate(&workload, &intensities)?;
    let heatmap = heatmap::layout(&results);

    info!(
        cores = workload.cores,
        memory_gb = workload.memory_gb,
        regions = results.len(),
        "Computed emission estimates"
    );

    let results = results
        .iter()
        .map(|r| RegionEmission {
            region: r.region.clone(),
            annual_co2_kg: r.annual_co2_kg,
            display_kg: r.rounded_kg(),
        })
        .collect();

    Ok(Json(EstimateResponse {
        workload,
        results,
        heatmap,
    }))
}
