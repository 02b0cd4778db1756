//! Generation mix endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use gds_common::api::types::GenerationMixResponse;
use gds_common::regions;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/mix/:region
///
/// Resolves the display name through the region registry first (an unknown
/// name is a 404 and never reaches the network), then fetches the live fuel
/// breakdown for the resolved region id. Independent of any in-flight
/// estimate: a failure here leaves previously computed results untouched.
pub async fn generation_mix(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> ApiResult<Json<GenerationMixResponse>> {
    let region_id = regions::id_of(&region)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown region: {}", region)))?;

    let mix = state.carbon_client.fetch_generation_mix(region_id).await?;

    Ok(Json(GenerationMixResponse {
        region,
        region_id,
        mix,
    }))
}
