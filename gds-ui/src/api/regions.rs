//! Region registry endpoint

use axum::Json;
use gds_common::regions::{self, Region};

/// GET /api/regions
///
/// The fixed set of selectable regions, in upstream id order.
pub async fn list_regions() -> Json<&'static [Region]> {
    Json(regions::all())
}
