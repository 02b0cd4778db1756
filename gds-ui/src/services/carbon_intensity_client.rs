//! Carbon Intensity API client
//!
//! Talks to the national Carbon Intensity API
//! (<https://carbon-intensity.github.io/api-definitions/>) for two lookups:
//! the bulk per-region forecast and a single region's generation mix.
//!
//! Each call is one round trip with no caching and no internal retry. The
//! forecast is live data, so two calls may legitimately observe different
//! values, and retry policy belongs to the caller.

use gds_common::api::types::GenerationMixEntry;
use gds_common::regions;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "gds-ui/0.1.0 (green datacenter selector)";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Carbon Intensity client errors
#[derive(Debug, Error)]
pub enum CiError {
    /// Transport failure or non-success HTTP status
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Response body did not have the expected shape
    #[error("Parse failed: {0}")]
    ParseFailed(String),
}

/// Bulk regional forecast response: `data[0].regions[]`
#[derive(Debug, Deserialize)]
struct RegionalResponse {
    data: Vec<RegionalSnapshot>,
}

#[derive(Debug, Deserialize)]
struct RegionalSnapshot {
    regions: Vec<RegionIntensity>,
}

#[derive(Debug, Deserialize)]
struct RegionIntensity {
    regionid: u16,
    intensity: Intensity,
}

#[derive(Debug, Deserialize)]
struct Intensity {
    /// Forecast carbon intensity in gCO2/kWh
    forecast: f64,
}

/// Single-region response: `data[0].data[0].generationmix[]`
#[derive(Debug, Deserialize)]
struct RegionResponse {
    data: Vec<RegionOuter>,
}

#[derive(Debug, Deserialize)]
struct RegionOuter {
    data: Vec<RegionSnapshot>,
}

#[derive(Debug, Deserialize)]
struct RegionSnapshot {
    generationmix: Vec<GenerationMixEntry>,
}

/// Carbon Intensity API client
pub struct CarbonIntensityClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CarbonIntensityClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CiError::FetchFailed(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current forecast intensity for every registered region
    ///
    /// Returns display name -> kgCO2/kWh (upstream reports grams; values
    /// are divided by 1000 here). Region ids the registry does not know,
    /// i.e. the aggregate reporting regions, are dropped silently; partial
    /// coverage is steady-state, not an error.
    pub async fn fetch_intensities(&self) -> Result<HashMap<String, f64>, CiError> {
        let url = format!("{}/regional", self.base_url);
        tracing::debug!(url = %url, "Fetching regional carbon intensities");

        let body = self.get_text(&url).await?;
        let intensities = parse_intensities(&body)?;

        tracing::info!(
            regions = intensities.len(),
            "Retrieved regional carbon intensities"
        );

        Ok(intensities)
    }

    /// Fetch the live generation mix for one region id
    ///
    /// The breakdown is returned exactly as reported: no renormalization,
    /// and no check that percentages sum to 100.
    pub async fn fetch_generation_mix(
        &self,
        region_id: u16,
    ) -> Result<Vec<GenerationMixEntry>, CiError> {
        let url = format!("{}/regional/regionid/{}", self.base_url, region_id);
        tracing::debug!(region_id = region_id, url = %url, "Fetching generation mix");

        let body = self.get_text(&url).await?;
        let mix = parse_generation_mix(&body)?;

        tracing::info!(region_id = region_id, fuels = mix.len(), "Retrieved generation mix");

        Ok(mix)
    }

    /// One GET round trip; non-2xx status is a fetch failure
    async fn get_text(&self, url: &str) -> Result<String, CiError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CiError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CiError::FetchFailed(format!(
                "API request failed with status {}",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| CiError::FetchFailed(e.to_string()))
    }
}

/// Parse the bulk regional response and join it against the region registry
fn parse_intensities(body: &str) -> Result<HashMap<String, f64>, CiError> {
    let response: RegionalResponse =
        serde_json::from_str(body).map_err(|e| CiError::ParseFailed(e.to_string()))?;

    let snapshot = response
        .data
        .first()
        .ok_or_else(|| CiError::ParseFailed("empty data array".to_string()))?;

    let mut intensities = HashMap::new();
    for region in &snapshot.regions {
        match regions::name_of(region.regionid) {
            Some(name) => {
                // Upstream unit is gCO2/kWh
                intensities.insert(name.to_string(), region.intensity.forecast / 1000.0);
            }
            None => {
                tracing::debug!(
                    regionid = region.regionid,
                    "Skipping unregistered region id"
                );
            }
        }
    }

    Ok(intensities)
}

/// Parse the single-region response down to its generation mix
fn parse_generation_mix(body: &str) -> Result<Vec<GenerationMixEntry>, CiError> {
    let response: RegionResponse =
        serde_json::from_str(body).map_err(|e| CiError::ParseFailed(e.to_string()))?;

    let mix = response
        .data
        .first()
        .and_then(|outer| outer.data.first())
        .map(|snapshot| snapshot.generationmix.clone())
        .ok_or_else(|| CiError::ParseFailed("empty data array".to_string()))?;

    Ok(mix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CarbonIntensityClient::new("https://api.carbonintensity.org.uk");
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_intensities_joins_registry() {
        let body = r#"{
            "data": [{
                "from": "2026-08-07T12:00Z",
                "to": "2026-08-07T12:30Z",
                "regions": [
                    {"regionid": 13, "shortname": "London",
                     "intensity": {"forecast": 150, "index": "moderate"}},
                    {"regionid": 1, "shortname": "North Scotland",
                     "intensity": {"forecast": 25, "index": "very low"}}
                ]
            }]
        }"#;

        let intensities = parse_intensities(body).unwrap();
        assert_eq!(intensities.len(), 2);
        assert_eq!(intensities["London"], 0.150);
        assert_eq!(intensities["North Scotland"], 0.025);
    }

    #[test]
    fn test_parse_intensities_drops_aggregate_regions() {
        // Region 15 is the England aggregate; not in the registry
        let body = r#"{
            "data": [{
                "regions": [
                    {"regionid": 13, "intensity": {"forecast": 150}},
                    {"regionid": 15, "intensity": {"forecast": 140}}
                ]
            }]
        }"#;

        let intensities = parse_intensities(body).unwrap();
        assert_eq!(intensities.len(), 1);
        assert!(intensities.contains_key("London"));
    }

    #[test]
    fn test_parse_intensities_empty_data() {
        let err = parse_intensities(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, CiError::ParseFailed(_)));
    }

    #[test]
    fn test_parse_intensities_missing_forecast() {
        let body = r#"{"data": [{"regions": [{"regionid": 13, "intensity": {}}]}]}"#;
        let err = parse_intensities(body).unwrap_err();
        assert!(matches!(err, CiError::ParseFailed(_)));
    }

    #[test]
    fn test_parse_intensities_not_json() {
        let err = parse_intensities("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CiError::ParseFailed(_)));
    }

    #[test]
    fn test_parse_generation_mix() {
        let body = r#"{
            "data": [{
                "regionid": 13,
                "shortname": "London",
                "data": [{
                    "from": "2026-08-07T12:00Z",
                    "to": "2026-08-07T12:30Z",
                    "generationmix": [
                        {"fuel": "wind", "perc": 38.2},
                        {"fuel": "gas", "perc": 24.9},
                        {"fuel": "nuclear", "perc": 17.4}
                    ]
                }]
            }]
        }"#;

        let mix = parse_generation_mix(body).unwrap();
        assert_eq!(mix.len(), 3);
        assert_eq!(mix[0].fuel, "wind");
        assert_eq!(mix[0].perc, 38.2);
    }

    #[test]
    fn test_parse_generation_mix_does_not_renormalize() {
        // Upstream data is imprecise; shares are passed through as-is
        let body = r#"{
            "data": [{"data": [{"generationmix": [
                {"fuel": "wind", "perc": 60.0},
                {"fuel": "gas", "perc": 60.0}
            ]}]}]
        }"#;

        let mix = parse_generation_mix(body).unwrap();
        let total: f64 = mix.iter().map(|entry| entry.perc).sum();
        assert_eq!(total, 120.0);
    }

    #[test]
    fn test_parse_generation_mix_empty_data() {
        let err = parse_generation_mix(r#"{"data": [{"data": []}]}"#).unwrap_err();
        assert!(matches!(err, CiError::ParseFailed(_)));

        let err = parse_generation_mix(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, CiError::ParseFailed(_)));
    }
}
