use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use crate::error::PlacesError;
use crate::models::coordinate::Coordinate;
use crate::models::place::{NearbySearchResponse, PlaceCandidate};
use crate::repositories::places_repo::PlacesRepo;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Clone, Serialize, Debug)]
struct GooglePlacesApiParams<'a> {
    location: String,
    radius: u32,
    keyword: &'a str,
    key: &'a str,
}

pub struct GooglePlacesRepo {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesRepo {
    pub fn new(
        http: Client,
        base_url: &str,
        api_key: String,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl PlacesRepo for GooglePlacesRepo {
    fn name(&self) -> &'static str {
        "google-places"
    }

    async fn nearby_search(
        &self,
        origin: Coordinate,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = format!("{}/nearbysearch/json", self.base_url);
        let params = GooglePlacesApiParams {
            location: format!("{},{}", origin.lat, origin.lon),
            radius: radius_meters,
            keyword,
            key: &self.api_key,
        };

        // The request URL carries the api key; keep it out of error text.
        let resp = self.http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PlacesError::Request(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PlacesError::HttpStatus(status));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| PlacesError::Request(e.without_url()))?;
        let candidates = parse_nearby_search(&body, keyword)?;
        debug!(keyword, results = candidates.len(), "nearby search completed");

        Ok(candidates)
    }
}

/// Decodes a Nearby Search payload. `OK` and `ZERO_RESULTS` are successes,
/// every other status is surfaced as a provider error. Only the first page is
/// read.
pub fn parse_nearby_search(
    body: &str,
    keyword: &str,
) -> Result<Vec<PlaceCandidate>, PlacesError> {
    let response: NearbySearchResponse = serde_json::from_str(body)?;

    match response.status.as_str() {
        "OK" | "ZERO_RESULTS" => Ok(response
            .results
            .into_iter()
            .map(|place| place.into_candidate(keyword))
            .collect()),
        _ => Err(PlacesError::Provider {
            status: response.status,
            message: response.error_message,
        }),
    }
}
