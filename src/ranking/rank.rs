use reqwest::Url;
use crate::models::coordinate::Coordinate;
use crate::models::resource::{RankedResource, ResourceCategory};
use crate::ranking::distance::AnnotatedCandidate;

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Stable ascending sort by distance; equal distances keep their input order.
pub fn rank_by_distance(mut annotated: Vec<AnnotatedCandidate>) -> Vec<RankedResource> {
    annotated.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    annotated
        .into_iter()
        .map(|a| RankedResource {
            directions_url: directions_url(a.coordinate, a.keyed.candidate.id.as_deref()),
            category: ResourceCategory::from_keyword(&a.keyed.candidate.keyword),
            id: a.keyed.key,
            name: a.keyed.candidate.name,
            distance_km: a.distance_km,
            rating: a.keyed.candidate.rating,
        })
        .collect()
}

pub fn directions_url(destination: Coordinate, place_id: Option<&str>) -> String {
    let mut params = vec![
        ("api", "1".to_string()),
        ("destination", format!("{},{}", destination.lat, destination.lon)),
    ];
    if let Some(place_id) = place_id {
        params.push(("destination_place_id", place_id.to_string()));
    }

    match Url::parse_with_params(DIRECTIONS_BASE_URL, &params) {
        Ok(url) => url.to_string(),
        Err(_) => DIRECTIONS_BASE_URL.to_string(),
    }
}
