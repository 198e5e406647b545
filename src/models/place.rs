use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};
use crate::models::coordinate::Coordinate;

/// One entry of a Nearby Search `results` array. Every field the provider
/// may omit is optional here and resolved in [`NearbyPlace::into_candidate`];
/// a malformed field reads as absent instead of failing the whole payload.
#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub struct NearbyPlace {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub struct Geometry {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub location: Option<Location>,
}

#[serde_as]
#[derive(Clone, Copy, Deserialize, Debug)]
pub struct Location {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
    pub error_message: Option<String>,
}

/// A raw place returned by one keyword search, possibly duplicated across
/// keywords.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceCandidate {
    pub id: Option<String>,
    pub name: String,
    pub coordinate: Option<Coordinate>,
    pub rating: Option<f64>,
    pub keyword: String,
}

impl NearbyPlace {
    pub fn into_candidate(self, keyword: &str) -> PlaceCandidate {
        let id = self
            .place_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        let coordinate = self
            .geometry
            .and_then(|geometry| geometry.location)
            .and_then(|location| match (location.lat, location.lng) {
                (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
                _ => None,
            });
        let rating = self
            .rating
            .filter(|rating| rating.is_finite() && (0.0..=5.0).contains(rating));

        PlaceCandidate {
            id,
            name: self.name.unwrap_or_default(),
            coordinate,
            rating,
            keyword: keyword.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_result() {
        let place: NearbyPlace = serde_json::from_str(
            r#"{
                "place_id": "ChIJ123",
                "name": "GreenField Seeds",
                "rating": 4.4,
                "vicinity": "Andheri East",
                "geometry": { "location": { "lat": 19.1, "lng": 72.9 } }
            }"#,
        )
        .unwrap();

        let candidate = place.into_candidate("seed store");
        assert_eq!(candidate.id.as_deref(), Some("ChIJ123"));
        assert_eq!(candidate.name, "GreenField Seeds");
        assert_eq!(candidate.coordinate, Some(Coordinate::new(19.1, 72.9)));
        assert_eq!(candidate.rating, Some(4.4));
        assert_eq!(candidate.keyword, "seed store");
    }

    #[test]
    fn blank_id_and_missing_geometry_become_absent() {
        let place: NearbyPlace =
            serde_json::from_str(r#"{ "place_id": "  ", "name": "Somewhere" }"#).unwrap();

        let candidate = place.into_candidate("pesticide shop");
        assert_eq!(candidate.id, None);
        assert_eq!(candidate.coordinate, None);
        assert_eq!(candidate.rating, None);
    }

    #[test]
    fn half_a_location_is_no_coordinate() {
        let place: NearbyPlace = serde_json::from_str(
            r#"{ "place_id": "x", "geometry": { "location": { "lat": 19.2 } } }"#,
        )
        .unwrap();

        let candidate = place.into_candidate("seed store");
        assert_eq!(candidate.id.as_deref(), Some("x"));
        assert_eq!(candidate.coordinate, None);
    }

    #[test]
    fn out_of_scale_rating_is_dropped() {
        let place: NearbyPlace =
            serde_json::from_str(r#"{ "place_id": "x", "rating": 7.5 }"#).unwrap();

        assert_eq!(place.into_candidate("seed store").rating, None);
    }
}
