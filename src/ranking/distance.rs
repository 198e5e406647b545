use tracing::warn;
use crate::models::coordinate::Coordinate;
use crate::ranking::dedup::KeyedCandidate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers.
///
/// `a` is clamped to [0, 1] so rounding near antipodal points cannot push
/// `asin` out of its domain.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = to.lat_radians() - from.lat_radians();
    let d_lon = to.lon_radians() - from.lon_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat_radians().cos() * to.lat_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedCandidate {
    pub keyed: KeyedCandidate,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}

/// Attaches the distance from `origin` to every candidate. Candidates
/// without a usable coordinate are dropped and logged.
pub fn annotate_distances(
    origin: Coordinate,
    candidates: Vec<KeyedCandidate>,
) -> Vec<AnnotatedCandidate> {
    candidates
        .into_iter()
        .filter_map(|keyed| match keyed.candidate.coordinate {
            Some(coordinate) if coordinate.is_valid() => Some(AnnotatedCandidate {
                distance_km: haversine_km(origin, coordinate),
                coordinate,
                keyed,
            }),
            _ => {
                warn!(
                    key = %keyed.key,
                    keyword = %keyed.candidate.keyword,
                    "Dropping place without a usable coordinate"
                );
                None
            }
        })
        .collect()
}
