use std::time::Duration;
use tracing::info;
use crate::error::ResourceError;
use crate::models::coordinate::Coordinate;
use crate::models::resource::RankedResource;
use crate::repositories::places_repo::PlacesRepo;

pub mod dedup;
pub mod distance;
pub mod fanout;
pub mod rank;

/// Fixed parameters of every ranking run.
#[derive(Clone, Debug)]
pub struct SearchSettings {
    pub radius_meters: u32,
    pub keywords: Vec<String>,
    pub fanout_timeout: Duration,
}

/// Fanout, first-seen deduplication, distance annotation and ranking for one
/// origin. Nothing is kept between runs.
pub async fn rank_nearby_resources(
    places_repo: &dyn PlacesRepo,
    origin: Coordinate,
    settings: &SearchSettings,
) -> Result<Vec<RankedResource>, ResourceError> {
    let candidates = fanout::fan_out(
        places_repo,
        origin,
        settings.radius_meters,
        &settings.keywords,
        settings.fanout_timeout,
    ).await?;
    let candidate_count = candidates.len();

    let unique = dedup::dedup_first_seen(candidates);
    let annotated = distance::annotate_distances(origin, unique);
    let ranked = rank::rank_by_distance(annotated);

    info!(
        lat = origin.lat,
        lon = origin.lon,
        candidates = candidate_count,
        resources = ranked.len(),
        "Ranked nearby resources"
    );

    Ok(ranked)
}
