use async_trait::async_trait;
use crate::error::PlacesError;
use crate::models::coordinate::Coordinate;
use crate::models::place::PlaceCandidate;

/// A nearby-search backend. Implementations return candidates in the
/// provider's own order and treat pagination as their own business.
#[async_trait]
pub trait PlacesRepo: Send + Sync {
    fn name(&self) -> &'static str;

    async fn nearby_search(
        &self,
        origin: Coordinate,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError>;
}
