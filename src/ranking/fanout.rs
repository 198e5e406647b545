use std::time::Duration;
use futures::future::try_join_all;
use crate::error::ResourceError;
use crate::models::coordinate::Coordinate;
use crate::models::place::PlaceCandidate;
use crate::repositories::places_repo::PlacesRepo;

/// Runs one nearby search per keyword, concurrently, and concatenates the
/// results in keyword order. The first failing keyword fails the whole
/// fanout and drops the searches still in flight; so does the deadline.
pub async fn fan_out(
    places_repo: &dyn PlacesRepo,
    origin: Coordinate,
    radius_meters: u32,
    keywords: &[String],
    deadline: Duration,
) -> Result<Vec<PlaceCandidate>, ResourceError> {
    let searches = keywords.iter().map(|keyword| async move {
        places_repo
            .nearby_search(origin, radius_meters, keyword)
            .await
            .map_err(|source| ResourceError::Upstream {
                keyword: keyword.clone(),
                provider: places_repo.name(),
                source,
            })
    });

    let per_keyword = tokio::time::timeout(deadline, try_join_all(searches))
        .await
        .map_err(|_| ResourceError::Timeout(deadline))??;

    Ok(per_keyword.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use crate::error::PlacesError;

    struct DelayedRepo {
        delays_ms: HashMap<String, u64>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlacesRepo for DelayedRepo {
        fn name(&self) -> &'static str {
            "delayed"
        }

        async fn nearby_search(
            &self,
            _origin: Coordinate,
            _radius_meters: u32,
            keyword: &str,
        ) -> Result<Vec<PlaceCandidate>, PlacesError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.delays_ms.get(keyword).copied().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![PlaceCandidate {
                id: Some(format!("{keyword}-1")),
                name: keyword.to_string(),
                coordinate: Some(Coordinate::new(19.0, 72.0)),
                rating: None,
                keyword: keyword.to_string(),
            }])
        }
    }

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[tokio::test]
    async fn concatenates_in_keyword_order_not_completion_order() {
        let repo = DelayedRepo {
            delays_ms: HashMap::from([("seed store".to_string(), 40)]),
            calls: AtomicUsize::new(0),
        };

        let candidates = fan_out(
            &repo,
            Coordinate::new(19.0, 72.0),
            15_000,
            &keywords(&["seed store", "fertilizer store"]),
            Duration::from_secs(5),
        ).await.unwrap();

        let order: Vec<_> = candidates.iter().map(|c| c.keyword.as_str()).collect();
        assert_eq!(order, vec!["seed store", "fertilizer store"]);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn deadline_covers_whole_fanout() {
        let repo = DelayedRepo {
            delays_ms: HashMap::from([("pesticide shop".to_string(), 5_000)]),
            calls: AtomicUsize::new(0),
        };

        let res = fan_out(
            &repo,
            Coordinate::new(19.0, 72.0),
            15_000,
            &keywords(&["seed store", "pesticide shop"]),
            Duration::from_millis(50),
        ).await;

        assert!(matches!(res, Err(ResourceError::Timeout(_))));
    }
}
