use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use crate::controller::AppState;
use crate::error::ResourceError;
use crate::models::coordinate::Coordinate;
use crate::ranking::rank_nearby_resources;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/resources", get(get_nearby_resources))
        .route_layer(Extension(Arc::new(app_state)))
}

/// Raw query values; parsed by hand so bad input gets the structured error body.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct NearbyResourcesParam {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl NearbyResourcesParam {
    pub fn origin(&self) -> Result<Coordinate, ResourceError> {
        let (Some(lat), Some(lon)) = (parse_degrees(&self.lat), parse_degrees(&self.lon)) else {
            return Err(ResourceError::InvalidInput(
                "latitude and longitude are required: pass numeric lat and lon query parameters".to_string(),
            ));
        };

        let origin = Coordinate::new(lat, lon);
        if !origin.is_valid() {
            return Err(ResourceError::InvalidInput(format!(
                "lat must be within [-90, 90] and lon within [-180, 180], got {}, {}",
                lat, lon
            )));
        }
        if origin.is_unset() {
            return Err(ResourceError::InvalidInput(
                "lat and lon must not both be zero".to_string(),
            ));
        }

        Ok(origin)
    }
}

fn parse_degrees(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
}

pub async fn get_nearby_resources(
    Extension(app_state): Extension<Arc<AppState>>,
    query: Result<Query<NearbyResourcesParam>, QueryRejection>,
) -> impl IntoResponse {
    let origin = match query
        .map_err(|rejection| ResourceError::InvalidInput(format!(
            "latitude and longitude must be passed once each as lat and lon: {}",
            rejection
        )))
        .and_then(|Query(query)| query.origin())
    {
        Ok(origin) => origin,
        Err(e) => {
            warn!("Rejected nearby resources request: {}", e);
            return e.into_response();
        }
    };

    let Some(places_repo) = app_state.places_repo.as_ref() else {
        let e = ResourceError::MissingConfiguration(
            "GOOGLE_MAPS_API_KEY is not set, nearby search is unavailable".to_string(),
        );
        error!("{}", e);
        return e.into_response();
    };

    let ranked_res = rank_nearby_resources(
        places_repo.as_ref(),
        origin,
        &app_state.search,
    ).await;

    return match ranked_res {
        Ok(resources) => {
            (StatusCode::OK, Json(resources)).into_response()
        }
        Err(e) => {
            error!("Something went wrong ranking nearby resources due to: {}", e);
            e.into_response()
        }
    };
}
