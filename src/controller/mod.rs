use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::ranking::SearchSettings;
use crate::repositories::places_repo::PlacesRepo;

pub mod health_check;
pub mod resources_controller;

/// Shared, read-only inputs of every router. `places_repo` is `None` when no
/// provider credential was configured.
#[derive(Clone)]
pub struct AppState {
    pub places_repo: Option<Arc<dyn PlacesRepo>>,
    pub search: SearchSettings,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins = allowed_origins(&config.origin_urls)?;

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        );

    let addr = config.socket_addr();
    info!("API server listening on: {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(resources_controller::router(app_state))
        .fallback(page_not_found_handler)
}

fn allowed_origins(origin_urls: &str) -> anyhow::Result<AllowOrigin> {
    if origin_urls.trim() == "*" {
        return Ok(AllowOrigin::any());
    }

    let origins = origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", s))
        })
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    Ok(AllowOrigin::list(origins))
}
