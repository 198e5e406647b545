use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::google_places_repo::GooglePlacesRepo;
use crate::repositories::places_repo::PlacesRepo;

pub mod config;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod ranking;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let search = config.search_settings()?;
    info!(
        environment = %config.environment,
        keywords = search.keywords.len(),
        radius_meters = search.radius_meters,
        "Starting farm resources service"
    );

    let places_repo: Option<Arc<dyn PlacesRepo>> = match config.places_api_key() {
        Some(api_key) => Some(Arc::new(GooglePlacesRepo::new(
            reqwest::Client::new(),
            &config.places_base_url,
            api_key,
        ))),
        None => {
            warn!("GOOGLE_MAPS_API_KEY is not set, /resources will answer with a configuration error");
            None
        }
    };

    controller::serve(
        AppState { places_repo, search },
        &config,
    ).await
}
