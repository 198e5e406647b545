use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use anyhow::bail;
use clap::Parser;
use crate::ranking::SearchSettings;
use crate::repositories::google_places_repo::DEFAULT_PLACES_BASE_URL;

#[derive(Parser, Clone, Debug)]
#[clap(name = "farm-resources", about = "Ranks nearby agri stores for a farm location")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env = "BIND_HOST", long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated CORS origins, `*` for any.
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long)]
    pub google_maps_api_key: Option<String>,

    #[clap(env, long, default_value = DEFAULT_PLACES_BASE_URL)]
    pub places_base_url: String,

    #[clap(env, long, default_value_t = 15_000, value_parser = clap::value_parser!(u32).range(1..=50_000))]
    pub search_radius_meters: u32,

    #[clap(env, long, value_delimiter = ',', default_value = "seed store,fertilizer store,pesticide shop")]
    pub search_keywords: Vec<String>,

    #[clap(env, long, default_value_t = 10)]
    pub fanout_timeout_secs: u64,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Blank credentials count as absent.
    pub fn places_api_key(&self) -> Option<String> {
        self.google_maps_api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn search_settings(&self) -> anyhow::Result<SearchSettings> {
        let keywords: Vec<String> = self
            .search_keywords
            .iter()
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        if keywords.is_empty() {
            bail!("SEARCH_KEYWORDS must name at least one keyword");
        }

        Ok(SearchSettings {
            radius_meters: self.search_radius_meters,
            keywords,
            fanout_timeout: Duration::from_secs(self.fanout_timeout_secs),
        })
    }
}
