//! Trail provider client.
//!
//! Resolves a trail ID to its name, map URL, and coordinates with a single
//! GET request authenticated by a query-parameter API key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::TrailInfo;

/// Source of trail metadata.
#[async_trait]
pub trait TrailProvider: Send + Sync {
    async fn lookup_trail(&self, trail_id: &str) -> Result<TrailInfo>;
}

/// HTTP client for the trail provider.
pub struct TrailClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TrailClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: crate::http::build_client(timeout).map_err(Error::TrailHttp)?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl TrailProvider for TrailClient {
    async fn lookup_trail(&self, trail_id: &str) -> Result<TrailInfo> {
        debug!(trail_id, url = %self.base_url, "requesting trail metadata");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("ids", trail_id), ("key", self.api_key.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            // The request URL carries the API key.
            .map_err(|e| Error::TrailHttp(e.without_url()))?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::TrailHttp(e.without_url()))?;
        let trail = parse_trail_response(trail_id, &body)?;

        info!(trail_id, name = %trail.name, lat = trail.lat, lon = trail.lon, "trail resolved");
        Ok(trail)
    }
}

#[derive(Debug, Deserialize)]
struct TrailsResponse {
    #[serde(default)]
    trails: Vec<TrailRecord>,
}

#[derive(Debug, Deserialize)]
struct TrailRecord {
    name: String,
    url: String,
    latitude: f64,
    longitude: f64,
}

/// Decode a provider response body and take its first trail.
pub fn parse_trail_response(trail_id: &str, body: &str) -> Result<TrailInfo> {
    let response: TrailsResponse = serde_json::from_str(body).map_err(Error::TrailResponse)?;
    let record = response
        .trails
        .into_iter()
        .next()
        .ok_or_else(|| Error::TrailNotFound {
            trail_id: trail_id.to_string(),
        })?;

    Ok(TrailInfo {
        name: record.name,
        url: record.url,
        lat: record.latitude,
        lon: record.longitude,
    })
}
