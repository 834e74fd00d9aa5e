//! Random-image provider client
//!
//! This service wraps the wallhaven search API: one GET against a fixed
//! search endpoint, pick one record uniformly at random, hand back its URL.
//! An empty result list, a non-success status or a malformed body is a
//! recoverable "no image" condition, not an error.

use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::ImageConfig;
use crate::utils::errors::Result;

/// Search API response structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<ImageRecord>,
}

/// One image record from the search API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageRecord {
    pub path: String,
}

/// Client for the random-image search API
#[derive(Debug, Clone)]
pub struct ImageService {
    client: Client,
    search_url: String,
}

impl ImageService {
    /// Create a new ImageService instance
    pub fn new(config: &ImageConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("SakuraBot/1.0")
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
        })
    }

    /// Fetch one random image URL from the search endpoint
    ///
    /// Returns `Ok(None)` when the provider has nothing usable; `Err` only
    /// for transport-level failures.
    pub async fn random_image(&self) -> Result<Option<Url>> {
        debug!(url = %self.search_url, "Fetching random image");

        let response = self.client.get(&self.search_url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Image search returned non-success status");
            return Ok(None);
        }

        let body = match response.json::<SearchResponse>().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Image search returned a malformed body");
                return Ok(None);
            }
        };

        let Some(record) = body.data.choose(&mut rand::thread_rng()) else {
            debug!("Image search returned no results");
            return Ok(None);
        };

        match Url::parse(&record.path) {
            Ok(url) => Ok(Some(url)),
            Err(e) => {
                warn!(path = %record.path, error = %e, "Image record has an unusable path");
                Ok(None)
            }
        }
    }
}
