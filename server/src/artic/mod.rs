//! Art Institute of Chicago collection API client.
//!
//! DESIGN
//! ======
//! One shared `reqwest::Client` per process. Responses are normalized into
//! display records here so the browser receives ready-to-render rows and a
//! usable total.

pub mod types;

use std::time::Duration;

use client::net::types::{Artwork, ArtworksPage, effective_total};

use crate::config::ServerConfig;
use types::{ArticError, ArtworkListResponse};

/// Fields requested from `/artworks`; everything else is left upstream.
const ARTWORK_FIELDS: &str = "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

const USER_AGENT: &str = concat!("artworks-table/", env!("CARGO_PKG_VERSION"));

pub struct ArticClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArticClient {
    /// Build a client for the configured API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self, ArticError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ArticError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.artic_base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of artworks, normalized for display.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-200 status, or an
    /// unparseable body.
    pub async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworksPage, ArticError> {
        let url = format!("{}/artworks", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("fields", ARTWORK_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ArticError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ArticError::Request(e.to_string()))?;
        if status != 200 {
            return Err(ArticError::Status { status, body: text });
        }

        let parsed: ArtworkListResponse = serde_json::from_str(&text).map_err(|e| ArticError::Parse(e.to_string()))?;
        Ok(into_page(parsed, page, limit))
    }
}

fn into_page(parsed: ArtworkListResponse, page: u32, limit: u32) -> ArtworksPage {
    let total = effective_total(parsed.total());
    ArtworksPage { data: parsed.data.into_iter().map(Artwork::from_raw).collect(), total, page, limit }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
