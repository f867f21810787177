//! Upstream collection API wire types and errors.

use client::net::types::RawArtwork;
use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the collection API.
#[derive(Debug, thiserror::Error)]
pub enum ArticError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request failed before a response arrived.
    #[error("API request failed: {0}")]
    Request(String),

    /// The API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// LIST RESPONSE
// =============================================================================

/// `GET /artworks` envelope. Only the fields the table needs are modeled.
#[derive(Debug, Deserialize)]
pub struct ArtworkListResponse {
    #[serde(default)]
    pub data: Vec<RawArtwork>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
}

impl ArtworkListResponse {
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.pagination.as_ref().and_then(|p| p.total)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
