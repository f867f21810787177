//! Artworks proxy route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::ArtworksPage;
use client::state::table::PAGE_SIZE;
use serde::Deserialize;

use crate::artic::types::ArticError;
use crate::state::AppState;

/// Largest page the collection API serves.
pub const MAX_LIMIT: u32 = 100;

/// Characters of an upstream error body kept in the log line.
const BODY_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct ArtworksQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ArtworksQuery {
    /// Resolve defaults and clamp into the range the upstream accepts.
    #[must_use]
    pub fn normalized(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(PAGE_SIZE).clamp(1, MAX_LIMIT);
        (page, limit)
    }
}

/// `GET /api/artworks?page=&limit=` — one page of display-ready artworks.
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(query): Query<ArtworksQuery>,
) -> Result<Json<ArtworksPage>, StatusCode> {
    let (page, limit) = query.normalized();
    match state.artic.fetch_page(page, limit).await {
        Ok(body) => {
            tracing::debug!(page, limit, rows = body.data.len(), total = body.total, "artworks page served");
            Ok(Json(body))
        }
        Err(e) => {
            tracing::warn!(
                page,
                limit,
                error = %e,
                upstream_body = upstream_body_excerpt(&e).unwrap_or_default(),
                "artworks upstream request failed"
            );
            Err(artic_error_to_status(&e))
        }
    }
}

/// Leading part of the body returned with a non-success upstream status.
pub(crate) fn upstream_body_excerpt(err: &ArticError) -> Option<&str> {
    let ArticError::Status { body, .. } = err else {
        return None;
    };
    let end = body.char_indices().nth(BODY_EXCERPT_CHARS).map_or(body.len(), |(i, _)| i);
    Some(&body[..end])
}

pub(crate) fn artic_error_to_status(err: &ArticError) -> StatusCode {
    match err {
        ArticError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ArticError::Request(_) | ArticError::Status { .. } | ArticError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "artworks_test.rs"]
mod tests;
