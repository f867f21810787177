//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the table only loads
//! data once hydrated in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `fetch_artworks` surfaces failures as `Result`; `load_page` logs them and
//! degrades to an empty page so the table never crashes on a bad response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Artwork, ArtworksPage};

#[cfg(any(test, feature = "hydrate"))]
fn artworks_endpoint(page: u32, limit: u32) -> String {
    format!("/api/artworks?page={page}&limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn artworks_request_failed_message(status: u16) -> String {
    format!("artworks request failed: {status}")
}

fn fetch_failed_log_line(error: &str) -> String {
    format!("Error fetching artworks data: {error}")
}

/// Fetch one page of artworks from `/api/artworks`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_artworks(page: u32, limit: u32) -> Result<ArtworksPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = artworks_endpoint(page, limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(artworks_request_failed_message(resp.status()));
        }
        resp.json::<ArtworksPage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        Err("not available on server".to_owned())
    }
}

/// Load a page for display. Failures are logged and yield no rows and no total.
pub async fn load_page(page: u32, limit: u32) -> (Vec<Artwork>, Option<u64>) {
    match fetch_artworks(page, limit).await {
        Ok(body) => (body.data, Some(body.total)),
        Err(e) => {
            leptos::logging::error!("{}", fetch_failed_log_line(&e));
            (Vec::new(), None)
        }
    }
}
