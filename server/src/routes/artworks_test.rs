use axum::http::StatusCode;

use super::*;
use crate::test_support::{client_for, failing_upstream, paged_upstream, spawn_upstream};

// =============================================================
// Query normalization
// =============================================================

#[test]
fn normalized_defaults_to_first_page_of_twelve() {
    assert_eq!(ArtworksQuery::default().normalized(), (1, 12));
}

#[test]
fn normalized_clamps_page_and_limit() {
    let q = ArtworksQuery { page: Some(0), limit: Some(500) };
    assert_eq!(q.normalized(), (1, MAX_LIMIT));
    let q = ArtworksQuery { page: Some(7), limit: Some(0) };
    assert_eq!(q.normalized(), (7, 1));
}

#[test]
fn artic_error_to_status_maps_upstream_failures_to_bad_gateway() {
    let err = ArticError::Status { status: 500, body: String::new() };
    assert_eq!(artic_error_to_status(&err), StatusCode::BAD_GATEWAY);
    assert_eq!(artic_error_to_status(&ArticError::Request("reset".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(artic_error_to_status(&ArticError::Parse("eof".into())), StatusCode::BAD_GATEWAY);
}

#[test]
fn artic_error_to_status_maps_client_build_to_internal_error() {
    let err = ArticError::HttpClientBuild("tls".into());
    assert_eq!(artic_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn upstream_body_excerpt_reads_status_body() {
    let err = ArticError::Status { status: 503, body: "upstream down".into() };
    assert_eq!(upstream_body_excerpt(&err), Some("upstream down"));
    assert_eq!(upstream_body_excerpt(&ArticError::Request("reset".into())), None);
}

#[test]
fn upstream_body_excerpt_truncates_long_bodies_on_char_boundary() {
    let body = "é".repeat(BODY_EXCERPT_CHARS + 50);
    let err = ArticError::Status { status: 500, body };
    let excerpt = upstream_body_excerpt(&err).unwrap();
    assert_eq!(excerpt.chars().count(), BODY_EXCERPT_CHARS);
}

// =============================================================
// Handler
// =============================================================

#[tokio::test]
async fn list_artworks_returns_normalized_page() {
    let base = spawn_upstream(paged_upstream(3, Some(36))).await;
    let state = AppState::new(client_for(&base));

    let Json(body) = list_artworks(State(state), Query(ArtworksQuery { page: Some(3), limit: None }))
        .await
        .unwrap();
    assert_eq!(body.page, 3);
    assert_eq!(body.limit, 12);
    assert_eq!(body.total, 36);
    assert_eq!(body.data.first().map(|a| a.id), Some(25));
}

#[tokio::test]
async fn list_artworks_reports_bad_gateway_on_upstream_failure() {
    let base = spawn_upstream(failing_upstream(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let state = AppState::new(client_for(&base));

    let status = list_artworks(State(state), Query(ArtworksQuery::default())).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
