//! In-process stand-in for the collection API used by async tests.

use std::collections::HashMap;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;

use crate::artic::ArticClient;
use crate::config::ServerConfig;

/// Serve `router` on an ephemeral port and return its `/api/v1` root.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

/// Upstream with `last_page` full pages of `limit` rows and the given total.
pub fn paged_upstream(last_page: u64, total: Option<u64>) -> Router {
    Router::new().route(
        "/api/v1/artworks",
        get(move |Query(q): Query<HashMap<String, String>>| async move {
            let page: u64 = q.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
            let limit: u64 = q.get("limit").and_then(|v| v.parse().ok()).unwrap_or(12);
            let data: Vec<serde_json::Value> = if page == 0 || page > last_page {
                Vec::new()
            } else {
                let start = (page - 1) * limit + 1;
                (start..start + limit)
                    .map(|id| {
                        serde_json::json!({
                            "id": id,
                            "title": format!("Artwork {id}"),
                            "place_of_origin": if id % 2 == 0 { serde_json::Value::Null } else { "France".into() },
                            "artist_display": "Anonymous",
                            "date_start": 1900,
                            "date_end": 0
                        })
                    })
                    .collect()
            };
            let pagination = match total {
                Some(t) => serde_json::json!({ "total": t, "limit": limit, "current_page": page }),
                None => serde_json::json!({ "limit": limit, "current_page": page }),
            };
            Json(serde_json::json!({ "pagination": pagination, "data": data, "fields": q.get("fields") }))
        }),
    )
}

/// Upstream that always answers with `status`.
pub fn failing_upstream(status: StatusCode) -> Router {
    Router::new().route("/api/v1/artworks", get(move || async move { (status, "upstream down").into_response() }))
}

/// Upstream that answers 200 with a body that is not JSON.
pub fn garbage_upstream() -> Router {
    Router::new().route("/api/v1/artworks", get(|| async { "<html>maintenance</html>" }))
}

pub fn client_for(base_url: &str) -> ArticClient {
    let config = ServerConfig { artic_base_url: base_url.to_string(), ..ServerConfig::default() };
    ArticClient::new(&config).unwrap()
}
