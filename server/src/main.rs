#![recursion_limit = "256"]

mod artic;
mod config;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let artic = artic::ArticClient::new(&config).expect("upstream HTTP client init failed");
    tracing::info!(base_url = artic.base_url(), "collection API client initialized");

    let state = state::AppState::new(artic);
    let app = routes::leptos_app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "artworks server listening");
    axum::serve(listener, app).await.expect("server failed");
}
