mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();

    let state = state::AppState::new(
        services::catalog::launch_catalog(),
        services::catalog::launch_pricing(),
        services::auth::seed_users(),
        Arc::new(services::design::MemoryStore::new()),
        config.session_ttl,
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.bind_addr, config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "designpiece listening");
    axum::serve(listener, app).await.expect("server failed");
}
