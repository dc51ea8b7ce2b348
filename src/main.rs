use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};

mod auth;
mod client;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use client::ApiClient;
use config::ApiConfig;

#[tokio::main]
async fn main() {
    // Load environment from the .env file
    dotenv().ok();
    env_logger::init();

    let config = ApiConfig::from_env().expect("API_URL must be set in .env file");
    log::info!("Using backend API at {}", config.base_url);
    let client = ApiClient::new(config);

    // CORS middleware so the frontend can call these routes
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    async fn handle_404() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    let app = Router::new()
        // Auth pages
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        // Group pages
        .route("/groups", get(routes::groups::list_load))
        .route(
            "/groups/details",
            get(routes::groups::details_load).post(routes::groups::details_action),
        )
        .route(
            "/groups/details/:id",
            get(routes::groups::details_load).post(routes::groups::details_action),
        )
        .route("/groups/movements/:id", get(routes::groups::movements_load))
        // Invite pages
        .route(
            "/invites/send",
            get(routes::invites::send_load).post(routes::invites::send_action),
        )
        .route(
            "/invites/send/:id",
            get(routes::invites::send_load).post(routes::invites::send_action),
        )
        // 404 handler
        .fallback(handle_404)
        .with_state(client)
        .layer(cors);

    let addr = "127.0.0.1:3000";
    log::info!("Server running at http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
