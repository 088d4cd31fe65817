pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Visit-time fetch (no auth; this is what QR links resolve against)
        .route(
            "/api/public/business-card/{id}",
            get(routes::public::get_business_card),
        )
        // Owner-facing card management
        .route("/api/cards", get(routes::cards::list_cards))
        .route("/api/cards", post(routes::cards::create_card))
        .route("/api/cards/{id}", get(routes::cards::get_card))
        .route("/api/cards/{id}", delete(routes::cards::delete_card))
        .route(
            "/api/cards/{id}/actions",
            put(routes::cards::replace_actions),
        )
        .layer(cors)
        .with_state(app_state)
}

/// Start the card store service.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, listener, open_browser).await
}

/// Start the card store service on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read the
/// actual port before starting (useful when `port = 0` and the OS picks one).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("card store listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/cards");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
