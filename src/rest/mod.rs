// rest/mod.rs — HTTP surface of the habit service.
//
// Axum server on the fixed 0.0.0.0:8000 (no override mechanism).
//
// Endpoints:
//   GET    /
//   GET    /habits
//   POST   /habits
//   POST   /habits/{id}/complete
//   DELETE /habits/{id}
//   GET    /stats/success-rate
//   GET    /stats/current-streak
//   GET    /stats/longest-streak

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::routing::{delete, get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub const BIND_ADDR: &str = "0.0.0.0:8000";

/// Bind and serve until the process is killed. A failed bind (port already
/// taken) propagates out and terminates the process with a non-zero status.
pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let addr: SocketAddr = BIND_ADDR.parse()?;
    let router = build_router(ctx);

    info!("habit service listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::habits::root))
        .route(
            "/habits",
            get(routes::habits::list_habits).post(routes::habits::create_habit),
        )
        .route("/habits/{id}/complete", post(routes::habits::complete_habit))
        .route("/habits/{id}", delete(routes::habits::delete_habit))
        .route("/stats/success-rate", get(routes::stats::success_rate))
        .route("/stats/current-streak", get(routes::stats::current_streak))
        .route("/stats/longest-streak", get(routes::stats::longest_streak))
        // Browser clients call from any origin — all methods and headers allowed.
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
