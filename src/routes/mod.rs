//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws` (optional `?client=<id>` to reuse a saved UI mode)
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `static_dir` with index fallback
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(format!("{}/index.html", static_dir)));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/levels", get(http::http_list_levels))
        .route("/api/v1/levels/lexile", get(http::http_levels_by_lexile))
        .route("/api/v1/levels/grade", get(http::http_levels_by_grade))
        .route("/api/v1/levels/cefr", get(http::http_levels_by_cefr))
        .route("/api/v1/levels/cambridge", get(http::http_levels_by_cambridge))
        .route("/api/v1/levels/oxford", get(http::http_level_by_oxford))
        .route("/api/v1/books", get(http::http_books))
        .route("/api/v1/systems", get(http::http_systems))
        .route("/api/v1/systems/:id", get(http::http_system))
        .route("/api/v1/assessment", post(http::http_start_assessment))
        .route("/api/v1/assessment/:id", delete(http::http_cancel_assessment))
        .route("/api/v1/assessment/:id/answer", post(http::http_answer_assessment))
        .route(
            "/api/v1/ui-mode/:client_id",
            get(http::http_get_ui_mode).put(http::http_put_ui_mode),
        )
        .route("/api/v1/ui-mode/:client_id/toggle", post(http::http_toggle_ui_mode))
        .route("/api/v1/ui-mode/:client_id/viewport", post(http::http_viewport))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
