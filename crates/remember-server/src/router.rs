//! Router assembly for the remember HTTP API.
//!
//! [`build_router`] wires the handlers to their routes under `/api` with
//! CORS and tracing middleware layers. Anything outside `/api/` serves the
//! client page.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// A known API path hit with the wrong method answers 404, same as an
/// unknown path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/data",
            get(handlers::data::fetch_document)
                .post(handlers::data::replace_document)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/notes",
            post(handlers::notes::upsert_note).fallback(handlers::not_found),
        )
        .route(
            "/api/delete-note",
            post(handlers::notes::delete_note).fallback(handlers::not_found),
        )
        .route(
            "/api/todos",
            post(handlers::todos::todo_command).fallback(handlers::not_found),
        )
        .fallback(handlers::page::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
