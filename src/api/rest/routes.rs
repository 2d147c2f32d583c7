//! # Router
//!
//! Route table and middleware stack for the REST surface.

use crate::api::rest::handlers::{
    create_event, delete_event, get_event, health, list_events, update_event, AppState,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the service router.
///
/// # Examples
///
/// ```ignore
/// use venue_events::api::rest::{create_router, AppState};
///
/// let router = create_router(state);
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router).await?;
/// ```
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
