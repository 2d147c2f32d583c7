//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /events` - Create an event together with its venue
//! - `GET /events` - List all events, each composed with its venue
//! - `GET /events/{id}` - Get one event composed with its venue
//! - `PUT /events/{id}` - Update the venue carried in the body
//! - `DELETE /events/{id}` - Delete the event, leaving its venue
//! - `GET /health` - Health check
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use venue_events::api::rest::{create_router, AppState};
//! use venue_events::application::store::EventVenueStore;
//!
//! let state = AppState::new(EventVenueStore::new(repo));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, CreateEventResponse, ErrorResponse, EventRequest, HealthResponse,
    MutationResponse, VenuePayload,
};
pub use routes::create_router;
