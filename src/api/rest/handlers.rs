//! # REST Handlers
//!
//! Request/response DTOs, the shared application state, and the five
//! route handlers.
//!
//! The wire format mirrors the nested JSON shape of the records: a
//! request body carries the event fields with the venue nested inside.
//! On create the venue arrives without an id (the backend generates
//! one); on update the body must carry `venue.id`, which addresses the
//! row to rewrite.

use crate::application::error::ApplicationError;
use crate::application::store::EventVenueStore;
use crate::domain::entities::venue::{Venue, VenueDraft};
use crate::domain::entities::{ComposedEvent, EventDraft};
use crate::domain::value_objects::{
    ContactInfo, EntryRequirements, EventId, Facilities, GeoPoint, Organizer, RefundPolicy,
    TicketInfo, VenueId,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

/// Shared state for all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The data-access facade.
    pub store: EventVenueStore,
}

impl AppState {
    /// Creates the application state.
    #[must_use]
    pub fn new(store: EventVenueStore) -> Self {
        Self { store }
    }
}

/// The venue as carried in a request body.
///
/// `id` is absent on create and required on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePayload {
    /// Venue id; only meaningful on update.
    #[serde(default)]
    pub id: Option<VenueId>,
    /// Venue name.
    pub name: String,
    /// Opening hours.
    pub operation_hours: String,
    /// Street address.
    pub address: String,
    /// Geographic coordinates.
    pub geo: GeoPoint,
    /// Venue contact details.
    pub contact: ContactInfo,
    /// Amenity descriptions.
    pub facilities: Facilities,
}

impl VenuePayload {
    fn into_draft(self) -> VenueDraft {
        VenueDraft {
            name: self.name,
            operation_hours: self.operation_hours,
            address: self.address,
            geo: self.geo,
            contact: self.contact,
            facilities: self.facilities,
        }
    }

    fn into_venue(self) -> Result<Venue, ApiError> {
        let id = self
            .id
            .ok_or_else(|| ApplicationError::validation("venue.id is required"))?;
        Ok(Venue::from_parts(id, self.into_draft()))
    }
}

/// Request body for POST and PUT on the events resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    /// The venue hosting the event.
    pub venue: VenuePayload,
    /// Event category.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event name.
    pub name: String,
    /// Scheduled start, UTC.
    pub date_time: DateTime<Utc>,
    /// Age restriction.
    pub age_restriction: String,
    /// Ticketing details.
    pub ticket_info: TicketInfo,
    /// Entry requirements.
    pub entry_requirements: EntryRequirements,
    /// Refund policy.
    pub refund_policy: RefundPolicy,
    /// Event organizer.
    pub organizer: Organizer,
}

impl EventRequest {
    fn into_drafts(self) -> (VenueDraft, EventDraft) {
        let venue = self.venue.into_draft();
        let event = EventDraft {
            event_type: self.event_type,
            name: self.name,
            date_time: self.date_time,
            age_restriction: self.age_restriction,
            ticket_info: self.ticket_info,
            entry_requirements: self.entry_requirements,
            refund_policy: self.refund_policy,
            organizer: self.organizer,
        };
        (venue, event)
    }
}

/// Response body for a successful create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Generated venue identifier.
    pub venue_id: VenueId,
    /// Generated event identifier.
    pub event_id: EventId,
}

/// Response body for successful update/delete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
}

/// Error body returned for every failure status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error description; opaque for backend failures.
    pub error: String,
}

/// Handler-level error, mapped to a status code and JSON body.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            ApplicationError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            ApplicationError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApplicationError::Repository(err) => {
                // The real cause stays server-side.
                error!(error = %err, "backend failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: body })).into_response()
    }
}

/// `POST /events` — creates an event together with its venue.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<EventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let (venue, event) = request.into_drafts();
    let (venue_id, event_id) = state.store.create_event(venue, event).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            success: true,
            message: "event created".to_string(),
            venue_id,
            event_id,
        }),
    ))
}

/// `GET /events/{id}` — returns the composed event/venue view.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ComposedEvent>, ApiError> {
    let composed = state.store.get_event(EventId::new(id)).await?;
    Ok(Json(composed))
}

/// `GET /events` — returns all composed event/venue views.
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<ComposedEvent>>, ApiError> {
    let events = state.store.list_events().await?;
    Ok(Json(events))
}

/// `PUT /events/{id}` — rewrites the venue addressed by `venue.id`.
///
/// The path id names the event being edited; the row actually rewritten
/// is the venue carried in the body, which the event observes through
/// the composed view.
pub async fn update_event(
    State(state): State<AppState>,
    Path(_id): Path<Uuid>,
    Json(request): Json<EventRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let venue = request.venue.into_venue()?;
    state.store.update_event(venue).await?;

    Ok(Json(MutationResponse {
        success: true,
        message: "event updated".to_string(),
    }))
}

/// `DELETE /events/{id}` — deletes the event row, orphaning its venue.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MutationResponse>, ApiError> {
    state.store.delete_event(EventId::new(id)).await?;

    Ok(Json(MutationResponse {
        success: true,
        message: "event deleted".to_string(),
    }))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
