//! # PostgreSQL Catalog Repository
//!
//! PostgreSQL implementation of [`CatalogRepository`] using sqlx.
//!
//! Both tables generate their ids server-side (`gen_random_uuid()`),
//! surfaced to the caller through `RETURNING id`. The composed reads
//! run their two statements inside one transaction so the event/venue
//! pair is a consistent snapshot.

use crate::domain::entities::venue::{Venue, VenueDraft};
use crate::domain::entities::{ComposedEvent, Event, EventDraft};
use crate::domain::value_objects::{
    ContactInfo, EntryRequirements, EventId, Facilities, GeoPoint, Organizer, RefundPolicy,
    TicketInfo, VenueId,
};
use crate::infrastructure::persistence::traits::{
    CatalogRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// PostgreSQL implementation of [`CatalogRepository`].
///
/// Uses connection pooling via `sqlx::PgPool`. The pool handle is
/// injected at construction rather than held in a global, so tests and
/// callers control its lifetime.
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use venue_events::infrastructure::persistence::postgres::PostgresCatalogRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresCatalogRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Creates a new PostgreSQL catalog repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_venue(
        conn: &mut PgConnection,
        id: &VenueId,
    ) -> RepositoryResult<Option<Venue>> {
        let row: Option<VenueRow> = sqlx::query_as(
            r#"
            SELECT id, name, address, latitude, longitude, phone, email,
                   operation_hours, parking, accessibility, food_and_beverage,
                   restrooms
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(conn)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(row.map(VenueRow::into_venue))
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn insert_event(
        &self,
        venue: &VenueDraft,
        event: &EventDraft,
    ) -> RepositoryResult<(VenueId, EventId)> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        let (venue_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO venues (
                name, address, latitude, longitude, phone, email,
                operation_hours, parking, accessibility, food_and_beverage,
                restrooms
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&venue.name)
        .bind(&venue.address)
        .bind(&venue.geo.latitude)
        .bind(&venue.geo.longitude)
        .bind(&venue.contact.phone)
        .bind(&venue.contact.email)
        .bind(&venue.operation_hours)
        .bind(&venue.facilities.parking)
        .bind(&venue.facilities.accessibility)
        .bind(&venue.facilities.food_and_beverage)
        .bind(&venue.facilities.restrooms)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        let (event_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO events (
                venue_id, event_type, name, date_time, age_restriction,
                ticket_price, ticket_availability, purchase_link,
                id_required, mobile_entry, print_at_home,
                refund_time_limit, refund_conditions,
                organizer_name, organizer_phone, organizer_email
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                      $12, $13, $14, $15, $16)
            RETURNING id
            "#,
        )
        .bind(venue_id)
        .bind(&event.event_type)
        .bind(&event.name)
        .bind(event.date_time)
        .bind(&event.age_restriction)
        .bind(&event.ticket_info.price)
        .bind(&event.ticket_info.availability)
        .bind(&event.ticket_info.purchase_link)
        .bind(event.entry_requirements.id_required)
        .bind(event.entry_requirements.mobile_entry)
        .bind(event.entry_requirements.print_at_home)
        .bind(&event.refund_policy.time_limit)
        .bind(&event.refund_policy.conditions)
        .bind(&event.organizer.name)
        .bind(&event.organizer.contact.phone)
        .bind(&event.organizer.contact.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        Ok((VenueId::new(venue_id), EventId::new(event_id)))
    }

    async fn get_event(&self, id: &EventId) -> RepositoryResult<Option<ComposedEvent>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        let row: Option<EventRow> = sqlx::query_as(EVENT_SELECT)
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let event = row.into_event();
        let venue = Self::fetch_venue(&mut *tx, &event.venue_id).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        Ok(Some(ComposedEvent { event, venue }))
    }

    async fn list_events(&self) -> RepositoryResult<Vec<ComposedEvent>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        let rows: Vec<EventRow> = sqlx::query_as(EVENTS_SELECT_ALL)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        // One venue lookup per event, all inside the same snapshot.
        let mut composed = Vec::with_capacity(rows.len());
        for row in rows {
            let event = row.into_event();
            let venue = Self::fetch_venue(&mut *tx, &event.venue_id).await?;
            composed.push(ComposedEvent { event, venue });
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        Ok(composed)
    }

    async fn get_venue(&self, id: &VenueId) -> RepositoryResult<Option<Venue>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        Self::fetch_venue(&mut *conn, id).await
    }

    async fn update_venue(&self, venue: &Venue) -> RepositoryResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE venues
            SET name = $1, address = $2, latitude = $3, longitude = $4,
                phone = $5, email = $6, operation_hours = $7, parking = $8,
                accessibility = $9, food_and_beverage = $10, restrooms = $11
            WHERE id = $12
            "#,
        )
        .bind(&venue.name)
        .bind(&venue.address)
        .bind(&venue.geo.latitude)
        .bind(&venue.geo.longitude)
        .bind(&venue.contact.phone)
        .bind(&venue.contact.email)
        .bind(&venue.operation_hours)
        .bind(&venue.facilities.parking)
        .bind(&venue.facilities.accessibility)
        .bind(&venue.facilities.food_and_beverage)
        .bind(&venue.facilities.restrooms)
        .bind(venue.id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_event(&self, id: &EventId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

const EVENT_SELECT: &str = r#"
    SELECT id, venue_id, event_type, name, date_time, age_restriction,
           ticket_price, ticket_availability, purchase_link,
           id_required, mobile_entry, print_at_home,
           refund_time_limit, refund_conditions,
           organizer_name, organizer_phone, organizer_email
    FROM events
    WHERE id = $1
"#;

const EVENTS_SELECT_ALL: &str = r#"
    SELECT id, venue_id, event_type, name, date_time, age_restriction,
           ticket_price, ticket_availability, purchase_link,
           id_required, mobile_entry, print_at_home,
           refund_time_limit, refund_conditions,
           organizer_name, organizer_phone, organizer_email
    FROM events
    ORDER BY date_time ASC
"#;

/// Row type for venue queries.
#[derive(Debug, sqlx::FromRow)]
struct VenueRow {
    id: Uuid,
    name: String,
    address: String,
    latitude: String,
    longitude: String,
    phone: String,
    email: String,
    operation_hours: String,
    parking: String,
    accessibility: String,
    food_and_beverage: String,
    restrooms: String,
}

impl VenueRow {
    fn into_venue(self) -> Venue {
        Venue {
            id: VenueId::new(self.id),
            name: self.name,
            operation_hours: self.operation_hours,
            address: self.address,
            geo: GeoPoint {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            contact: ContactInfo {
                phone: self.phone,
                email: self.email,
            },
            facilities: Facilities {
                parking: self.parking,
                accessibility: self.accessibility,
                food_and_beverage: self.food_and_beverage,
                restrooms: self.restrooms,
            },
        }
    }
}

/// Row type for event queries.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    venue_id: Uuid,
    event_type: String,
    name: String,
    date_time: DateTime<Utc>,
    age_restriction: String,
    ticket_price: String,
    ticket_availability: String,
    purchase_link: String,
    id_required: bool,
    mobile_entry: bool,
    print_at_home: bool,
    refund_time_limit: String,
    refund_conditions: String,
    organizer_name: String,
    organizer_phone: String,
    organizer_email: String,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            id: EventId::new(self.id),
            venue_id: VenueId::new(self.venue_id),
            event_type: self.event_type,
            name: self.name,
            date_time: self.date_time,
            age_restriction: self.age_restriction,
            ticket_info: TicketInfo {
                price: self.ticket_price,
                availability: self.ticket_availability,
                purchase_link: self.purchase_link,
            },
            entry_requirements: EntryRequirements {
                id_required: self.id_required,
                mobile_entry: self.mobile_entry,
                print_at_home: self.print_at_home,
            },
            refund_policy: RefundPolicy {
                time_limit: self.refund_time_limit,
                conditions: self.refund_conditions,
            },
            organizer: Organizer {
                name: self.organizer_name,
                contact: ContactInfo {
                    phone: self.organizer_phone,
                    email: self.organizer_email,
                },
            },
        }
    }
}
