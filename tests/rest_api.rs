//! Router-level tests exercising the HTTP surface against the
//! in-memory repository.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use venue_events::api::rest::{create_router, AppState};
use venue_events::application::store::EventVenueStore;
use venue_events::infrastructure::persistence::InMemoryCatalogRepository;

fn test_router() -> Router {
    let repo = Arc::new(InMemoryCatalogRepository::new());
    create_router(AppState::new(EventVenueStore::new(repo)))
}

fn event_body(venue_name: &str, venue_id: Option<&str>) -> Value {
    let mut venue = json!({
        "name": venue_name,
        "operationHours": "09:00-23:00",
        "address": "1 Concert Way",
        "geo": { "latitude": "37.5665", "longitude": "126.9780" },
        "contact": { "phone": "+82-2-000-0000", "email": "hall@example.com" },
        "facilities": {
            "parking": "on-site",
            "accessibility": "step-free",
            "foodAndBeverage": "kiosks",
            "restrooms": "all floors"
        }
    });
    if let Some(id) = venue_id {
        venue["id"] = json!(id);
    }

    json!({
        "venue": venue,
        "type": "concert",
        "name": "Spring Night",
        "dateTime": "2026-04-18T19:30:00Z",
        "ageRestriction": "15+",
        "ticketInfo": {
            "price": "55000",
            "availability": "on sale",
            "purchaseLink": "https://tickets.example.com/spring-night"
        },
        "entryRequirements": {
            "idRequired": true,
            "mobileEntry": true,
            "printAtHome": false
        },
        "refundPolicy": {
            "timeLimit": "48h before start",
            "conditions": "full refund minus fees"
        },
        "organizer": {
            "name": "Riverside Productions",
            "contact": { "phone": "+82-2-111-1111", "email": "ops@example.com" }
        }
    })
}

fn request(method: Method, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn post_creates_and_returns_generated_ids() {
    let router = test_router();

    let response = router
        .oneshot(request(
            Method::POST,
            "/events",
            Some(&event_body("Hall A", None)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["venueId"].is_string());
    assert!(body["eventId"].is_string());
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let router = test_router();

    let response = router
        .oneshot(request(
            Method::GET,
            "/events/7c9e6679-7425-40de-944b-e07fc1f90ae7",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn list_on_empty_store_is_200_with_empty_array() {
    let router = test_router();

    let response = router
        .oneshot(request(Method::GET, "/events", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_event_round_trips_through_get() {
    let router = test_router();

    let created = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/events",
            Some(&event_body("Hall A", None)),
        ))
        .await
        .unwrap();
    let created = response_json(created).await;
    let event_id = created["eventId"].as_str().unwrap().to_string();
    let venue_id = created["venueId"].as_str().unwrap().to_string();

    let response = router
        .oneshot(request(Method::GET, &format!("/events/{event_id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["event"]["id"], event_id.as_str());
    assert_eq!(body["event"]["venueId"], venue_id.as_str());
    assert_eq!(body["event"]["type"], "concert");
    assert_eq!(body["event"]["ticketInfo"]["price"], "55000");
    assert_eq!(body["venue"]["id"], venue_id.as_str());
    assert_eq!(body["venue"]["name"], "Hall A");
    assert_eq!(body["venue"]["facilities"]["foodAndBeverage"], "kiosks");
}

#[tokio::test]
async fn put_rewrites_venue_observed_through_event() {
    let router = test_router();

    let created = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/events",
            Some(&event_body("Hall A", None)),
        ))
        .await
        .unwrap();
    let created = response_json(created).await;
    let event_id = created["eventId"].as_str().unwrap().to_string();
    let venue_id = created["venueId"].as_str().unwrap().to_string();

    let update = router
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/events/{event_id}"),
            Some(&event_body("Hall B", Some(&venue_id))),
        ))
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::OK);

    let fetched = router
        .oneshot(request(Method::GET, &format!("/events/{event_id}"), None))
        .await
        .unwrap();
    let body = response_json(fetched).await;
    assert_eq!(body["venue"]["name"], "Hall B");
}

#[tokio::test]
async fn put_without_venue_id_is_400() {
    let router = test_router();

    let response = router
        .oneshot(request(
            Method::PUT,
            "/events/7c9e6679-7425-40de-944b-e07fc1f90ae7",
            Some(&event_body("Hall A", None)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_with_unknown_venue_id_is_404() {
    let router = test_router();

    let response = router
        .oneshot(request(
            Method::PUT,
            "/events/7c9e6679-7425-40de-944b-e07fc1f90ae7",
            Some(&event_body(
                "Hall A",
                Some("11111111-2222-3333-4444-555555555555"),
            )),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_event_and_keeps_it_out_of_list() {
    let router = test_router();

    let created = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/events",
            Some(&event_body("Hall A", None)),
        ))
        .await
        .unwrap();
    let created = response_json(created).await;
    let event_id = created["eventId"].as_str().unwrap().to_string();

    let deleted = router
        .clone()
        .oneshot(request(Method::DELETE, &format!("/events/{event_id}"), None))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    let body = response_json(deleted).await;
    assert_eq!(body["success"], true);

    let listed = router
        .clone()
        .oneshot(request(Method::GET, "/events", None))
        .await
        .unwrap();
    assert_eq!(response_json(listed).await, json!([]));

    let refetched = router
        .oneshot(request(Method::GET, &format!("/events/{event_id}"), None))
        .await
        .unwrap();
    assert_eq!(refetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let router = test_router();

    let response = router
        .oneshot(request(
            Method::DELETE,
            "/events/7c9e6679-7425-40de-944b-e07fc1f90ae7",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_one_entry_per_event() {
    let router = test_router();

    for name in ["Hall A", "Hall B", "Hall C"] {
        let response = router
            .clone()
            .oneshot(request(
                Method::POST,
                "/events",
                Some(&event_body(name, None)),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .oneshot(request(Method::GET, "/events", None))
        .await
        .unwrap();
    let body = response_json(response).await;

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    for entry in entries {
        assert_eq!(entry["event"]["venueId"], entry["venue"]["id"]);
    }
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let router = test_router();

    let response = router
        .oneshot(request(Method::GET, "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
