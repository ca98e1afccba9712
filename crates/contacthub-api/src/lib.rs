//! JSON REST API for Contact Hub.
//!
//! Exposes an axum [`Router`] backed by any [`contacthub_core::ContactStore`].
//! Process bootstrap, CORS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", contacthub_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod health;
pub mod not_found;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get},
};
use contacthub_core::ContactStore;

pub use error::ApiError;

/// Every route the service answers, as listed in route-not-found replies.
pub const AVAILABLE_ROUTES: [&str; 5] = [
  "GET /",
  "GET /api/health",
  "GET /api/contacts",
  "POST /api/contacts",
  "DELETE /api/contacts/:id",
];

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Unknown paths and unsupported methods on known
/// paths both answer with the JSON route-not-found body.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/health", get(health::handler).fallback(not_found::handler))
    .route(
      "/contacts",
      get(contacts::list::<S>)
        .post(contacts::create::<S>)
        .fallback(not_found::handler),
    )
    .route(
      "/contacts/{id}",
      delete(contacts::delete_one::<S>).fallback(not_found::handler),
    )
    .fallback(not_found::handler)
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use contacthub_core::Contact;
  use contacthub_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    Router::new().nest("/api", api_router(Arc::new(store)))
  }

  async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let resp = app
      .clone()
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  async fn create(app: &Router, name: &str, email: &str) -> Contact {
    let (status, body) = send(
      app,
      "POST",
      "/api/contacts",
      Some(json!({ "name": name, "email": email, "phone": "555-010-0000" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    serde_json::from_value(body).unwrap()
  }

  // ── Health ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_reports_ok() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK", "message": "Server is running" }));
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_stored_contact() {
    let app = app().await;
    let (status, body) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({
        "name": "Ada",
        "email": "A@Example.com",
        "phone": "555-010-0000",
        "message": "hi",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["_id"].as_str().is_some_and(|id| Uuid::parse_str(id).is_ok()));
    assert_eq!(body["email"], "a@example.com");
    assert_eq!(body["message"], "hi");
    assert!(body["createdAt"].is_string());
    assert_eq!(body["createdAt"], body["updatedAt"]);

    let (_, list) = send(&app, "GET", "/api/contacts", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["email"], "a@example.com");
  }

  #[tokio::test]
  async fn create_without_required_field_is_rejected() {
    let app = app().await;
    for body in [
      json!({ "email": "a@example.com", "phone": "555-010-0000" }),
      json!({ "name": "Ada", "phone": "555-010-0000" }),
      json!({ "name": "Ada", "email": "a@example.com", "phone": "" }),
    ] {
      let (status, resp) = send(&app, "POST", "/api/contacts", Some(body)).await;
      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(resp, json!({ "error": "Name, email, and phone are required" }));
    }

    let (_, list) = send(&app, "GET", "/api/contacts", None).await;
    assert_eq!(list, json!([]));
  }

  #[tokio::test]
  async fn create_accepts_numeric_phone() {
    let app = app().await;
    let (status, body) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "Ada", "email": "ada@example.com", "phone": 5550100000u64 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["phone"], "5550100000");

    let (status, resp) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "Ada", "email": "ada@example.com", "phone": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({ "error": "Name, email, and phone are required" }));

    let (status, resp) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "Ada", "email": "ada@example.com", "phone": [555] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Invalid request body");
  }

  #[tokio::test]
  async fn create_with_bad_email_is_a_validation_error() {
    let app = app().await;
    let (status, resp) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "Ada", "email": "not-an-email", "phone": "555-010-0000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Validation error");
    assert!(resp["message"].as_str().unwrap().contains("email"));

    let (_, list) = send(&app, "GET", "/api/contacts", None).await;
    assert_eq!(list, json!([]));
  }

  #[tokio::test]
  async fn create_with_malformed_json_is_rejected() {
    let app = app().await;
    let req = Request::builder()
      .method("POST")
      .uri("/api/contacts")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request body");
  }

  // ── List ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_is_newest_first() {
    let app = app().await;
    let first = create(&app, "First", "first@example.com").await;
    let second = create(&app, "Second", "second@example.com").await;

    let (status, list) = send(&app, "GET", "/api/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Contact> = serde_json::from_value(list).unwrap();
    assert_eq!(listed, vec![second, first]);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_returns_confirmation_then_404() {
    let app = app().await;
    let contact = create(&app, "Ada", "ada@example.com").await;
    let uri = format!("/api/contacts/{}", contact.id);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact deleted successfully");
    let deleted: Contact = serde_json::from_value(body["deletedContact"].clone()).unwrap();
    assert_eq!(deleted, contact);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Contact not found" }));
  }

  #[tokio::test]
  async fn delete_with_malformed_id_is_not_found() {
    let app = app().await;
    let (status, body) = send(&app, "DELETE", "/api/contacts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Contact not found");
  }

  #[tokio::test]
  async fn creates_minus_deletes_remain() {
    let app = app().await;
    let mut created = Vec::new();
    for i in 0..4 {
      created.push(create(&app, &format!("c{i}"), &format!("c{i}@example.com")).await);
    }
    send(&app, "DELETE", &format!("/api/contacts/{}", created[0].id), None).await;

    let (_, list) = send(&app, "GET", "/api/contacts", None).await;
    let listed: Vec<Contact> = serde_json::from_value(list).unwrap();
    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["c3", "c2", "c1"]);
  }

  // ── Fallback ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_route_lists_available_routes() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/nope?x=1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
    assert_eq!(body["message"], "Cannot GET /api/nope?x=1");
    assert_eq!(body["availableRoutes"].as_array().unwrap().len(), 5);
  }

  #[tokio::test]
  async fn unsupported_method_is_route_not_found() {
    let app = app().await;
    let (status, body) = send(&app, "PUT", "/api/contacts", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Cannot PUT /api/contacts");
  }
}
