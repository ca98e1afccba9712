//! HTTP surface of the Contact Hub store service.
//!
//! Mounts the JSON API from `contacthub-api` under `/api`, adds the service
//! banner at `/`, the JSON route-not-found fallback, permissive CORS and
//! request tracing.

pub mod config;

pub use config::{Overrides, ServerConfig};

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use contacthub_api::{api_router, not_found};
use contacthub_core::ContactStore;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router around a long-lived `store` handle.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/", get(banner).fallback(not_found::handler))
    .nest("/api", api_router(store))
    .fallback(not_found::handler)
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

/// `GET /` — service information and a map of the endpoints.
async fn banner() -> Json<Value> {
  Json(json!({
    "message": "Contact API is running!",
    "version": env!("CARGO_PKG_VERSION"),
    "endpoints": {
      "health": "/api/health",
      "getAllContacts": "GET /api/contacts",
      "createContact": "POST /api/contacts",
      "deleteContact": "DELETE /api/contacts/:id",
    },
    "documentation": "Visit /api/health to check server status",
  }))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use contacthub_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  async fn app() -> Router {
    router(Arc::new(SqliteStore::open_in_memory().await.unwrap()))
  }

  async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
  }

  #[tokio::test]
  async fn root_serves_banner() {
    let resp = app().await.oneshot(get_req("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Contact API is running!");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["endpoints"]["health"], "/api/health");
  }

  #[tokio::test]
  async fn api_is_mounted() {
    let resp = app().await.oneshot(get_req("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "OK");

    let resp = app().await.oneshot(get_req("/api/contacts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
  }

  #[tokio::test]
  async fn unknown_route_is_json_404() {
    let resp = app().await.oneshot(get_req("/contacts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Route not found");
    assert_eq!(body["message"], "Cannot GET /contacts");
    assert_eq!(body["availableRoutes"][0], "GET /");
  }

  #[tokio::test]
  async fn post_to_root_is_json_404() {
    let req = Request::builder()
      .method("POST")
      .uri("/")
      .body(Body::empty())
      .unwrap();
    let resp = app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Cannot POST /");
  }

  #[tokio::test]
  async fn cors_allows_any_origin() {
    let req = Request::builder()
      .uri("/api/health")
      .header(header::ORIGIN, "http://localhost:5173")
      .body(Body::empty())
      .unwrap();
    let resp = app().await.oneshot(req).await.unwrap();
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "*"
    );
  }
}
