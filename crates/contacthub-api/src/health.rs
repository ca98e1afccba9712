//! Handler for `GET /health`.

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
  pub status:  String,
  pub message: String,
}

/// `GET /health` — always `{"status":"OK","message":"Server is running"}`.
pub async fn handler() -> Json<Health> {
  Json(Health {
    status:  "OK".to_owned(),
    message: "Server is running".to_owned(),
  })
}
