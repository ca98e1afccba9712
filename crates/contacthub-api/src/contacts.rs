//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path            | Notes |
//! |----------|-----------------|-------|
//! | `GET`    | `/contacts`     | All contacts, newest first |
//! | `POST`   | `/contacts`     | Body: `{"name","email","phone","message"?}`; returns 201 + stored contact |
//! | `DELETE` | `/contacts/:id` | Returns `{"message","deletedContact"}`; 404 if unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use contacthub_core::{Contact, ContactDraft, ContactStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let contacts = store
    .list_contacts()
    .await
    .map_err(ApiError::store("Error fetching contacts"))?;
  Ok(Json(contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns 201 + the stored [`Contact`].
///
/// The draft is validated before the store is touched, so a rejected request
/// never persists anything.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let Json(draft) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
  let input = draft.validate()?;

  let contact = store
    .create_contact(input)
    .await
    .map_err(ApiError::store("Error creating contact"))?;
  tracing::info!(id = %contact.id, "contact created");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// Body of a successful `DELETE /contacts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
  pub message:         String,
  pub deleted_contact: Contact,
}

/// `DELETE /contacts/:id`
///
/// An id that is not a UUID cannot name a stored contact and is reported as
/// not found, like an id that was already deleted.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: ContactStore,
{
  let Ok(id) = Uuid::parse_str(&id) else {
    tracing::debug!(%id, "delete with malformed contact id");
    return Err(ApiError::ContactNotFound);
  };

  let deleted = store
    .delete_contact(id)
    .await
    .map_err(ApiError::store("Error deleting contact"))?;

  match deleted {
    Some(contact) => {
      tracing::info!(%id, "contact deleted");
      Ok(Json(DeleteResponse {
        message:         "Contact deleted successfully".to_owned(),
        deleted_contact: contact,
      }))
    }
    None => {
      tracing::debug!(%id, "delete of unknown contact");
      Err(ApiError::ContactNotFound)
    }
  }
}
