//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders as a JSON object with an `error` summary; most add a
//! `message` with detail.

use axum::{
  Json,
  http::{Method, StatusCode},
  response::{IntoResponse, Response},
};
use contacthub_core::ValidationErrors;
use serde_json::json;
use thiserror::Error;

use crate::AVAILABLE_ROUTES;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// `name`, `email` or `phone` absent from a create request.
  #[error("Name, email, and phone are required")]
  MissingFields,

  /// Required fields present but unusable.
  #[error("Validation error: {0}")]
  Validation(ValidationErrors),

  /// The request body was not a JSON object of the expected shape.
  #[error("Invalid request body: {0}")]
  InvalidBody(String),

  #[error("Contact not found")]
  ContactNotFound,

  #[error("Cannot {method} {path}")]
  RouteNotFound { method: Method, path: String },

  /// A storage failure. `context` names the operation for the client; the
  /// underlying error is passed through as the message.
  #[error("{context}: {source}")]
  Store {
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Build a `map_err` adapter that logs a storage failure and wraps it.
  pub(crate) fn store<E>(context: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| {
      tracing::error!(error = %e, "{context}");
      Self::Store { context, source: Box::new(e) }
    }
  }
}

impl From<ValidationErrors> for ApiError {
  fn from(errors: ValidationErrors) -> Self {
    if errors.has_missing() {
      Self::MissingFields
    } else {
      Self::Validation(errors)
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::MissingFields => {
        (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
      }
      ApiError::Validation(e) => (
        StatusCode::BAD_REQUEST,
        json!({ "error": "Validation error", "message": e.to_string() }),
      ),
      ApiError::InvalidBody(m) => (
        StatusCode::BAD_REQUEST,
        json!({ "error": "Invalid request body", "message": m }),
      ),
      ApiError::ContactNotFound => {
        (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
      }
      ApiError::RouteNotFound { .. } => (
        StatusCode::NOT_FOUND,
        json!({
          "error": "Route not found",
          "message": self.to_string(),
          "availableRoutes": AVAILABLE_ROUTES,
        }),
      ),
      ApiError::Store { context, source } => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": context, "message": source.to_string() }),
      ),
    };
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use contacthub_core::ContactDraft;

  use super::*;

  #[test]
  fn missing_fields_take_precedence_over_validation() {
    let errs = ContactDraft {
      name: None,
      email: Some("nope".into()),
      phone: Some("0123456789".into()),
      message: None,
    }
    .validate()
    .unwrap_err();
    assert!(matches!(ApiError::from(errs), ApiError::MissingFields));
  }

  #[test]
  fn invalid_email_is_a_validation_error() {
    let errs = ContactDraft::new("Ada", "not-an-email", "0123456789")
      .validate()
      .unwrap_err();
    let err = ApiError::from(errs);
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn store_errors_are_internal() {
    let err = ApiError::store("Error fetching contacts")(std::io::Error::other("disk gone"));
    assert_eq!(err.to_string(), "Error fetching contacts: disk gone");
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
