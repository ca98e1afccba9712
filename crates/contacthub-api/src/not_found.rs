//! Fallback for requests that match no route (or match a path but not its
//! method).

use axum::{extract::OriginalUri, http::Method};

use crate::ApiError;

pub async fn handler(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
  let path = uri
    .path_and_query()
    .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned());
  ApiError::RouteNotFound { method, path }
}
