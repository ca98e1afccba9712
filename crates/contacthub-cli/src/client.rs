//! Async HTTP client wrapping the Contact Hub JSON API.

use anyhow::{Context, Result, anyhow};
use contacthub_core::{Contact, ContactDraft};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use uuid::Uuid;

/// Connection settings for the Contact Hub API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// What a delete request found on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
  Deleted,
  /// The server no longer had the contact, e.g. another client removed it
  /// first.
  AlreadyGone,
}

/// Async HTTP client for the Contact Hub JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  pub fn base_url(&self) -> &str { &self.config.base_url }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/contacts`
  pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let resp = self
      .client
      .get(self.url("/contacts"))
      .send()
      .await
      .context("GET /contacts failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /contacts → {}", resp.status()));
    }
    resp.json().await.context("deserialising contacts")
  }

  /// `POST /api/contacts`
  pub async fn create_contact(&self, draft: &ContactDraft) -> Result<Contact> {
    let resp = self
      .client
      .post(self.url("/contacts"))
      .json(draft)
      .send()
      .await
      .context("POST /contacts failed")?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(anyhow!("POST /contacts → {status}: {body}"));
    }
    resp.json().await.context("deserialising created contact")
  }

  /// `DELETE /api/contacts/:id`
  pub async fn delete_contact(&self, id: Uuid) -> Result<DeleteOutcome> {
    let resp = self
      .client
      .delete(self.url(&format!("/contacts/{id}")))
      .send()
      .await
      .with_context(|| format!("DELETE /contacts/{id} failed"))?;

    match resp.status() {
      StatusCode::NOT_FOUND => Ok(DeleteOutcome::AlreadyGone),
      s if s.is_success() => Ok(DeleteOutcome::Deleted),
      s => Err(anyhow!("DELETE /contacts/{id} → {s}")),
    }
  }
}
