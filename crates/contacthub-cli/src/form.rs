//! The new-contact form: field values, the per-field error map, and the
//! client's own validation rules.
//!
//! These rules differ from the server's on purpose: the client also insists
//! on a plausible phone number, and checks the email as typed rather than
//! after trimming.

use std::{collections::BTreeMap, sync::LazyLock};

use contacthub_core::{ContactDraft, Field};
use regex::Regex;

static EMAIL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Optional leading `+`, then at least ten digits, spaces, hyphens or
/// parentheses.
static PHONE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("valid phone regex"));

/// Form fields in focus order.
pub const FIELDS: [Field; 4] =
  [Field::Name, Field::Email, Field::Phone, Field::Message];

pub fn is_valid_email(email: &str) -> bool { EMAIL.is_match(email) }

pub fn is_valid_phone(phone: &str) -> bool { PHONE.is_match(phone) }

/// The message to show under `field` for `value`, if it fails validation.
pub fn field_error(field: Field, value: &str) -> Option<&'static str> {
  match field {
    Field::Name if value.trim().is_empty() => Some("Name is required"),
    Field::Email if value.trim().is_empty() => Some("Email is required"),
    Field::Email if !is_valid_email(value) => Some("Please enter a valid email"),
    Field::Phone if value.trim().is_empty() => Some("Phone is required"),
    Field::Phone if !is_valid_phone(value) => {
      Some("Please enter a valid phone number")
    }
    _ => None,
  }
}

// ─── Form ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Form {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub message: String,

  /// Errors from the last submit attempt, keyed by field. Editing a field
  /// clears its entry.
  pub errors: BTreeMap<Field, String>,
}

impl Form {
  pub fn value(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Email => &self.email,
      Field::Phone => &self.phone,
      Field::Message => &self.message,
    }
  }

  fn value_mut(&mut self, field: Field) -> &mut String {
    match field {
      Field::Name => &mut self.name,
      Field::Email => &mut self.email,
      Field::Phone => &mut self.phone,
      Field::Message => &mut self.message,
    }
  }

  pub fn push_char(&mut self, field: Field, c: char) {
    self.value_mut(field).push(c);
    self.errors.remove(&field);
  }

  pub fn pop_char(&mut self, field: Field) {
    self.value_mut(field).pop();
    self.errors.remove(&field);
  }

  /// Recompute the error map from scratch. Returns `true` when the form may
  /// be submitted.
  pub fn validate(&mut self) -> bool {
    self.errors = FIELDS
      .into_iter()
      .filter_map(|f| field_error(f, self.value(f)).map(|m| (f, m.to_owned())))
      .collect();
    self.errors.is_empty()
  }

  /// Whether every required field currently passes, without touching the
  /// displayed errors.
  pub fn is_valid(&self) -> bool {
    FIELDS
      .into_iter()
      .all(|f| field_error(f, self.value(f)).is_none())
  }

  pub fn draft(&self) -> ContactDraft {
    ContactDraft::new(&self.name, &self.email, &self.phone)
      .with_message(&self.message)
  }

  pub fn clear(&mut self) { *self = Self::default(); }
}
