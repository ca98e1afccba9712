//! Server-side validation of create requests.
//!
//! [`ContactDraft::validate`] is pure: it normalises the draft (trimming,
//! lowercasing the email) and either yields a [`NewContact`] or the full list
//! of field-level failures. Phone format is deliberately not checked here;
//! only presence is required.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::contact::{ContactDraft, NewContact};

/// `local@domain.tld` with no whitespace anywhere.
static EMAIL_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

// ─── Field errors ────────────────────────────────────────────────────────────

/// The contact fields a validation failure can point at.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
  Name,
  Email,
  Phone,
  Message,
}

impl Field {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Name => "name",
      Self::Email => "email",
      Self::Phone => "phone",
      Self::Message => "message",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
  /// Absent, `null`, or the empty string.
  Missing,
  /// Present but nothing left after trimming.
  Blank,
  /// The email does not look like `local@domain.tld`.
  InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
  pub field: Field,
  pub kind:  FieldErrorKind,
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      FieldErrorKind::Missing | FieldErrorKind::Blank => {
        write!(f, "{}: {} is required", self.field, self.field)
      }
      FieldErrorKind::InvalidEmail => {
        write!(f, "{}: Please enter a valid email", self.field)
      }
    }
  }
}

/// A non-empty set of field failures for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn errors(&self) -> &[FieldError] { &self.0 }

  /// Whether any required field was left out entirely, as opposed to being
  /// present but unusable.
  pub fn has_missing(&self) -> bool {
    self.0.iter().any(|e| e.kind == FieldErrorKind::Missing)
  }

  pub fn for_field(&self, field: Field) -> Option<&FieldError> {
    self.0.iter().find(|e| e.field == field)
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Contact validation failed: ")?;
    for (i, err) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{err}")?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Check that a required field is present and non-blank, returning its
/// trimmed value.
fn required(
  field: Field,
  raw: Option<&str>,
  errors: &mut Vec<FieldError>,
) -> Option<String> {
  let Some(raw) = raw.filter(|s| !s.is_empty()) else {
    errors.push(FieldError { field, kind: FieldErrorKind::Missing });
    return None;
  };
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    errors.push(FieldError { field, kind: FieldErrorKind::Blank });
    return None;
  }
  Some(trimmed.to_owned())
}

/// Whether `email` (already normalised) has the accepted shape.
pub fn is_valid_email(email: &str) -> bool { EMAIL_SHAPE.is_match(email) }

impl ContactDraft {
  /// Normalise and validate the draft. Runs every check so the caller sees
  /// all failing fields at once.
  pub fn validate(&self) -> Result<NewContact, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required(Field::Name, self.name.as_deref(), &mut errors);
    let email = required(Field::Email, self.email.as_deref(), &mut errors)
      .map(|e| e.to_lowercase());
    let phone = required(Field::Phone, self.phone.as_deref(), &mut errors);

    if let Some(email) = &email
      && !is_valid_email(email)
    {
      errors.push(FieldError {
        field: Field::Email,
        kind:  FieldErrorKind::InvalidEmail,
      });
    }

    match (name, email, phone) {
      (Some(name), Some(email), Some(phone)) if errors.is_empty() => {
        Ok(NewContact {
          name,
          email,
          phone,
          message: self
            .message
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
        })
      }
      _ => Err(ValidationErrors(errors)),
    }
  }
}
