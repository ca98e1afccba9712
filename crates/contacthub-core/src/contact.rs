//! Contact types — the single entity of the Contact Hub store.
//!
//! A contact is created once from a validated [`NewContact`] and is never
//! edited afterwards; the only other lifecycle event is deletion.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use uuid::Uuid;

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A persisted contact, exactly as returned by the store.
///
/// The wire names (`_id`, `createdAt`, `updatedAt`) are kept stable for
/// existing front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  /// Server-assigned; never changes after creation.
  #[serde(rename = "_id")]
  pub id:         Uuid,
  pub name:       String,
  /// Always trimmed and lowercase.
  pub email:      String,
  pub phone:      String,
  /// Free text; empty when the submitter left it out.
  #[serde(default)]
  pub message:    String,
  #[serde(serialize_with = "millis")]
  pub created_at: DateTime<Utc>,
  #[serde(serialize_with = "millis")]
  pub updated_at: DateTime<Utc>,
}

/// RFC 3339 with exactly three fractional digits, e.g.
/// `2025-01-01T00:00:00.000Z`.
fn millis<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
  s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// An unvalidated create request, as submitted by a client.
///
/// Every field is optional so that absent and `null` values can be told
/// apart from malformed ones. Numbers and booleans are accepted and kept as
/// their text; `0` and `false` count as absent. Turn it into a
/// [`NewContact`] with [`ContactDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
  #[serde(default, deserialize_with = "scalar_text")]
  pub name:    Option<String>,
  #[serde(default, deserialize_with = "scalar_text")]
  pub email:   Option<String>,
  #[serde(default, deserialize_with = "scalar_text")]
  pub phone:   Option<String>,
  #[serde(default, deserialize_with = "scalar_text")]
  pub message: Option<String>,
}

/// Read a string, number or boolean as text. `null`, `0` and `false` read as
/// `None`; arrays and objects are rejected.
fn scalar_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
  struct ScalarText;

  impl<'de> de::Visitor<'de> for ScalarText {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a string, number or boolean")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
      d.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
      Ok(v.then(|| "true".to_owned()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
      Ok((v != 0).then(|| v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
      Ok((v != 0).then(|| v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
      Ok((v != 0.0 && !v.is_nan()).then(|| v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
      Ok(Some(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
      Ok(Some(v))
    }
  }

  d.deserialize_option(ScalarText)
}

impl ContactDraft {
  /// Convenience constructor with every required field present.
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    phone: impl Into<String>,
  ) -> Self {
    Self {
      name:    Some(name.into()),
      email:   Some(email.into()),
      phone:   Some(phone.into()),
      message: None,
    }
  }

  pub fn with_message(mut self, message: impl Into<String>) -> Self {
    self.message = Some(message.into());
    self
  }
}

// ─── NewContact ──────────────────────────────────────────────────────────────

/// Normalised, validated input to
/// [`crate::store::ContactStore::create_contact`].
///
/// Only [`ContactDraft::validate`] builds one, so a store may assume every
/// field already satisfies the contact invariants. `id` and timestamps are
/// always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub(crate) name:    String,
  pub(crate) email:   String,
  pub(crate) phone:   String,
  pub(crate) message: String,
}

impl NewContact {
  pub fn name(&self) -> &str { &self.name }

  pub fn email(&self) -> &str { &self.email }

  pub fn phone(&self) -> &str { &self.phone }

  pub fn message(&self) -> &str { &self.message }

  /// Stamp the input with an identity and creation time, producing the
  /// record a store persists.
  pub fn into_contact(self, id: Uuid, now: DateTime<Utc>) -> Contact {
    Contact {
      id,
      name: self.name,
      email: self.email,
      phone: self.phone,
      message: self.message,
      created_at: now,
      updated_at: now,
    }
  }
}
