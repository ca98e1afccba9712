//! Layered server configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, an optional TOML
//! file, `CONTACTHUB_*` environment variables, the conventional `PORT` and
//! `DATABASE_URL` variables, then command-line overrides.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "contacts.db";

/// Runtime server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// SQLite location: a path, `sqlite://<path>`, or `:memory:`.
  pub database_url: String,
}

/// Values given on the command line; `None` leaves lower layers in charge.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub port:         Option<u16>,
  pub database_url: Option<String>,
}

impl ServerConfig {
  /// Load configuration from `file` (if it exists) and the process
  /// environment.
  pub fn load(file: &Path, overrides: Overrides) -> Result<Self, ConfigError> {
    Self::load_with_env(file, overrides, std::env::vars().collect())
  }

  /// As [`ServerConfig::load`], reading variables from `env` instead of the
  /// process environment.
  pub fn load_with_env(
    file: &Path,
    overrides: Overrides,
    env: Map<String, String>,
  ) -> Result<Self, ConfigError> {
    let plain_port = env.get("PORT").cloned();
    let plain_database_url = env.get("DATABASE_URL").cloned();

    Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("database_url", DEFAULT_DATABASE_URL)?
      .add_source(File::from(file).required(false))
      .add_source(Environment::with_prefix("CONTACTHUB").source(Some(env)))
      .set_override_option("port", plain_port)?
      .set_override_option("database_url", plain_database_url)?
      .set_override_option("port", overrides.port.map(i64::from))?
      .set_override_option("database_url", overrides.database_url)?
      .build()?
      .try_deserialize()
  }

  /// `database_url` with a leading `~/` expanded against `home`.
  pub fn database_location(&self, home: Option<&str>) -> String {
    expand_tilde(&self.database_url, home)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory, keeping any
/// `sqlite://` prefix in place.
fn expand_tilde(url: &str, home: Option<&str>) -> String {
  let (scheme, path) = url
    .strip_prefix("sqlite://")
    .map_or(("", url), |rest| ("sqlite://", rest));

  if let Some(rest) = path.strip_prefix("~/")
    && let Some(home) = home
  {
    let expanded: PathBuf = PathBuf::from(home).join(rest);
    return format!("{scheme}{}", expanded.display());
  }
  url.to_owned()
}
