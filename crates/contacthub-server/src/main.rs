//! contacthub server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), layers the
//! environment and command-line flags on top, opens the SQLite store once and
//! serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p contacthub-server --bin server -- --port 5000 --database-url contacts.db
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use contacthub_server::{Overrides, ServerConfig};
use contacthub_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Contact Hub API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Port to listen on (overrides config and environment).
  #[arg(short, long)]
  port: Option<u16>,

  /// SQLite location: a path, `sqlite://<path>`, or `:memory:`.
  #[arg(long)]
  database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config, Overrides {
    port:         cli.port,
    database_url: cli.database_url,
  })
  .context("failed to load configuration")?;

  let home = std::env::var("HOME").ok();
  let location = server_cfg.database_location(home.as_deref());

  // The one store handle every request shares.
  let store = SqliteStore::connect(&location)
    .await
    .with_context(|| format!("failed to open store at {location:?}"))?;
  tracing::info!(database = %location, "store ready");

  let app = contacthub_server::router(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
