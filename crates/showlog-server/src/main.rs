//! showlog server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! JSON data file, and serves the event API plus a health probe.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::{Router, routing::get};
use clap::Parser;
use showlog_store_json::JsonStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Shared event-memory log server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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

  // Load configuration.
  let loaded = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SHOWLOG"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = loaded
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the JSON store.
  let store = JsonStore::open(&server_cfg.data_file)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.data_file)
    })?;

  let app = Router::new()
    .route("/health", get(showlog_api::health))
    .nest("/api", showlog_api::api_router(Arc::new(store)))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
