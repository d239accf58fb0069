//! Server configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Deserialised from `config.toml` (if present) layered with `SHOWLOG_*`
/// environment variables. Every field has a default, so the server runs
/// with no configuration at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Interface to bind.
  #[serde(default = "default_host")]
  pub host: String,

  /// TCP port.
  #[serde(default = "default_port")]
  pub port: u16,

  /// Path to the JSON data file.
  #[serde(default = "default_data_file")]
  pub data_file: PathBuf,
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_data_file() -> PathBuf {
  PathBuf::from("data/events.json")
}
