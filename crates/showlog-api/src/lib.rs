//! JSON REST API for showlog.
//!
//! Exposes an axum [`Router`] backed by any
//! [`showlog_core::store::EventStore`]. Transport concerns and the UI that
//! consumes this contract are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .route("/health", get(showlog_api::health))
//!   .nest("/api", showlog_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod events;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, put},
};
use showlog_core::store::EventStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EventStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/events", get(events::list::<S>).post(events::create::<S>))
    .route(
      "/events/{id}",
      put(events::update::<S>).delete(events::delete::<S>),
    )
    .with_state(store)
}

/// `GET /health` — liveness probe the UI hits on boot.
pub async fn health() -> Json<serde_json::Value> {
  Json(serde_json::json!({ "ok": true }))
}
