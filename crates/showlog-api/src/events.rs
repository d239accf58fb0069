//! Handlers for `/events` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/events` | Newest `createdAt` first |
//! | `POST`   | `/events` | Body: partial event, `title` required |
//! | `PUT`    | `/events/:id` | Shallow merge; the path id always wins |
//! | `DELETE` | `/events/:id` | Permanent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::json;
use showlog_core::{
  event::{Event, EventPatch, NewEvent},
  store::EventStore,
};

use crate::error::ApiError;

/// `GET /events`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Event>>, ApiError>
where
  S: EventStore,
{
  let events = store.list_events().await?;
  Ok(Json(events))
}

/// `POST /events` — body: partial event, `title` required.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EventStore,
{
  let event = store.create_event(body).await?;
  Ok((StatusCode::CREATED, Json(event)))
}

/// `PUT /events/:id` — body: any subset of event fields.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError>
where
  S: EventStore,
{
  let event = store.update_event(&id, patch).await?;
  Ok(Json(event))
}

/// `DELETE /events/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: EventStore,
{
  store.delete_event(&id).await?;
  Ok(Json(json!({ "ok": true })))
}
