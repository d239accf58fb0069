//! [`JsonStore`] — the file-backed implementation of [`EventStore`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use showlog_core::{
  Error, Result,
  event::{Event, EventPatch, NewEvent},
  store::EventStore,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An event store backed by a single JSON file.
///
/// Cloning is cheap — the collection and its lock are reference-counted.
/// The lock serialises mutations within the process, so every mutating
/// operation is one read-mutate-persist unit and reads always observe the
/// most recently completed write.
#[derive(Clone)]
pub struct JsonStore {
  events: Arc<Mutex<Vec<Event>>>,
  path:   Option<PathBuf>,
}

impl JsonStore {
  /// Open (or create) a store at `path`.
  ///
  /// A missing file is created as an empty array. An unreadable or corrupt
  /// file degrades to an empty collection instead of failing the boot; the
  /// next successful write replaces it.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent)
        .await
        .map_err(Error::storage)?;
    }

    let events = match tokio::fs::read_to_string(&path).await {
      Ok(raw) => match serde_json::from_str::<Vec<Event>>(&raw) {
        Ok(events) => events,
        Err(error) => {
          tracing::warn!(
            path = %path.display(),
            %error,
            "data file is unparsable; starting from an empty collection"
          );
          Vec::new()
        }
      },
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        tokio::fs::write(&path, "[]").await.map_err(Error::storage)?;
        Vec::new()
      }
      Err(error) => {
        tracing::warn!(
          path = %path.display(),
          %error,
          "data file is unreadable; starting from an empty collection"
        );
        Vec::new()
      }
    };

    Ok(Self {
      events: Arc::new(Mutex::new(events)),
      path:   Some(path),
    })
  }

  /// A store that never touches the filesystem. Used by tests and by
  /// downstream router tests.
  pub fn open_in_memory() -> Self {
    Self {
      events: Arc::new(Mutex::new(Vec::new())),
      path:   None,
    }
  }

  /// Write the full collection to disk, pretty-printed. Called with the
  /// lock held, before the in-memory state is committed, so a successful
  /// response always implies the change is durable.
  async fn persist(&self, events: &[Event]) -> Result<()> {
    let Some(path) = &self.path else {
      return Ok(());
    };
    let json = serde_json::to_string_pretty(events).map_err(Error::storage)?;
    tokio::fs::write(path, json).await.map_err(Error::storage)?;
    Ok(())
  }
}

// ─── EventStore impl ─────────────────────────────────────────────────────────

impl EventStore for JsonStore {
  async fn list_events(&self) -> Result<Vec<Event>> {
    let events = self.events.lock().await;
    let mut out = events.clone();
    // Stable sort: equal timestamps keep their collection order.
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(out)
  }

  async fn create_event(&self, input: NewEvent) -> Result<Event> {
    let event = Event::create(input, Uuid::new_v4().to_string(), Utc::now())?;

    let mut events = self.events.lock().await;
    events.push(event.clone());
    if let Err(e) = self.persist(&events).await {
      events.pop();
      return Err(e);
    }
    Ok(event)
  }

  async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event> {
    let mut events = self.events.lock().await;
    let Some(index) = events.iter().position(|e| e.id == id) else {
      return Err(Error::EventNotFound(id.to_string()));
    };

    let mut merged = events[index].clone();
    merged.apply(patch)?;

    // Replace in place so creation order (the ordering tie-breaker) is
    // preserved; roll back if the write fails.
    let previous = std::mem::replace(&mut events[index], merged.clone());
    if let Err(e) = self.persist(&events).await {
      events[index] = previous;
      return Err(e);
    }
    Ok(merged)
  }

  async fn delete_event(&self, id: &str) -> Result<()> {
    let mut events = self.events.lock().await;
    let Some(index) = events.iter().position(|e| e.id == id) else {
      return Err(Error::EventNotFound(id.to_string()));
    };

    let removed = events.remove(index);
    if let Err(e) = self.persist(&events).await {
      events.insert(index, removed);
      return Err(e);
    }
    Ok(())
  }
}
