//! The `EventStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `showlog-store-json`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  event::{Event, EventPatch, NewEvent},
};

/// Abstraction over an event store backend.
///
/// Mutations are whole-record partial merges: callers submit only the fields
/// they mean to change and every other field is preserved. A successful
/// return from any mutating method means the change is already durable.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EventStore: Send + Sync {
  /// All events, newest `createdAt` first. Records with equal timestamps
  /// keep their insertion order.
  fn list_events(&self)
  -> impl Future<Output = Result<Vec<Event>>> + Send + '_;

  /// Validate `input`, assign identity and timestamp, persist, and return
  /// the fully-populated record.
  fn create_event(
    &self,
    input: NewEvent,
  ) -> impl Future<Output = Result<Event>> + Send + '_;

  /// Shallow-merge `patch` into the record with `id` and persist the result
  /// in place, preserving the record's position in the collection. The
  /// path-supplied `id` always wins over anything in the patch body.
  fn update_event<'a>(
    &'a self,
    id: &'a str,
    patch: EventPatch,
  ) -> impl Future<Output = Result<Event>> + Send + 'a;

  /// Remove the record permanently. There is no soft delete.
  fn delete_event<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a;
}
