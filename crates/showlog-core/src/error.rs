//! Error types for `showlog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A creation request with a missing or blank title.
  #[error("title is required")]
  EmptyTitle,

  #[error("rating {0} is out of range (0-5)")]
  RatingOutOfRange(u8),

  #[error("event not found: {0}")]
  EventNotFound(String),

  /// Failure in the persistence backend. A mutation that surfaces this was
  /// never committed.
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend failure (I/O, serialisation) as a storage error.
  pub fn storage(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Storage(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
