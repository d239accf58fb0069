//! Event records and the partial-merge update semantics.
//!
//! An event is the sole entity of the store: one logged experience with
//! metadata, a packed photo list, and up to three per-author reviews. It is
//! created once with every field populated, then mutated only through
//! whole-record shallow merges — callers submit exactly the fields they mean
//! to change and everything else is preserved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
  Error, Result,
  codec::PhotoList,
  review::{ReviewSet, ReviewSetPatch},
};

/// Category applied when a creation request names none.
pub const DEFAULT_CATEGORY: &str = "Tiyatro";

/// Display glyph for a category. The set is open at the data layer: unknown
/// categories are legal and fall back to the theatre glyph.
pub fn category_glyph(category: &str) -> &'static str {
  match category {
    "Tiyatro" => "🎭",
    "Sergi" => "🎨",
    "Bale" => "🩰",
    "Konser" => "🎵",
    "Şehir Keşfi" => "🏛️",
    _ => "🎭",
  }
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// A fully-populated event record as stored and as served over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  /// Opaque unique identifier, assigned at creation, never reassigned.
  pub id:         String,
  pub title:      String,
  pub category:   String,
  #[serde(default)]
  pub date:       String,
  #[serde(default)]
  pub venue:      String,
  #[serde(default)]
  pub summary:    String,
  #[serde(default)]
  pub hero_image: String,
  #[serde(default)]
  pub photos:     PhotoList,
  #[serde(flatten)]
  pub reviews:    ReviewSet,
  /// Stamped once at creation; only used for newest-first ordering.
  pub created_at: DateTime<Utc>,
  /// Fields this version does not know about, preserved verbatim so older
  /// and newer clients can share one data file.
  #[serde(flatten)]
  pub extra:      Map<String, Value>,
}

impl Event {
  /// Build a fully-populated record from creation input. Identity and
  /// timestamp are supplied by the store. Review sub-state always starts
  /// empty, whatever the input contained.
  pub fn create(
    input: NewEvent,
    id: String,
    created_at: DateTime<Utc>,
  ) -> Result<Self> {
    if input.title.trim().is_empty() {
      return Err(Error::EmptyTitle);
    }
    let category = if input.category.is_empty() {
      DEFAULT_CATEGORY.to_string()
    } else {
      input.category
    };
    Ok(Self {
      id,
      title: input.title,
      category,
      date: input.date,
      venue: input.venue,
      summary: input.summary,
      hero_image: input.hero_image,
      photos: input.photos,
      reviews: ReviewSet::default(),
      created_at,
      extra: Map::new(),
    })
  }

  /// Shallow-merge `patch` into this record.
  ///
  /// Only fields present in the patch are overwritten; absent fields are
  /// untouched. `id` and `createdAt` never change, whatever the patch body
  /// says. Fails without mutating if the patch carries an out-of-range
  /// rating.
  pub fn apply(&mut self, patch: EventPatch) -> Result<()> {
    patch.reviews.validate()?;

    if let Some(v) = patch.title {
      self.title = v;
    }
    if let Some(v) = patch.category {
      self.category = v;
    }
    if let Some(v) = patch.date {
      self.date = v;
    }
    if let Some(v) = patch.venue {
      self.venue = v;
    }
    if let Some(v) = patch.summary {
      self.summary = v;
    }
    if let Some(v) = patch.hero_image {
      self.hero_image = v;
    }
    if let Some(v) = patch.photos {
      self.photos = v;
    }
    patch.reviews.apply(&mut self.reviews);

    // The path-supplied id always wins and createdAt is immutable; neither
    // can be smuggled in through the pass-through map.
    let mut extra = patch.extra;
    extra.remove("id");
    extra.remove("createdAt");
    for (key, value) in extra {
      self.extra.insert(key, value);
    }
    Ok(())
  }
}

// ─── NewEvent ────────────────────────────────────────────────────────────────

/// Input to [`crate::store::EventStore::create_event`].
///
/// `id` and `createdAt` are always set by the store; review fields are not
/// accepted at creation. Unrecognised fields in a creation body are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
  #[serde(default)]
  pub title:      String,
  #[serde(default)]
  pub category:   String,
  #[serde(default)]
  pub date:       String,
  #[serde(default)]
  pub venue:      String,
  #[serde(default)]
  pub summary:    String,
  #[serde(default)]
  pub hero_image: String,
  #[serde(default)]
  pub photos:     PhotoList,
}

impl NewEvent {
  /// Convenience constructor used heavily in tests.
  pub fn titled(title: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      ..Self::default()
    }
  }
}

// ─── EventPatch ──────────────────────────────────────────────────────────────

/// A partial update. Every field is optional; absent fields are left alone
/// by [`Event::apply`], which is what lets review edits, review deletions,
/// photo additions/removals and plain field edits all funnel through one
/// operation without clobbering each other.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
  pub title:      Option<String>,
  pub category:   Option<String>,
  pub date:       Option<String>,
  pub venue:      Option<String>,
  pub summary:    Option<String>,
  pub hero_image: Option<String>,
  pub photos:     Option<PhotoList>,
  #[serde(flatten)]
  pub reviews:    ReviewSetPatch,
  /// Unrecognised fields pass through into the stored record untouched.
  #[serde(flatten)]
  pub extra:      Map<String, Value>,
}
