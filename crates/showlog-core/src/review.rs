//! Per-author review sub-records.
//!
//! The wire format stores reviewer state as flat prefixed fields
//! (`senaReview`, `senaMood`, ... `mervePhoto`). Internally the three fixed
//! reviewers form a fixed-size [`ReviewSet`], so "exactly these three authors
//! may hold review state" is enforced by the type system. The
//! flattening/unflattening lives only in the serde impls at the bottom of
//! this module.

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};

use crate::{Error, Result};

// ─── Authors ─────────────────────────────────────────────────────────────────

/// The three fixed reviewer identities. No other author may attach a review
/// to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
  Sena,
  Hanne,
  Merve,
}

impl Author {
  pub const ALL: [Author; 3] = [Author::Sena, Author::Hanne, Author::Merve];

  /// The wire prefix for this author's flat fields.
  pub fn key(self) -> &'static str {
    match self {
      Self::Sena => "sena",
      Self::Hanne => "hanne",
      Self::Merve => "merve",
    }
  }
}

// ─── Review ──────────────────────────────────────────────────────────────────

/// One author's review sub-state. The all-empty value is the "no review yet"
/// state, so adding and later clearing a review round-trips to a record
/// indistinguishable from one that never had it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
  pub review:    String,
  pub mood:      String,
  /// 0 means "no rating given"; 1-5 are star ratings.
  pub rating:    u8,
  pub highlight: String,
  pub photo:     String,
}

impl Review {
  pub fn is_empty(&self) -> bool {
    self.review.is_empty()
      && self.mood.is_empty()
      && self.rating == 0
      && self.highlight.is_empty()
      && self.photo.is_empty()
  }
}

// ─── ReviewSet ───────────────────────────────────────────────────────────────

/// Fixed mapping from the three author keys to their review sub-records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSet {
  pub sena:  Review,
  pub hanne: Review,
  pub merve: Review,
}

impl ReviewSet {
  pub fn get(&self, author: Author) -> &Review {
    match author {
      Author::Sena => &self.sena,
      Author::Hanne => &self.hanne,
      Author::Merve => &self.merve,
    }
  }

  pub fn get_mut(&mut self, author: Author) -> &mut Review {
    match author {
      Author::Sena => &mut self.sena,
      Author::Hanne => &mut self.hanne,
      Author::Merve => &mut self.merve,
    }
  }
}

// ─── ReviewSetPatch ──────────────────────────────────────────────────────────

/// Patch counterpart of [`ReviewSet`]: one optional slot per flat wire
/// field. Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSetPatch {
  pub sena_review:     Option<String>,
  pub sena_mood:       Option<String>,
  pub sena_rating:     Option<u8>,
  pub sena_highlight:  Option<String>,
  pub sena_photo:      Option<String>,
  pub hanne_review:    Option<String>,
  pub hanne_mood:      Option<String>,
  pub hanne_rating:    Option<u8>,
  pub hanne_highlight: Option<String>,
  pub hanne_photo:     Option<String>,
  pub merve_review:    Option<String>,
  pub merve_mood:      Option<String>,
  pub merve_rating:    Option<u8>,
  pub merve_highlight: Option<String>,
  pub merve_photo:     Option<String>,
}

impl ReviewSetPatch {
  /// Every rating present in the patch must be within 0-5.
  pub fn validate(&self) -> Result<()> {
    for rating in [self.sena_rating, self.hanne_rating, self.merve_rating]
      .into_iter()
      .flatten()
    {
      if rating > 5 {
        return Err(Error::RatingOutOfRange(rating));
      }
    }
    Ok(())
  }

  /// Overwrite exactly the slots present in the patch.
  pub fn apply(&self, set: &mut ReviewSet) {
    fn put(slot: &mut String, value: &Option<String>) {
      if let Some(v) = value {
        slot.clone_from(v);
      }
    }

    put(&mut set.sena.review, &self.sena_review);
    put(&mut set.sena.mood, &self.sena_mood);
    put(&mut set.sena.highlight, &self.sena_highlight);
    put(&mut set.sena.photo, &self.sena_photo);
    if let Some(r) = self.sena_rating {
      set.sena.rating = r;
    }

    put(&mut set.hanne.review, &self.hanne_review);
    put(&mut set.hanne.mood, &self.hanne_mood);
    put(&mut set.hanne.highlight, &self.hanne_highlight);
    put(&mut set.hanne.photo, &self.hanne_photo);
    if let Some(r) = self.hanne_rating {
      set.hanne.rating = r;
    }

    put(&mut set.merve.review, &self.merve_review);
    put(&mut set.merve.mood, &self.merve_mood);
    put(&mut set.merve.highlight, &self.merve_highlight);
    put(&mut set.merve.photo, &self.merve_photo);
    if let Some(r) = self.merve_rating {
      set.merve.rating = r;
    }
  }
}

// ─── Wire flattening ─────────────────────────────────────────────────────────

impl Serialize for ReviewSet {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(15))?;
    for author in Author::ALL {
      let key = author.key();
      let review = self.get(author);
      map.serialize_entry(&format!("{key}Review"), &review.review)?;
      map.serialize_entry(&format!("{key}Mood"), &review.mood)?;
      map.serialize_entry(&format!("{key}Rating"), &review.rating)?;
      map.serialize_entry(&format!("{key}Highlight"), &review.highlight)?;
      map.serialize_entry(&format!("{key}Photo"), &review.photo)?;
    }
    map.end()
  }
}

impl<'de> Deserialize<'de> for ReviewSet {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    // Deserialise the flat wire fields, then assemble the fixed mapping.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Flat {
      #[serde(default)]
      sena_review:     String,
      #[serde(default)]
      sena_mood:       String,
      #[serde(default)]
      sena_rating:     u8,
      #[serde(default)]
      sena_highlight:  String,
      #[serde(default)]
      sena_photo:      String,
      #[serde(default)]
      hanne_review:    String,
      #[serde(default)]
      hanne_mood:      String,
      #[serde(default)]
      hanne_rating:    u8,
      #[serde(default)]
      hanne_highlight: String,
      #[serde(default)]
      hanne_photo:     String,
      #[serde(default)]
      merve_review:    String,
      #[serde(default)]
      merve_mood:      String,
      #[serde(default)]
      merve_rating:    u8,
      #[serde(default)]
      merve_highlight: String,
      #[serde(default)]
      merve_photo:     String,
    }

    let f = Flat::deserialize(deserializer)?;
    Ok(ReviewSet {
      sena:  Review {
        review:    f.sena_review,
        mood:      f.sena_mood,
        rating:    f.sena_rating,
        highlight: f.sena_highlight,
        photo:     f.sena_photo,
      },
      hanne: Review {
        review:    f.hanne_review,
        mood:      f.hanne_mood,
        rating:    f.hanne_rating,
        highlight: f.hanne_highlight,
        photo:     f.hanne_photo,
      },
      merve: Review {
        review:    f.merve_review,
        mood:      f.merve_mood,
        rating:    f.merve_rating,
        highlight: f.merve_highlight,
        photo:     f.merve_photo,
      },
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serialises_to_the_flat_wire_fields() {
    let mut set = ReviewSet::default();
    set.sena.review = "harika".into();
    set.sena.rating = 5;

    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["senaReview"], "harika");
    assert_eq!(json["senaRating"], 5);
    assert_eq!(json["hanneReview"], "");
    assert_eq!(json["merveRating"], 0);
    // Flat naming only; no nested author objects.
    assert!(json.get("sena").is_none());
    assert_eq!(json.as_object().unwrap().len(), 15);
  }

  #[test]
  fn deserialises_missing_fields_to_empty() {
    let set: ReviewSet =
      serde_json::from_value(serde_json::json!({ "hanneMood": "🤩" })).unwrap();
    assert_eq!(set.hanne.mood, "🤩");
    assert!(set.sena.is_empty());
    assert!(set.merve.is_empty());
  }

  #[test]
  fn patch_rejects_out_of_range_rating() {
    let patch: ReviewSetPatch =
      serde_json::from_value(serde_json::json!({ "merveRating": 6 })).unwrap();
    assert!(matches!(
      patch.validate(),
      Err(Error::RatingOutOfRange(6))
    ));
  }

  #[test]
  fn patch_applies_only_present_slots() {
    let mut set = ReviewSet::default();
    set.sena.review = "original".into();
    set.sena.mood = "🙂".into();

    let patch: ReviewSetPatch =
      serde_json::from_value(serde_json::json!({ "senaReview": "edited" }))
        .unwrap();
    patch.apply(&mut set);

    assert_eq!(set.sena.review, "edited");
    assert_eq!(set.sena.mood, "🙂");
  }
}
