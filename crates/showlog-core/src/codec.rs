//! The photo-list codec.
//!
//! Photos travel on the wire as a single text field: an ordered sequence of
//! opaque strings (URLs or embedded data URIs) joined with a fixed delimiter.
//! Clients built against the original wire contract depend on that exact
//! encoding. All delimiter logic lives in this module; the rest of the crate
//! works with [`PhotoList`], a proper ordered sequence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between entries inside the packed field. Multi-character so it
/// cannot appear inside a URL or data URI.
pub const PHOTO_DELIMITER: &str = "|||";

/// Join entries into the packed wire field. An empty sequence encodes to the
/// empty string.
pub fn encode_photo_list(items: &[String]) -> String {
  items.join(PHOTO_DELIMITER)
}

/// Split a packed field back into entries, dropping empty and
/// whitespace-only ones and preserving the order of the rest.
///
/// Photo strings are untrusted opaque data, so stray delimiters degrade to a
/// best-effort split rather than an error.
pub fn decode_photo_list(raw: &str) -> Vec<String> {
  raw
    .split(PHOTO_DELIMITER)
    .filter(|entry| !entry.trim().is_empty())
    .map(str::to_string)
    .collect()
}

/// An ordered photo collection. Serialises as the packed delimiter field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoList(pub Vec<String>);

impl PhotoList {
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }
}

impl From<Vec<String>> for PhotoList {
  fn from(items: Vec<String>) -> Self {
    Self(items)
  }
}

impl Serialize for PhotoList {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode_photo_list(&self.0))
  }
}

impl<'de> Deserialize<'de> for PhotoList {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(Self(decode_photo_list(&raw)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip_preserves_order() {
    let xs = vec![
      "https://example.com/a.jpg".to_string(),
      "data:image/png;base64,AAAA".to_string(),
      "https://example.com/b.jpg".to_string(),
    ];
    assert_eq!(decode_photo_list(&encode_photo_list(&xs)), xs);
  }

  #[test]
  fn empty_sequence_encodes_to_empty_string() {
    assert_eq!(encode_photo_list(&[]), "");
    assert!(decode_photo_list("").is_empty());
  }

  #[test]
  fn blank_entries_are_dropped() {
    let decoded = decode_photo_list("a||| |||b||||||c");
    assert_eq!(decoded, vec!["a", "b", "c"]);
  }

  #[test]
  fn single_entry_has_no_delimiter() {
    let xs = vec!["https://example.com/only.jpg".to_string()];
    let encoded = encode_photo_list(&xs);
    assert!(!encoded.contains(PHOTO_DELIMITER));
    assert_eq!(decode_photo_list(&encoded), xs);
  }

  #[test]
  fn photo_list_serialises_as_packed_string() {
    let list = PhotoList(vec!["a".into(), "b".into()]);
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json, serde_json::json!("a|||b"));

    let back: PhotoList = serde_json::from_value(json).unwrap();
    assert_eq!(back, list);
  }
}
