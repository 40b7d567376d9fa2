use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a raw tag string.
///
/// Lowercase, trim, then replace every character outside `[a-z0-9-]` with
/// `-`. Total and idempotent; the output always matches `^[a-z0-9-]*$`
/// (possibly empty).
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '-',
        })
        .collect()
}

/// A normalized tag.
///
/// Construction always normalizes, so a `Tag` never holds anything outside
/// `[a-z0-9-]`. Deserialization is verbatim: persisted tags were normalized
/// when they were written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Self {
        Tag(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
