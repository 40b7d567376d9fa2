use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Privacy-preserving lookup key for an email address.
///
/// The address is canonicalized (trim, lowercase) before hashing, so lookups
/// are insensitive to case and surrounding whitespace. Rendered as 64
/// lowercase hex characters of a SHA-256 digest.
///
/// This is a lookup key, never a password mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailHash(String);

impl EmailHash {
    pub fn from_address(address: &str) -> Self {
        let canonical = address.trim().to_lowercase();

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let digest = hasher.finalize();

        EmailHash(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
