use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address reduced to the form the avatar service keys on.
///
/// Never absent: missing or blank input normalizes to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn normalize_email(value: Option<&str>) -> NormalizedEmail {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return NormalizedEmail::default();
    }
    NormalizedEmail(lowercase_invariant(trimmed))
}

/// Simple per-character lower-casing: no final-sigma rule, and no
/// character ever expands into several.
fn lowercase_invariant(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            // Full mapping would yield `i` followed by U+0307.
            '\u{130}' => out.push('i'),
            ch => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Lowercase hex MD5 of a normalized email. An opaque lookup key, not a
/// security primitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailHash(String);

impl EmailHash {
    pub const EMPTY: &'static str = "d41d8cd98f00b204e9800998ecf8427e";

    pub fn of(email: &NormalizedEmail) -> Self {
        let digest = Md5::digest(email.as_str().as_bytes());
        Self(hex::encode(digest))
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

pub fn hash_email(value: Option<&str>) -> EmailHash {
    EmailHash::of(&normalize_email(value))
}
