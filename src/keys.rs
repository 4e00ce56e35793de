//! Prototype-pollution-safe key filtering.
//!
//! Attacker-controlled key names copied onto a plain object can alias or
//! shadow object internals in dynamic targets (`__proto__`, `prototype`,
//! `constructor`). Any key sequence used to build a map from untrusted input
//! should pass through [`filter_keys`] first, or be carried as [`SafeKey`]
//! so the check cannot be forgotten.
//!
//! # Invariants
//!
//! - The denylist is fixed for the process lifetime and matched exactly,
//!   case-sensitively. Near misses (`proto`, `_proto_`, `__proto`) pass.
//! - Filtering preserves the order and duplicates of surviving keys and
//!   never mutates its input.
//! - A [`SafeKey`] is proven non-denylisted at construction and stays so.

use crate::contracts;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Property names excluded from all filtered output.
///
/// Exact literal set; matching is case-sensitive, whole-string equality.
pub const DENIED_KEYS: [&str; 3] = ["__proto__", "prototype", "constructor"];

/// True if `key` is on the denylist.
#[inline]
pub fn is_denied_key(key: &str) -> bool {
    DENIED_KEYS.contains(&key)
}

/// Drop denylisted keys from a sequence.
///
/// Order and duplicates of surviving keys are preserved; the input sequence
/// is consumed, not mutated in place. Linear in the number of keys; never
/// fails, including on empty input. Idempotent: filtering a filtered
/// sequence is a no-op.
///
/// # Example
///
/// ```
/// use guardex::filter_keys;
///
/// let keys = filter_keys(vec!["a", "__proto__", "b", "a"]);
/// assert_eq!(keys, vec!["a", "b", "a"]);
/// ```
pub fn filter_keys<I, S>(keys: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let retained: Vec<S> = keys
        .into_iter()
        .filter(|key| !is_denied_key(key.as_ref()))
        .collect();
    contracts::check_keys_clean(retained.iter().map(AsRef::as_ref));
    retained
}

// ============================================================================
// VALIDATED KEY
// ============================================================================

/// Error type for key validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key is on the prototype-pollution denylist.
    Denied { key: String },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Denied { key } => {
                write!(f, "key '{}' is on the prototype-pollution denylist", key)
            }
        }
    }
}

impl std::error::Error for KeyError {}

/// A key proven not to be on the denylist.
///
/// Instead of hoping every call site remembered [`filter_keys`], wrap keys
/// in this type. The check is paid once at construction and the guarantee
/// holds forever after; APIs taking `SafeKey` cannot be handed
/// `"__proto__"`.
///
/// Deserialization validates, so untrusted wire input cannot smuggle a
/// denied key through serde either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SafeKey(String);

impl SafeKey {
    /// Validate a key, rejecting denylisted names.
    pub fn new(key: impl Into<String>) -> Result<Self, KeyError> {
        let key = key.into();
        if is_denied_key(&key) {
            return Err(KeyError::Denied { key });
        }
        Ok(SafeKey(key))
    }

    /// The key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying `String`.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SafeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SafeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SafeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        SafeKey::new(key).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// OBJECT SANITIZATION
// ============================================================================

/// Remove denylisted keys from a JSON object.
///
/// This is the denylist applied at the point that motivates it: populating a
/// plain object from untrusted input. Surviving entries keep their relative
/// order; values are moved, not cloned.
#[cfg(feature = "json")]
pub fn sanitize_object(
    object: serde_json::Map<String, serde_json::Value>,
) -> serde_json::Map<String, serde_json::Value> {
    object
        .into_iter()
        .filter(|(key, _)| !is_denied_key(key))
        .collect()
}
