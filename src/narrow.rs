//! Narrowing untrusted JSON values into typed shapes.
//!
//! Dynamic targets narrow an unknown value by runtime field probing. The
//! typed rendering is a tagged union over JSON-like primitives —
//! [`serde_json::Value`] — plus classification functions that either extract
//! the typed payload or hand the value back. Struct classifiers compose out
//! of the primitive ones and the field helpers below.
//!
//! # Example
//!
//! ```
//! use guardex::narrow::{classify_object, str_field};
//! use guardex::{predicate, Classified};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     username: String,
//!     role: String,
//! }
//!
//! fn classify_user(value: serde_json::Value) -> Classified<User, serde_json::Value> {
//!     let object = match classify_object(value) {
//!         Classified::Match(object) => object,
//!         Classified::NoMatch(value) => return Classified::NoMatch(value),
//!     };
//!     let user = match (str_field(&object, "username"), str_field(&object, "role")) {
//!         (Some(username), Some(role))
//!             if ["regular user", "moderator", "administrator"].contains(&role) =>
//!         {
//!             User { username: username.to_string(), role: role.to_string() }
//!         }
//!         _ => return Classified::NoMatch(serde_json::Value::Object(object)),
//!     };
//!     Classified::Match(user)
//! }
//!
//! let is_user = predicate(classify_user);
//! assert!(is_user(json!({"username": "Ramsey", "role": "moderator"})));
//! assert!(!is_user(json!({"username": "Ramsey", "role": "intruder"})));
//! assert!(!is_user(json!(42)));
//! ```

use crate::classify::Classified;
use serde_json::{Map, Value};

// ============================================================================
// PRIMITIVE CLASSIFIERS
// ============================================================================

/// Narrow to a JSON object, handing anything else back.
pub fn classify_object(value: Value) -> Classified<Map<String, Value>, Value> {
    match value {
        Value::Object(object) => Classified::Match(object),
        other => Classified::NoMatch(other),
    }
}

/// Narrow to a JSON array.
pub fn classify_array(value: Value) -> Classified<Vec<Value>, Value> {
    match value {
        Value::Array(items) => Classified::Match(items),
        other => Classified::NoMatch(other),
    }
}

/// Narrow to a string.
pub fn classify_string(value: Value) -> Classified<String, Value> {
    match value {
        Value::String(text) => Classified::Match(text),
        other => Classified::NoMatch(other),
    }
}

/// Narrow to a boolean.
pub fn classify_bool(value: Value) -> Classified<bool, Value> {
    match value {
        Value::Bool(flag) => Classified::Match(flag),
        other => Classified::NoMatch(other),
    }
}

/// Narrow to a signed integer. Numbers outside the `i64` range (or with a
/// fractional part) are handed back.
pub fn classify_i64(value: Value) -> Classified<i64, Value> {
    match value.as_i64() {
        Some(n) => Classified::Match(n),
        None => Classified::NoMatch(value),
    }
}

/// Narrow to an unsigned integer.
pub fn classify_u64(value: Value) -> Classified<u64, Value> {
    match value.as_u64() {
        Some(n) => Classified::Match(n),
        None => Classified::NoMatch(value),
    }
}

/// Narrow to a float. Any JSON number matches.
pub fn classify_f64(value: Value) -> Classified<f64, Value> {
    match value.as_f64() {
        Some(n) => Classified::Match(n),
        None => Classified::NoMatch(value),
    }
}

// ============================================================================
// FIELD PROBES
// ============================================================================

/// A string field of an object, if present and a string.
#[inline]
pub fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// An `i64` field of an object.
#[inline]
pub fn i64_field(object: &Map<String, Value>, key: &str) -> Option<i64> {
    object.get(key).and_then(Value::as_i64)
}

/// A `u64` field of an object.
#[inline]
pub fn u64_field(object: &Map<String, Value>, key: &str) -> Option<u64> {
    object.get(key).and_then(Value::as_u64)
}

/// An `f64` field of an object.
#[inline]
pub fn f64_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

/// A boolean field of an object.
#[inline]
pub fn bool_field(object: &Map<String, Value>, key: &str) -> Option<bool> {
    object.get(key).and_then(Value::as_bool)
}
