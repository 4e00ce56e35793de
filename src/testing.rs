//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

#[cfg(feature = "json")]
use crate::classify::Classified;
#[cfg(feature = "json")]
use crate::narrow::{classify_object, str_field};
#[cfg(feature = "json")]
use serde_json::{json, Value};

/// The role union used by the canonical user fixture.
pub const ROLES: [&str; 3] = ["regular user", "moderator", "administrator"];

/// A narrowed user, as extracted from untrusted JSON.
#[cfg(feature = "json")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestUser {
    pub username: String,
    pub role: String,
}

/// Build a JSON user object.
#[cfg(feature = "json")]
pub fn user_value(username: &str, role: &str) -> Value {
    json!({ "username": username, "role": role })
}

/// Canonical user classifier: object with a string `username` and a `role`
/// drawn from [`ROLES`]. Everything else is handed back.
#[cfg(feature = "json")]
pub fn classify_user(value: Value) -> Classified<TestUser, Value> {
    let object = match classify_object(value) {
        Classified::Match(object) => object,
        Classified::NoMatch(value) => return Classified::NoMatch(value),
    };
    match (str_field(&object, "username"), str_field(&object, "role")) {
        (Some(username), Some(role)) if ROLES.contains(&role) => Classified::Match(TestUser {
            username: username.to_string(),
            role: role.to_string(),
        }),
        _ => Classified::NoMatch(Value::Object(object)),
    }
}
