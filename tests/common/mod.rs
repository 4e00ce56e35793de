//! Shared test utilities and fixtures.

#![allow(dead_code)]

pub use guardex::testing::ROLES;
#[cfg(feature = "json")]
pub use guardex::testing::{classify_user, user_value, TestUser};

// ============================================================================
// KEY FILTER FIXTURES
// ============================================================================

/// Authoritative key filter fixtures: `(input, expected output)`.
///
/// The near-miss rows matter: only exact, case-sensitive matches against the
/// denylist are removed.
pub const FILTER_FIXTURES: &[(&[&str], &[&str])] = &[
    (&[], &[]),
    (&["a", "b", "c"], &["a", "b", "c"]),
    (&["0", "1", "proto"], &["0", "1", "proto"]),
    (
        &["_proto_", "__proto", "_proto__"],
        &["_proto_", "__proto", "_proto__"],
    ),
    (&["a", "__proto__"], &["a"]),
    (&["__proto__", "prototype"], &[]),
    (&["constructor"], &[]),
];
