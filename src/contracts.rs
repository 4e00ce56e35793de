//! Debug-mode contract checks.
//!
//! These assertions mirror the testable properties of the key filter and
//! classification helpers. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                |
//! |------------------------------|-----------------------------------------|
//! | `check_keys_clean`           | no denylisted key in filtered output    |
//! | `check_retained_subsequence` | filter output is a subsequence of input |

use crate::keys::{is_denied_key, DENIED_KEYS};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Byte-wise string equality usable in const context.
const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Static assertion that the denylist is non-empty, free of empty strings,
/// and duplicate-free. If this fails, the crate won't build.
const _: () = {
    assert!(!DENIED_KEYS.is_empty());
    let mut i = 0;
    while i < DENIED_KEYS.len() {
        assert!(!DENIED_KEYS[i].is_empty());
        let mut j = i + 1;
        while j < DENIED_KEYS.len() {
            assert!(!str_eq(DENIED_KEYS[i], DENIED_KEYS[j]));
            j += 1;
        }
        i += 1;
    }
};

// ============================================================================
// KEY FILTER CONTRACTS
// ============================================================================

/// Check that no denylisted key survived filtering.
///
/// # Panics (debug builds only)
/// Panics if any key is on the denylist.
#[inline]
pub fn check_keys_clean<'a>(keys: impl IntoIterator<Item = &'a str>) {
    for (i, key) in keys.into_iter().enumerate() {
        debug_assert!(
            !is_denied_key(key),
            "Contract violation: denylisted key '{}' at position {} in filtered output",
            key,
            i
        );
    }
}

/// Check that `output` is a subsequence of `input` (order preserved, no
/// invented keys).
///
/// # Panics (debug builds only)
/// Panics if any output key cannot be matched, in order, against the input.
#[inline]
pub fn check_retained_subsequence(input: &[&str], output: &[&str]) {
    let mut cursor = 0;
    for key in output {
        let found = input[cursor..].iter().position(|candidate| candidate == key);
        match found {
            Some(offset) => cursor += offset + 1,
            None => debug_assert!(
                false,
                "Contract violation: filtered key '{}' is not a subsequence match of the input",
                key
            ),
        }
    }
}
