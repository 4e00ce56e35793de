//! Sentinel-style classification guards and prototype-pollution-safe key
//! filtering.
//!
//! A *classification function* inspects a wide value and either returns a
//! narrowed result or hands the original value back. This crate turns such
//! functions into boolean predicates, dispatches on their outcome, and —
//! on the sanitization side — strips property names that would alias object
//! internals when untrusted keys are copied onto a plain object.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ classify.rs  │────▶│ dispatch.rs  │     │   keys.rs    │
//! │ (Classified, │     │  (dispatch)  │     │ (filter_keys,│
//! │  predicate)  │     │              │     │   SafeKey)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────┐                         ┌──────────────┐
//! │  narrow.rs   │                         │ contracts.rs │
//! │ (JSON value  │                         │ (debug-mode  │
//! │  narrowing)  │                         │  checks)     │
//! └──────────────┘                         └──────────────┘
//! ```
//!
//! # Guarantees
//!
//! - "No match" is a nominal enum variant, not `None`, `null`, or a magic
//!   string — it cannot collide with legitimate domain data, and `NoMatch`
//!   carries the original value back so nothing is lost or cloned.
//! - A classification function runs exactly once per [`predicate`] or
//!   [`dispatch`] call. Panics in caller-supplied callbacks are never
//!   caught or wrapped.
//! - [`filter_keys`] preserves order and duplicates of surviving keys, is
//!   idempotent, and never fails.
//!
//! Everything here is synchronous and stateless; every function is freely
//! reentrant from any thread.
//!
//! # Usage
//!
//! ```
//! use guardex::{dispatch, filter_keys, predicate, Classified};
//!
//! let is_even = predicate(|n: u32| {
//!     if n % 2 == 0 { Classified::Match(n) } else { Classified::NoMatch(n) }
//! });
//! assert!(is_even(4));
//!
//! let keys = filter_keys(vec!["title", "__proto__", "author"]);
//! assert_eq!(keys, vec!["title", "author"]);
//! ```

// Module declarations
mod classify;
pub mod contracts;
mod dispatch;
mod keys;
#[cfg(feature = "json")]
pub mod narrow;
pub mod testing;

// Re-exports for public API
pub use classify::{member_of, predicate, Classified};
pub use dispatch::dispatch;
#[cfg(feature = "json")]
pub use keys::sanitize_object;
pub use keys::{filter_keys, is_denied_key, KeyError, SafeKey, DENIED_KEYS};
