//! Classification outcomes and the strict predicate wrapper.
//!
//! A classification function inspects a wide value and either narrows it or
//! hands the original back untouched. The outcome is a nominal sum type, so
//! "no match" can never collide with a legitimate domain value — there is no
//! magic sentinel to forge and no `null` to confuse with real data.
//!
//! # Invariants
//!
//! - A classification function is invoked exactly once per [`predicate`]
//!   call. No caching, no re-evaluation.
//! - Panics inside a classification function propagate unchanged. Expected
//!   "no match" outcomes are values, not unwinds.

use std::fmt;

/// The outcome of classifying a wide value.
///
/// `Match` carries the narrowed value; `NoMatch` carries the original wide
/// value back to the caller, since no extraction occurred. Returning the
/// input on failure is what lets [`crate::dispatch`] hand the untouched
/// value to its fallback producer without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified<N, W> {
    /// Classification succeeded.
    Match(N),
    /// Classification failed; the original value is handed back.
    NoMatch(W),
}

impl<N, W> Classified<N, W> {
    /// True if classification succeeded.
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Classified::Match(_))
    }

    /// True if classification failed.
    #[inline]
    pub fn is_no_match(&self) -> bool {
        !self.is_match()
    }

    /// The narrowed value, if any.
    #[inline]
    pub fn into_match(self) -> Option<N> {
        match self {
            Classified::Match(narrow) => Some(narrow),
            Classified::NoMatch(_) => None,
        }
    }

    /// The original wide value, if classification failed.
    #[inline]
    pub fn into_wide(self) -> Option<W> {
        match self {
            Classified::Match(_) => None,
            Classified::NoMatch(wide) => Some(wide),
        }
    }

    /// Borrow both sides.
    #[inline]
    pub fn as_ref(&self) -> Classified<&N, &W> {
        match self {
            Classified::Match(narrow) => Classified::Match(narrow),
            Classified::NoMatch(wide) => Classified::NoMatch(wide),
        }
    }

    /// Map the narrowed side, leaving a failed outcome untouched.
    #[inline]
    pub fn map<M>(self, f: impl FnOnce(N) -> M) -> Classified<M, W> {
        match self {
            Classified::Match(narrow) => Classified::Match(f(narrow)),
            Classified::NoMatch(wide) => Classified::NoMatch(wide),
        }
    }

    /// Map the handed-back side, leaving a successful outcome untouched.
    #[inline]
    pub fn map_wide<V>(self, f: impl FnOnce(W) -> V) -> Classified<N, V> {
        match self {
            Classified::Match(narrow) => Classified::Match(narrow),
            Classified::NoMatch(wide) => Classified::NoMatch(f(wide)),
        }
    }

    /// View the outcome as a `Result`, with `NoMatch` on the error side.
    #[inline]
    pub fn into_result(self) -> Result<N, W> {
        match self {
            Classified::Match(narrow) => Ok(narrow),
            Classified::NoMatch(wide) => Err(wide),
        }
    }
}

impl<N, W> From<Result<N, W>> for Classified<N, W> {
    fn from(result: Result<N, W>) -> Self {
        match result {
            Ok(narrow) => Classified::Match(narrow),
            Err(wide) => Classified::NoMatch(wide),
        }
    }
}

impl<N: fmt::Display, W: fmt::Display> fmt::Display for Classified<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classified::Match(narrow) => write!(f, "match: {}", narrow),
            Classified::NoMatch(wide) => write!(f, "no match: {}", wide),
        }
    }
}

// ============================================================================
// STRICT PREDICATE
// ============================================================================

/// Wrap a classification function into a boolean predicate.
///
/// The returned closure invokes `classify` exactly once per call and returns
/// `true` iff the outcome is [`Classified::Match`]. The narrowed value is
/// discarded; use [`crate::dispatch`] when it is needed.
///
/// Dynamically typed renditions of this pattern need a separate "strict"
/// constructor to force the declared return type to cover exactly
/// `Narrow | Sentinel`. Here the return type of `classify` already is
/// exactly that set, and `match` exhaustiveness is compiler-enforced, so
/// no strict variant exists.
///
/// # Example
///
/// ```
/// use guardex::{predicate, Classified};
///
/// let is_even = predicate(|n: u32| {
///     if n % 2 == 0 { Classified::Match(n) } else { Classified::NoMatch(n) }
/// });
/// assert!(is_even(4));
/// assert!(!is_even(3));
/// ```
pub fn predicate<W, N, F>(classify: F) -> impl Fn(W) -> bool
where
    F: Fn(W) -> Classified<N, W>,
{
    move |value| classify(value).is_match()
}

/// Classify by membership in a fixed set of allowed values.
///
/// The returned classifier matches iff the value equals one of `allowed`,
/// handing the value back otherwise. This is the typed rendering of an
/// `includes`-style guard over a literal union.
///
/// ```
/// use guardex::{member_of, Classified};
///
/// let entry_type = member_of(&["a", "b", "c"]);
/// assert_eq!(entry_type("b"), Classified::Match("b"));
/// assert_eq!(entry_type("outer"), Classified::NoMatch("outer"));
/// ```
pub fn member_of<T: PartialEq>(allowed: &[T]) -> impl Fn(T) -> Classified<T, T> + '_ {
    move |value| {
        if allowed.contains(&value) {
            Classified::Match(value)
        } else {
            Classified::NoMatch(value)
        }
    }
}
