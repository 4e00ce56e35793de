//! Conditional dispatch on a classification outcome.

use crate::classify::Classified;

/// Classify a value and invoke exactly one of two producers.
///
/// `classify` runs exactly once. On [`Classified::Match`] the narrowed value
/// goes to `on_match`; on [`Classified::NoMatch`] the original, unrefined
/// value goes to `on_no_match`. Whichever producer runs, its return value is
/// this call's return value. Panics from any of the three callbacks
/// propagate to the caller unmodified.
///
/// The sentinel-return convention exists so the common "no match" path costs
/// a branch, not an unwind.
///
/// # Example
///
/// ```
/// use guardex::{dispatch, Classified};
///
/// let label = dispatch(
///     17u32,
///     |n| if n < 10 { Classified::Match(n) } else { Classified::NoMatch(n) },
///     |small| format!("small: {}", small),
///     |other| format!("large: {}", other),
/// );
/// assert_eq!(label, "large: 17");
/// ```
pub fn dispatch<W, N, R>(
    value: W,
    classify: impl FnOnce(W) -> Classified<N, W>,
    on_match: impl FnOnce(N) -> R,
    on_no_match: impl FnOnce(W) -> R,
) -> R {
    match classify(value) {
        Classified::Match(narrow) => on_match(narrow),
        Classified::NoMatch(wide) => on_no_match(wide),
    }
}
