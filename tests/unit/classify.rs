//! Predicate wrapper and classification outcome behavior.

use guardex::{member_of, predicate, Classified};
use std::cell::Cell;

fn classify_nonempty(text: &str) -> Classified<&str, &str> {
    if text.is_empty() {
        Classified::NoMatch(text)
    } else {
        Classified::Match(text)
    }
}

#[test]
fn predicate_is_true_exactly_when_classification_matches() {
    let has_content = predicate(classify_nonempty);
    assert!(has_content("x"));
    assert!(!has_content(""));
}

#[test]
fn each_predicate_call_evaluates_the_classifier_once() {
    let calls = Cell::new(0usize);
    let check = predicate(|n: u8| {
        calls.set(calls.get() + 1);
        if n == 0 {
            Classified::Match(n)
        } else {
            Classified::NoMatch(n)
        }
    });

    for (i, input) in [0u8, 1, 0, 0, 255].into_iter().enumerate() {
        check(input);
        assert_eq!(calls.get(), i + 1);
    }
}

#[test]
#[should_panic(expected = "classifier failure")]
fn classifier_panics_propagate_unwrapped() {
    let check = predicate(|_: u8| -> Classified<u8, u8> { panic!("classifier failure") });
    check(1);
}

#[test]
fn member_of_narrows_a_literal_union() {
    let entry_type = member_of(&['a', 'b', 'c']);
    assert_eq!(entry_type('b'), Classified::Match('b'));
    assert_eq!(entry_type('z'), Classified::NoMatch('z'));
}

#[test]
fn outcome_combinators_preserve_the_failed_side() {
    let outcome: Classified<u8, &str> = Classified::NoMatch("raw");
    assert_eq!(outcome.map(|n| n + 1), Classified::NoMatch("raw"));
    assert_eq!(
        Classified::<u8, &str>::NoMatch("raw").map_wide(str::len),
        Classified::NoMatch(3)
    );
}

#[test]
fn outcome_converts_to_result_and_back() {
    let hit: Classified<u8, &str> = Classified::Match(7);
    assert_eq!(hit.into_result(), Ok(7));
    let miss: Classified<u8, &str> = Result::Err("raw").into();
    assert_eq!(miss, Classified::NoMatch("raw"));
}
