//! Key filter behavior against the authoritative fixtures.

use super::common::FILTER_FIXTURES;
use guardex::{filter_keys, is_denied_key, KeyError, SafeKey, DENIED_KEYS};

#[test]
fn fixtures_filter_exactly_as_specified() {
    for (input, expected) in FILTER_FIXTURES {
        let output = filter_keys(input.to_vec());
        assert_eq!(&output, expected, "input: {:?}", input);
    }
}

#[test]
fn duplicates_of_surviving_keys_are_preserved() {
    let output = filter_keys(vec!["a", "__proto__", "a", "b", "a"]);
    assert_eq!(output, vec!["a", "a", "b", "a"]);
}

#[test]
fn filtering_is_idempotent_on_every_fixture() {
    for (input, _) in FILTER_FIXTURES {
        let once = filter_keys(input.to_vec());
        let twice = filter_keys(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn input_sequence_is_not_mutated() {
    let input = vec!["a".to_string(), "prototype".to_string()];
    let output = filter_keys(input.iter().map(String::as_str));
    assert_eq!(output, vec!["a"]);
    // The owned sequence is still intact.
    assert_eq!(input, vec!["a", "prototype"]);
}

#[test]
fn denylist_has_exactly_the_three_documented_entries() {
    assert_eq!(DENIED_KEYS, ["__proto__", "prototype", "constructor"]);
    for key in DENIED_KEYS {
        assert!(is_denied_key(key));
    }
}

#[test]
fn owned_and_borrowed_keys_both_filter() {
    let owned: Vec<String> = vec!["x".into(), "constructor".into()];
    assert_eq!(filter_keys(owned), vec!["x".to_string()]);
    assert_eq!(filter_keys(["x", "constructor"]), vec!["x"]);
}

#[test]
fn safe_keys_pass_the_filter_untouched() {
    let keys: Vec<SafeKey> = ["id", "title", "href"]
        .into_iter()
        .map(|key| SafeKey::new(key).unwrap())
        .collect();
    let filtered = filter_keys(keys.clone());
    assert_eq!(filtered, keys);
}

#[test]
fn safe_key_reports_the_offending_name() {
    match SafeKey::new("prototype") {
        Err(KeyError::Denied { key }) => assert_eq!(key, "prototype"),
        other => panic!("expected denial, got {:?}", other),
    }
}

#[cfg(feature = "json")]
#[test]
fn sanitize_object_matches_filter_keys_semantics() {
    use guardex::sanitize_object;
    use serde_json::{json, Map};

    let mut object = Map::new();
    object.insert("safe".to_string(), json!("value"));
    for key in DENIED_KEYS {
        object.insert(key.to_string(), json!("polluted"));
    }

    let clean = sanitize_object(object);
    assert_eq!(clean.len(), 1);
    assert!(clean.contains_key("safe"));
}
