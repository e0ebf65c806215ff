use std::borrow::Cow;
use std::sync::Arc;

use sandbox::error::SearchError;
use sandbox::search::{SearchItem, search_string};
use serde_json::json;

const ITEMS: [&str; 4] = ["Alpha", "beta", "Gamma", "alphabet"];

#[test]
fn test_substring_match_keeps_pool_order() {
    assert_eq!(search_string(&ITEMS, "be").unwrap(), ["beta", "alphabet"]);
    assert_eq!(search_string(&ITEMS, "alpha").unwrap(), ["Alpha", "alphabet"]);
}

#[test]
fn test_blank_query_matches_nothing() {
    assert!(search_string(&ITEMS, "").unwrap().is_empty());
    assert!(search_string(&ITEMS, "  ").unwrap().is_empty());
    assert!(search_string(&ITEMS, "\t\n").unwrap().is_empty());
}

#[test]
fn test_query_is_trimmed_and_case_insensitive() {
    assert_eq!(search_string(&ITEMS, "GAMMA").unwrap(), ["Gamma"]);
    assert_eq!(search_string(&ITEMS, "  gAm ").unwrap(), ["Gamma"]);
}

#[test]
fn test_no_match() {
    assert!(search_string(&ITEMS, "zeta").unwrap().is_empty());
}

#[test]
fn test_unicode_case_folding() {
    let riders = ["Tadej Pogačar", "Primož Roglič", "Jonas Vingegaard"];
    assert_eq!(search_string(&riders, "POGAČ").unwrap(), ["Tadej Pogačar"]);
    assert_eq!(search_string(&riders, "rogl").unwrap(), ["Primož Roglič"]);
}

#[test]
fn test_pool_is_not_mutated() {
    let pool = vec!["Alpha".to_string(), "beta".to_string()];
    let before = pool.clone();
    let _ = search_string(&pool, "a").unwrap();
    assert_eq!(pool, before);
}

#[test]
fn test_string_like_pools() {
    let owned: Vec<String> = ITEMS.iter().map(|s| s.to_string()).collect();
    assert_eq!(search_string(&owned, "be").unwrap(), ["beta", "alphabet"]);

    let cows: Vec<Cow<'_, str>> = ITEMS.iter().map(|s| Cow::Borrowed(*s)).collect();
    assert_eq!(search_string(&cows, "gam").unwrap(), ["Gamma"]);

    let shared: Vec<Arc<str>> = ITEMS.iter().map(|s| Arc::from(*s)).collect();
    assert_eq!(search_string(&shared, "ALPHA").unwrap(), ["Alpha", "alphabet"]);
}

#[test]
fn test_non_text_entry_fails() {
    let pool = vec![json!("apple"), json!(42), json!("banana")];
    let err = search_string(&pool, "a").unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidInputKind {
            index: 1,
            kind: "number"
        }
    );
    assert_eq!(err.to_string(), "All items must be a string (item 1 is number)");
}

#[test]
fn test_non_text_entry_fails_even_for_blank_query() {
    let pool = vec![json!("apple"), json!(null)];
    assert!(matches!(
        search_string(&pool, ""),
        Err(SearchError::InvalidInputKind { index: 1, kind: "null" })
    ));
}

#[test]
fn test_json_text_entries_match() {
    let pool = vec![json!("apple"), json!("pineapple"), json!("banana")];
    assert_eq!(search_string(&pool, "apple").unwrap(), ["apple", "pineapple"]);
}

#[test]
fn test_kind_names() {
    assert_eq!(json!(true).kind_name(), "boolean");
    assert_eq!(json!([1]).kind_name(), "array");
    assert_eq!(json!({"a": 1}).kind_name(), "object");
    assert_eq!("text".kind_name(), "string");
}
