use datehash::utils::text::*;
use regex::Regex;
use std::collections::HashMap;

#[test]
fn test_pad_zero_single_digits() {
    assert_eq!(pad_zero(0), "00");
    assert_eq!(pad_zero(5), "05");
    assert_eq!(pad_zero(9), "09");
}

#[test]
fn test_pad_zero_leaves_wider_numbers() {
    assert_eq!(pad_zero(10), "10");
    assert_eq!(pad_zero(12), "12");
    assert_eq!(pad_zero(123), "123");
}

#[test]
fn test_pad_zero_accepts_unsigned() {
    assert_eq!(pad_zero(7u32), "07");
}

#[test]
fn test_apply_template_substitutes_matches() {
    let pattern = Regex::new("yyyy|mm").unwrap();
    let mut map = HashMap::new();
    map.insert("yyyy", "2010");
    map.insert("mm", "05");
    assert_eq!(apply_template("yyyy.mm", &map, &pattern), "2010.05");
}

#[test]
fn test_apply_template_drops_unmapped_matches() {
    let pattern = Regex::new(r"\{\w+\}").unwrap();
    let mut map = HashMap::new();
    map.insert("{name}".to_string(), "May".to_string());
    assert_eq!(apply_template("{name} {missing}!", &map, &pattern), "May !");
}

#[test]
fn test_apply_template_without_matches() {
    let pattern = Regex::new("yyyy").unwrap();
    let map: HashMap<&str, &str> = HashMap::new();
    assert_eq!(apply_template("no tokens", &map, &pattern), "no tokens");
}

#[test]
fn test_apply_template_is_idempotent_on_its_output() {
    let pattern = Regex::new("yyyy|mm").unwrap();
    let mut map = HashMap::new();
    map.insert("yyyy", "2010");
    map.insert("mm", "05");

    let once = apply_template("yyyy-mm-dd", &map, &pattern);
    assert!(!pattern.is_match(&once));
    assert_eq!(apply_template(&once, &map, &pattern), once);
}
