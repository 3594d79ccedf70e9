//! String helpers used when rendering calendar labels.

use regex::{Captures, Regex};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Prefix numbers below ten with a `0`.
///
/// `0..=9` become `"00"..="09"`, anything else is printed as is. Only
/// non-negative single digits are guaranteed two characters wide.
///
/// # Examples
/// ```
/// use datehash::utils::text::pad_zero;
/// assert_eq!(pad_zero(0), "00");
/// assert_eq!(pad_zero(9), "09");
/// assert_eq!(pad_zero(12), "12");
/// ```
#[must_use]
pub fn pad_zero<N: Into<i64>>(number: N) -> String {
    let number = number.into();
    let prefix = if number < 10 { "0" } else { "" };
    format!("{}{}", prefix, number)
}

/// Replace every match of `pattern` in `text` with its entry in `substitutions`.
///
/// Matches without an entry are removed, not left in place.
#[must_use]
pub fn apply_template<K, V>(text: &str, substitutions: &HashMap<K, V>, pattern: &Regex) -> String
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
{
    pattern
        .replace_all(text, |caps: &Captures| {
            substitutions
                .get(&caps[0])
                .map(|value| value.as_ref().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
