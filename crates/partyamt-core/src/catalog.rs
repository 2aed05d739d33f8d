//! Tag catalog ordering for the filter panel.
//!
//! Names are compared the way a root-locale collator does, in three levels:
//! base letters first (case and accents ignored), then accents, then case
//! with lowercase before uppercase. The raw name breaks any remaining tie so
//! the order is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::Tag;

/// Sorts the catalog for display and drops duplicate names.
pub fn sort_catalog(mut tags: Vec<Tag>) -> Vec<Tag> {
    tags.sort_by(|a, b| collate(a.name(), b.name()));
    tags.dedup();
    tags
}

/// Compares two tag names in display order.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Base letters only: decomposed, marks dropped, lowercased.
fn primary_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for ch in name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        // Letters without a canonical decomposition.
        match ch {
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            'þ' => key.push_str("th"),
            'ø' => key.push('o'),
            'ł' => key.push('l'),
            'đ' | 'ð' => key.push('d'),
            'ı' => key.push('i'),
            other => key.push(other),
        }
    }
    key
}

/// Decomposed and lowercased with marks kept, so unaccented sorts first.
fn secondary_key(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

/// Lowercase before uppercase.
fn tertiary_key(name: &str) -> Vec<bool> {
    name.nfd().map(char::is_uppercase).collect()
}
