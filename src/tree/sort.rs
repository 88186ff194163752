//! Sibling ordering

use std::cmp::Ordering;

use crate::file_utils::Entry;

/// Compare names case-insensitively, breaking ties on the original text.
///
/// `Cat.png` sorts before `cat.png`; `cat.png` sorts before `Dog.png`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort entries in place by [`compare_names`].
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}
