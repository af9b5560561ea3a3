//! CSV header normalization.

use std::collections::{BTreeMap, BTreeSet};

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Normalizes a header row, suffixing repeated names with `.1`, `.2`, ...
///
/// Two columns named `Notes` in one file become `Notes` and `Notes.1`.
/// A suffix already used by a literal header is passed over, so every
/// returned name is unique.
pub(crate) fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let raw: Vec<String> = raw.into_iter().map(normalize_header).collect();
    let mut taken: BTreeSet<String> = BTreeSet::new();
    let mut next_suffix: BTreeMap<String, usize> = BTreeMap::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (position, base) in raw.iter().enumerate() {
        let mut name = base.clone();
        if taken.contains(&name) {
            let suffix = next_suffix.entry(base.clone()).or_insert(1);
            loop {
                name = format!("{base}.{suffix}");
                *suffix += 1;
                // A later literal header keeps its own name.
                if !taken.contains(&name) && !raw[position + 1..].contains(&name) {
                    break;
                }
            }
        }
        taken.insert(name.clone());
        headers.push(name);
    }
    headers
}
