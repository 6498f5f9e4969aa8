//! Query filtering for menu options

use crate::model::MenuOption;
use std::ops::Range;

/// Label of the placeholder entry shown when a query matches nothing
pub const NO_RESULTS_LABEL: &str = "No Results Found";

/// Filter options by a search query.
///
/// An empty query returns every option. Otherwise the options whose label
/// contains the query, compared case-insensitively, are returned in their
/// original order. The result may be empty; substituting the placeholder is
/// the controller's job.
pub fn filter_options<'a>(options: &'a [MenuOption], query: &str) -> Vec<&'a MenuOption> {
    if query.is_empty() {
        return options.iter().collect();
    }

    let query_lower = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&query_lower))
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `query` in `label`.
///
/// Used for highlighting the matched part of a label. Returns `None` for an
/// empty query or when the label does not contain it.
pub fn match_range(label: &str, query: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let chars: Vec<(usize, char)> = label.char_indices().collect();
    if chars.len() < needle.len() {
        return None;
    }

    (0..=chars.len() - needle.len()).find_map(|start| {
        let window = &chars[start..start + needle.len()];
        let matches = window
            .iter()
            .zip(&needle)
            .all(|((_, a), b)| a.to_lowercase().eq(b.to_lowercase()));
        matches.then(|| {
            let (last_idx, last_char) = window[window.len() - 1];
            window[0].0..last_idx + last_char.len_utf8()
        })
    })
}
