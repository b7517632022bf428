// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Removes markup tags and decodes HTML entities. Search APIs highlight
/// matches with `<b>`/`<em>` inside titles; downstream wants plain text.
pub fn strip_tags(text: &str) -> String {
    let without_tags = TAG.replace_all(text, "");
    html_escape::decode_html_entities(without_tags.as_ref())
        .trim()
        .to_string()
}

/// Collapses runs of whitespace (including newlines from pretty-printed
/// markup) into single spaces.
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates on a character boundary. Byte-slicing Korean text panics,
/// so counting must be in chars.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
