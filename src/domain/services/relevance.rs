// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain keyword table: (keyword, weight). Matching is lowercase
/// substring matching over title + description. Order matters only for
/// the order of emitted tags.
const KEYWORD_WEIGHTS: &[(&str, u32)] = &[
    ("해커톤", 10),
    ("hackathon", 10),
    ("공모전", 9),
    ("경진대회", 8),
    ("채용", 9),
    ("지원사업", 7),
    ("인턴", 6),
    ("모집", 6),
    ("컨퍼런스", 6),
    ("contest", 6),
    ("대회", 5),
    ("세미나", 5),
    ("부트캠프", 5),
    ("밋업", 5),
    ("정규직", 5),
    ("개발자", 4),
    ("스타트업", 3),
];

/// Keyword-based relevance scoring over listing text.
///
/// The score is used for two things only: appending category hint tags
/// to extracted items and providing a stable sort key inside a single
/// adapter's output. It never filters items out.
pub struct RelevanceScorer;

impl RelevanceScorer {
    /// Deterministic, non-negative score: the weighted count of keyword
    /// occurrences, with title occurrences counting double. Empty input
    /// scores zero.
    pub fn score(title: &str, description: &str) -> u32 {
        let title_lower = title.to_lowercase();
        let desc_lower = description.to_lowercase();

        KEYWORD_WEIGHTS
            .iter()
            .map(|(keyword, weight)| {
                let title_hits = title_lower.matches(keyword).count() as u32;
                let desc_hits = desc_lower.matches(keyword).count() as u32;
                weight * (title_hits * 2 + desc_hits)
            })
            .sum()
    }

    /// Keywords found in the combined text, deduplicated, in table
    /// order. Used as `category_tags` on extracted items.
    pub fn matched_tags(title: &str, description: &str) -> Vec<String> {
        let combined = format!("{} {}", title, description).to_lowercase();
        KEYWORD_WEIGHTS
            .iter()
            .filter(|(keyword, _)| combined.contains(keyword))
            .map(|(keyword, _)| keyword.to_string())
            .collect()
    }
}
