//! Fuzzy matching using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// A compiled fuzzy query.
///
/// Matching is case-insensitive and ignores diacritics when the query has
/// none.
pub(crate) struct FuzzyQuery {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

impl FuzzyQuery {
    pub(crate) fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern: Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            ),
            buf: Vec::new(),
        }
    }

    /// Score `text` against the query, or `None` if it does not match.
    pub(crate) fn score(&mut self, text: &str) -> Option<u32> {
        let haystack = Utf32Str::new(text, &mut self.buf);
        self.pattern.score(haystack, &mut self.matcher)
    }
}

/// Ranked fuzzy filter over a list of labels.
///
/// Returns matches sorted by score (highest first, ties in list order).
/// Empty query returns all items with score 0.
///
/// # Example
///
/// ```
/// use herowars_lib::filter::fuzzy_filter;
///
/// let labels = vec!["Astaroth".to_string(), "Aurora".to_string(), "Lian".to_string()];
/// let matches = fuzzy_filter("ast", &labels);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].index, 0);
/// ```
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    // Empty query returns all items
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut fuzzy = FuzzyQuery::new(query);
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            fuzzy
                .score(label)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable sort keeps list order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
