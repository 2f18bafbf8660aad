//! Keyword-presence bonus extraction from review summaries.

/// Default keyword/weight pairs, matching the phrases reviewers actually use
/// in the dataset's summaries.
const DEFAULT_KEYWORDS: &[(&str, f64)] = &[
    ("양 많", 0.3),
    ("불향", 0.2),
    ("밑반찬", 0.1),
    ("고기 부드러움", 0.2),
    ("건더기 많음", 0.2),
    ("국물 진함", 0.2),
    ("햄 푸짐", 0.2),
];

/// Fixed keyword-to-weight table driving the bonus score
///
/// Static configuration, not derived from data; weights are non-negative.
#[derive(Debug, Clone)]
pub struct KeywordWeights {
    entries: Vec<(String, f64)>,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS
                .iter()
                .map(|(keyword, weight)| ((*keyword).to_string(), *weight))
                .collect(),
        )
    }
}

impl KeywordWeights {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Computes the bonus score for a review summary.
    ///
    /// Sums the weight of every keyword that occurs as an exact substring of
    /// the summary. Presence drives the bonus, not occurrence count: a
    /// keyword appearing twice still contributes its weight once. Matching is
    /// case-sensitive with no tokenization; all pairs are checked since
    /// several keywords may match the same summary. The sum is uncapped.
    pub fn bonus(&self, summary: &str) -> f64 {
        self.entries
            .iter()
            .filter(|(keyword, _)| summary.contains(keyword.as_str()))
            .map(|(_, weight)| weight)
            .sum()
    }
}
