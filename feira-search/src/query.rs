//! Normalised search queries.
#![forbid(unsafe_code)]

use feira_core::{MatchTier, normalise};

/// A free-text query normalised once per search.
///
/// # Examples
/// ```
/// use feira_search::SearchQuery;
///
/// let query = SearchQuery::parse("  PÃO ").expect("non-blank query");
/// assert_eq!(query.as_str(), "pao");
/// assert!(SearchQuery::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Normalise `raw`, returning `None` when nothing searchable remains.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = normalise(raw);
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// The normalised query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Classify a raw `target` against the query at any tier.
    #[must_use]
    pub fn tier(&self, target: &str) -> Option<MatchTier> {
        MatchTier::classify(&self.text, &normalise(target))
    }

    /// Classify a raw `target` against the whole query, ignoring single words.
    #[must_use]
    pub fn phrase_tier(&self, target: &str) -> Option<MatchTier> {
        MatchTier::classify_phrase(&self.text, &normalise(target))
    }
}
