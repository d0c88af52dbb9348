//! Accent-insensitive text normalisation and tiered matching.
//!
//! Shoppers type "acucar" for "Açúcar" and "pao" for "Pão", so both sides of a
//! comparison go through [`normalise`] before any tier is checked.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercase, strip diacritics, and trim `input`.
///
/// # Examples
/// ```
/// use feira_core::normalise;
///
/// assert_eq!(normalise("  Açúcar Refinado "), "acucar refinado");
/// assert_eq!(normalise("PÃO"), "pao");
/// ```
#[must_use]
pub fn normalise(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// How closely a normalised query matched a normalised target.
///
/// Tiers are ordered from strongest to weakest; a comparison reports only the
/// first tier that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchTier {
    /// The target equals the query.
    Exact,
    /// The target begins with the query.
    StartsWith,
    /// The query appears somewhere inside the target.
    Contains,
    /// At least one whitespace-separated query token appears in the target.
    Token,
}

impl MatchTier {
    /// Classify `target` against `query`, both already normalised.
    ///
    /// An empty query never matches.
    ///
    /// # Examples
    /// ```
    /// use feira_core::{MatchTier, normalise};
    ///
    /// let target = normalise("Arroz Branco 5kg");
    /// assert_eq!(MatchTier::classify("arroz", &target), Some(MatchTier::StartsWith));
    /// assert_eq!(MatchTier::classify("feijao arroz", &target), Some(MatchTier::Token));
    /// assert_eq!(MatchTier::classify("leite", &target), None);
    /// ```
    #[must_use]
    pub fn classify(query: &str, target: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        if target == query {
            Some(Self::Exact)
        } else if target.starts_with(query) {
            Some(Self::StartsWith)
        } else if target.contains(query) {
            Some(Self::Contains)
        } else if query
            .split_whitespace()
            .any(|token| target.contains(token))
        {
            Some(Self::Token)
        } else {
            None
        }
    }

    /// Like [`MatchTier::classify`] but never reports [`MatchTier::Token`].
    #[must_use]
    pub fn classify_phrase(query: &str, target: &str) -> Option<Self> {
        Self::classify(query, target).filter(|tier| *tier != Self::Token)
    }
}
