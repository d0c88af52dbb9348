//! Relevance scoring for products and stores.
//!
//! Products are scored on name, tags, and category, then boosted by
//! promotion, price, and proximity. Stores are scored on their type and
//! proximity. Candidates that match no text rule are never returned, so a
//! cheap product close to the shopper does not surface for an unrelated query.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use feira_core::{Coordinate, Entity, Product, normalise};
use log::debug;

use crate::{MatchType, SearchQuery, SearchResult, SearchWeights, WeightsError};

/// Ranks catalogue entries against a free-text query.
///
/// The engine holds only its weights; every call works on the slices it is
/// given and returns a fresh vector.
///
/// # Examples
/// ```
/// use feira_core::Product;
/// use feira_search::{MatchType, SearchEngine};
///
/// let products = [Product::new(1, "Arroz Branco 5kg").with_price(20.0)];
/// let results = SearchEngine::default().search("arroz", &products, &[], None);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].match_type, MatchType::Product);
/// assert!((results[0].score - 89.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchEngine {
    weights: SearchWeights,
}

impl SearchEngine {
    /// Build an engine from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when `weights` fail validation.
    pub fn new(weights: SearchWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used by this engine.
    #[must_use]
    pub const fn weights(&self) -> &SearchWeights {
        &self.weights
    }

    /// Score `products` and `entities` against `query`, best first.
    ///
    /// A blank query returns no results. Equal scores keep their input
    /// order, with products ahead of stores. The list is not truncated.
    #[must_use]
    pub fn search<'a>(
        &self,
        query: &str,
        products: &'a [Product],
        entities: &'a [Entity],
        user_location: Option<Coordinate>,
    ) -> Vec<SearchResult<'a>> {
        let Some(parsed) = SearchQuery::parse(query) else {
            debug!("search skipped: blank query");
            return Vec::new();
        };

        let product_hits = products
            .iter()
            .filter_map(|product| self.score_product(&parsed, product, user_location));
        let entity_hits = entities
            .iter()
            .filter_map(|entity| self.score_entity(&parsed, entity, user_location));
        let mut results: Vec<SearchResult<'a>> = product_hits.chain(entity_hits).collect();
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            "search '{}' matched {} of {} products and {} stores",
            parsed.as_str(),
            results.len(),
            products.len(),
            entities.len()
        );
        results
    }

    /// Score a single product, returning `None` when it does not match.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance is an additive blend of rule scores"
    )]
    pub fn score_product<'a>(
        &self,
        query: &SearchQuery,
        product: &'a Product,
        user_location: Option<Coordinate>,
    ) -> Option<SearchResult<'a>> {
        let weights = &self.weights;
        let mut score = 0.0_f64;
        let mut match_type = None;

        if let Some(tier) = query.tier(&product.name) {
            score += weights.name_score(tier);
            match_type = Some(MatchType::Product);
        }
        if product.tags.iter().any(|tag| query.tier(&tag.name).is_some()) {
            score += weights.tag_bonus;
            match_type = Some(MatchType::Tag);
        }
        if product
            .category
            .as_ref()
            .is_some_and(|category| query.phrase_tier(&category.name).is_some())
        {
            score += weights.category_bonus;
            match_type = Some(MatchType::Category);
        }
        let matched = match_type?;

        if product.has_active_promotion() {
            score += weights.promotion_bonus;
        }
        if let Some(price) = product.final_price {
            score += weights.price_bonus(price);
        }
        let distance_km = distance_from(user_location, product.entity_location());
        if let Some(km) = distance_km {
            score += weights.distance_bonus(km);
        }

        (score > 0.0).then_some(SearchResult {
            product: Some(product),
            entity: None,
            score,
            match_type: matched,
            has_promotion: product.on_promotion,
            price: product.final_price,
            distance_km,
        })
    }

    /// Score a single store by its type, returning `None` when it does not
    /// match.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance is an additive blend of rule scores"
    )]
    pub fn score_entity<'a>(
        &self,
        query: &SearchQuery,
        entity: &'a Entity,
        user_location: Option<Coordinate>,
    ) -> Option<SearchResult<'a>> {
        let kind = normalise(entity.kind.as_deref()?);
        let mut score = if kind == query.as_str() {
            self.weights.kind_exact
        } else if kind.contains(query.as_str()) {
            self.weights.kind_contains
        } else {
            return None;
        };

        let distance_km = distance_from(user_location, entity.location);
        if let Some(km) = distance_km {
            score += self.weights.distance_bonus(km);
        }

        (score > 0.0).then_some(SearchResult {
            product: None,
            entity: Some(entity),
            score,
            match_type: MatchType::Kind,
            has_promotion: false,
            price: None,
            distance_km,
        })
    }
}

fn distance_from(user: Option<Coordinate>, store: Option<Coordinate>) -> Option<f64> {
    user.zip(store).map(|(from, to)| from.distance_km(&to))
}
