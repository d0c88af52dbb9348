//! Search output types.
#![forbid(unsafe_code)]

use feira_core::{Entity, EntityId, Product};
use serde::Serialize;

/// Which text rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchType {
    /// The product name matched.
    #[serde(rename = "produto")]
    Product,
    /// The store type matched.
    #[serde(rename = "tipo")]
    Kind,
    /// The product category matched.
    #[serde(rename = "categoria")]
    Category,
    /// One of the product tags matched.
    #[serde(rename = "tag")]
    Tag,
}

/// A scored product or store.
///
/// Product hits carry `product` and leave `entity` empty; store hits carry
/// `entity` only. Results borrow from the catalogue passed to the search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    /// Matched product.
    #[serde(rename = "produto", skip_serializing_if = "Option::is_none")]
    pub product: Option<&'a Product>,
    /// Matched store.
    #[serde(rename = "entidade", skip_serializing_if = "Option::is_none")]
    pub entity: Option<&'a Entity>,
    /// Relevance score; always greater than zero.
    pub score: f64,
    /// Last text rule that contributed to the score.
    #[serde(rename = "matchType")]
    pub match_type: MatchType,
    /// Whether the product is flagged as on promotion.
    #[serde(rename = "hasPromocao")]
    pub has_promotion: bool,
    /// Product price, when known.
    #[serde(rename = "preco", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Distance from the shopper in kilometres, when both positions are known.
    #[serde(rename = "distancia", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl SearchResult<'_> {
    /// Store the result belongs to: its own entity, else the product's store.
    #[must_use]
    pub fn entity_id(&self) -> Option<EntityId> {
        self.entity
            .map(|entity| entity.id)
            .or_else(|| self.product.and_then(Product::entity_id))
    }
}
