//! A single store's offer for a product, compared by best-price ranking.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{Coordinate, Entity, Product};

/// One store's listing of a product, as compared by the best-price view.
///
/// # Examples
/// ```
/// use feira_core::{Entity, Offer, Product};
///
/// let offer = Offer::new(Product::new(1, "Leite"), Entity::new(2, "Mercadinho"), 5.49)
///     .with_distance(1.2);
/// assert_eq!(offer.distance_km, Some(1.2));
/// assert!(offer.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Product being offered.
    #[serde(rename = "produto")]
    pub product: Product,
    /// Store making the offer.
    #[serde(rename = "entidade")]
    pub entity: Entity,
    /// Price charged by this store.
    #[serde(rename = "preco")]
    pub price: f64,
    /// Whether the store is running a promotion on the product.
    #[serde(rename = "temPromocao", default, deserialize_with = "null_as_false")]
    pub has_promotion: bool,
    /// Pre-computed distance from the shopper, in kilometres.
    #[serde(rename = "distancia", default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Errors returned by [`Offer::validate`] and [`validate_offers`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OfferValidationError {
    /// The price was `NaN` or infinite.
    #[error("offer for product {product_id} at entity {entity_id} has non-finite price {price}")]
    NonFinitePrice {
        /// Product identifier.
        product_id: u64,
        /// Store identifier.
        entity_id: u64,
        /// Offending price.
        price: f64,
    },
    /// The price was below zero.
    #[error("offer for product {product_id} at entity {entity_id} has negative price {price}")]
    NegativePrice {
        /// Product identifier.
        product_id: u64,
        /// Store identifier.
        entity_id: u64,
        /// Offending price.
        price: f64,
    },
    /// The store location or the pre-computed distance was not finite.
    #[error("offer for product {product_id} at entity {entity_id} has a non-finite location")]
    NonFiniteCoordinate {
        /// Product identifier.
        product_id: u64,
        /// Store identifier.
        entity_id: u64,
    },
}

impl Offer {
    /// Construct an offer without promotion or pre-computed distance.
    #[must_use]
    pub const fn new(product: Product, entity: Entity, price: f64) -> Self {
        Self {
            product,
            entity,
            price,
            has_promotion: false,
            distance_km: None,
        }
    }

    /// Mark the offer as promotional.
    #[must_use]
    pub const fn with_promotion(mut self) -> Self {
        self.has_promotion = true;
        self
    }

    /// Attach a pre-computed distance in kilometres.
    #[must_use]
    pub const fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Store location, if known.
    #[must_use]
    pub const fn location(&self) -> Option<Coordinate> {
        self.entity.location
    }

    /// Check that the offer holds usable numbers.
    ///
    /// The ranking engine itself does not sanitise input; callers loading
    /// offers from untrusted sources validate here first.
    ///
    /// # Errors
    /// Returns [`OfferValidationError`] for a non-finite or negative price, or
    /// a non-finite store location or distance.
    pub fn validate(&self) -> Result<(), OfferValidationError> {
        let product_id = self.product.id;
        let entity_id = self.entity.id;
        if !self.price.is_finite() {
            return Err(OfferValidationError::NonFinitePrice {
                product_id,
                entity_id,
                price: self.price,
            });
        }
        if self.price < 0.0 {
            return Err(OfferValidationError::NegativePrice {
                product_id,
                entity_id,
                price: self.price,
            });
        }
        let location_ok = self.location().is_none_or(|location| location.is_finite());
        let distance_ok = self.distance_km.is_none_or(f64::is_finite);
        if location_ok && distance_ok {
            Ok(())
        } else {
            Err(OfferValidationError::NonFiniteCoordinate {
                product_id,
                entity_id,
            })
        }
    }
}

/// Validate every offer, stopping at the first failure.
///
/// # Errors
/// Propagates the first [`OfferValidationError`] encountered.
pub fn validate_offers(offers: &[Offer]) -> Result<(), OfferValidationError> {
    offers.iter().try_for_each(Offer::validate)
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}
