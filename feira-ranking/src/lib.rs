//! Best-price ranking for one product sold by several stores.
//!
//! Each [`Offer`] is reduced to a "lower is better" score blending three
//! normalised factors:
//! - **price** relative to the most expensive offer,
//! - **distance** relative to the furthest offer,
//! - **promotion**, `0` for a promotional offer and `1` otherwise.
//!
//! Offers are sorted by ascending score and the first three receive a podium
//! position (`ranking` 1, 2, 3). Inputs are never mutated; distances computed
//! from the shopper's location are attached to the returned copies.
//!
//! # Examples
//!
//! ```
//! use feira_core::{Entity, Offer, Product};
//! use feira_ranking::rank_best_price;
//!
//! let leite = Product::new(1, "Leite Integral 1L");
//! let offers = [
//!     Offer::new(leite.clone(), Entity::new(1, "Loja A"), 10.0).with_distance(2.0),
//!     Offer::new(leite, Entity::new(2, "Loja B"), 8.0)
//!         .with_promotion()
//!         .with_distance(5.0),
//! ];
//! let ranked = rank_best_price(&offers, None);
//! assert_eq!(ranked[0].offer.entity.name, "Loja B");
//! assert_eq!(ranked[0].ranking, Some(1));
//! assert!((ranked[0].score - 0.70).abs() < 1e-9);
//! assert!((ranked[1].score - 0.82).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::cmp::Ordering;

use feira_core::{Coordinate, Offer};
use log::debug;
use serde::Serialize;

mod weights;

pub use weights::{BestPriceWeights, WeightsError};

/// Number of offers that receive a podium position.
pub const PODIUM_SIZE: u8 = 3;

/// An offer together with its best-price score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOffer {
    /// The offer, including any distance computed during ranking.
    #[serde(flatten)]
    pub offer: Offer,
    /// Weighted score; lower is better.
    pub score: f64,
    /// Price divided by the highest price among the offers.
    #[serde(rename = "precoNormalizado")]
    pub normalised_price: f64,
    /// Distance divided by the largest distance, or `0` when unknown.
    #[serde(rename = "distanciaNormalizada")]
    pub normalised_distance: f64,
    /// `0` for a promotional offer, `1` otherwise.
    #[serde(rename = "promocao")]
    pub promotion: f64,
    /// Podium position for the three best offers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<u8>,
}

/// Denominators used to normalise price and distance.
///
/// Both are floored at `1.0`, which keeps normalised values finite and
/// non-negative for empty, zero, or single-offer inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisationBounds {
    /// Highest offer price, at least `1.0`.
    pub max_price: f64,
    /// Largest positive offer distance in kilometres, at least `1.0`.
    pub max_distance: f64,
}

impl NormalisationBounds {
    /// Derive bounds from a set of offers.
    #[must_use]
    pub fn from_offers(offers: &[Offer]) -> Self {
        let max_price = offers
            .iter()
            .map(|offer| offer.price)
            .fold(1.0_f64, f64::max);
        let max_distance = offers
            .iter()
            .filter_map(|offer| offer.distance_km)
            .filter(|km| *km > 0.0)
            .fold(1.0_f64, f64::max);
        Self {
            max_price,
            max_distance,
        }
    }
}

/// Ranks offers with a fixed set of validated weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BestPriceRanker {
    weights: BestPriceWeights,
}

impl BestPriceRanker {
    /// Build a ranker from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when `weights` fail validation.
    pub fn new(weights: BestPriceWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used by this ranker.
    #[must_use]
    pub const fn weights(&self) -> &BestPriceWeights {
        &self.weights
    }

    /// Score and sort `offers`, best first, flagging the top three.
    ///
    /// Offers without a distance gain one when both `user_location` and the
    /// store location are known. Equal scores keep their input order. The
    /// output has one entry per input offer.
    #[must_use]
    pub fn rank(&self, offers: &[Offer], user_location: Option<Coordinate>) -> Vec<RankedOffer> {
        if offers.is_empty() {
            return Vec::new();
        }

        let located: Vec<Offer> = offers
            .iter()
            .map(|offer| locate(offer, user_location))
            .collect();
        let bounds = NormalisationBounds::from_offers(&located);
        let mut ranked: Vec<RankedOffer> = located
            .into_iter()
            .map(|offer| self.score(offer, bounds))
            .collect();
        ranked.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        for (offer, position) in ranked.iter_mut().zip(1..=PODIUM_SIZE) {
            offer.ranking = Some(position);
        }

        debug!(
            "ranked {} offers (max price {}, max distance {} km)",
            ranked.len(),
            bounds.max_price,
            bounds.max_distance
        );
        ranked
    }

    /// Score a single offer against precomputed bounds.
    ///
    /// The returned offer has no podium position.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides by the bounds"
    )]
    pub fn score(&self, offer: Offer, bounds: NormalisationBounds) -> RankedOffer {
        let normalised_price = offer.price / bounds.max_price;
        let normalised_distance = offer
            .distance_km
            .map_or(0.0, |km| km / bounds.max_distance);
        let promotion = if offer.has_promotion { 0.0 } else { 1.0 };
        let score = self
            .weights
            .blend(normalised_price, normalised_distance, promotion);
        RankedOffer {
            offer,
            score,
            normalised_price,
            normalised_distance,
            promotion,
            ranking: None,
        }
    }
}

/// Rank `offers` with the default weights.
///
/// See [`BestPriceRanker::rank`].
#[must_use]
pub fn rank_best_price(offers: &[Offer], user_location: Option<Coordinate>) -> Vec<RankedOffer> {
    BestPriceRanker::default().rank(offers, user_location)
}

/// Best-price score of a single offer with the default weights.
#[must_use]
pub fn best_price_score(offer: &Offer, bounds: NormalisationBounds) -> f64 {
    BestPriceRanker::default().score(offer.clone(), bounds).score
}

fn locate(offer: &Offer, user_location: Option<Coordinate>) -> Offer {
    let mut located = offer.clone();
    if located.distance_km.is_none() {
        located.distance_km = user_location
            .zip(offer.location())
            .map(|(user, store)| user.distance_km(&store));
    }
    located
}

#[cfg(test)]
mod tests;
