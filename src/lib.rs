//! Facade crate for the Feira Livre ranking engine.
//!
//! This crate re-exports the catalogue model, the relevance search engine,
//! and the best-price ranker so storefront code can depend on a single crate.

#![forbid(unsafe_code)]

pub use feira_core::{
    Category, Coordinate, CoordinateError, EARTH_RADIUS_KM, Entity, EntityId, MatchTier, Offer,
    OfferValidationError, Product, ProductId, Tag, haversine_km, normalise, point_distance_km,
    validate_offers,
};

pub use feira_search::{
    MatchType, SearchEngine, SearchQuery, SearchResult, SearchWeights, group_by_entity, search,
    top_results,
};
pub use feira_search::WeightsError as SearchWeightsError;

pub use feira_ranking::{
    BestPriceRanker, BestPriceWeights, NormalisationBounds, PODIUM_SIZE, RankedOffer,
    best_price_score, rank_best_price,
};
pub use feira_ranking::WeightsError as BestPriceWeightsError;

#[cfg(feature = "test-support")]
pub use feira_core::test_support;
