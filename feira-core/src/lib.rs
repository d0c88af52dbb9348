//! Core domain types for the Feira Livre ranking engine.
//!
//! The crate models the catalogue records the storefront fetches from the
//! marketplace API ([`Product`], [`Entity`]) and the per-store offers compared
//! by the best-price ranking ([`Offer`]). It also hosts the primitives shared by
//! both ranking crates: great-circle distance ([`haversine_km`]) and
//! accent-insensitive text matching ([`text`]).
//!
//! Nothing in this crate performs I/O or keeps state between calls.
//!
//! # Examples
//!
//! ```
//! use feira_core::{Coordinate, haversine_km};
//!
//! let praca = Coordinate::new(-23.5505, -46.6333);
//! assert_eq!(praca.distance_km(&praca), 0.0);
//! assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod location;
pub mod offer;
pub mod text;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{Category, Entity, EntityId, Product, ProductId, Tag};
pub use location::{Coordinate, CoordinateError, EARTH_RADIUS_KM, haversine_km, point_distance_km};
pub use offer::{Offer, OfferValidationError, validate_offers};
pub use text::{MatchTier, normalise};
