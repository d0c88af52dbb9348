//! Tunable constants for relevance scoring.
#![forbid(unsafe_code)]

use feira_core::MatchTier;
use thiserror::Error;

/// Points awarded by each relevance rule.
///
/// The defaults reproduce the storefront's behaviour. Text rules (name, tag,
/// category, store type) decide whether a candidate matches at all; the
/// promotion, price, and distance rules only add to a candidate that already
/// matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWeights {
    /// Product name equals the query.
    pub name_exact: f64,
    /// Product name starts with the query.
    pub name_starts_with: f64,
    /// Product name contains the query.
    pub name_contains: f64,
    /// Product name contains one of the query's words.
    pub name_token: f64,
    /// Any tag matches the query at any tier.
    pub tag_bonus: f64,
    /// Category equals, starts with, or contains the query.
    pub category_bonus: f64,
    /// Product is on promotion with a discount price.
    pub promotion_bonus: f64,
    /// Largest price bonus, awarded to free products.
    pub price_bonus_cap: f64,
    /// Price units that cost one bonus point.
    pub price_divisor: f64,
    /// Store type equals the query.
    pub kind_exact: f64,
    /// Store type contains the query.
    pub kind_contains: f64,
    /// Largest distance bonus, awarded at zero kilometres.
    pub distance_bonus_cap: f64,
    /// Distance bonus points lost per kilometre.
    pub distance_penalty_per_km: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            name_exact: 100.0,
            name_starts_with: 80.0,
            name_contains: 60.0,
            name_token: 40.0,
            tag_bonus: 50.0,
            category_bonus: 30.0,
            promotion_bonus: 20.0,
            price_bonus_cap: 10.0,
            price_divisor: 100.0,
            kind_exact: 70.0,
            kind_contains: 50.0,
            distance_bonus_cap: 30.0,
            distance_penalty_per_km: 2.0,
        }
    }
}

/// Errors raised when validating [`SearchWeights`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was `NaN` or infinite.
    #[error("search weight `{field}` must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A weight was below zero.
    #[error("search weight `{field}` must not be negative")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The price divisor was zero.
    #[error("search weight `price_divisor` must be greater than zero")]
    ZeroPriceDivisor,
}

impl SearchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-finite or negative, or
    /// when the price divisor is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { field });
            }
        }
        if self.price_divisor == 0.0 {
            return Err(WeightsError::ZeroPriceDivisor);
        }
        Ok(self)
    }

    const fn fields(&self) -> [(&'static str, f64); 13] {
        [
            ("name_exact", self.name_exact),
            ("name_starts_with", self.name_starts_with),
            ("name_contains", self.name_contains),
            ("name_token", self.name_token),
            ("tag_bonus", self.tag_bonus),
            ("category_bonus", self.category_bonus),
            ("promotion_bonus", self.promotion_bonus),
            ("price_bonus_cap", self.price_bonus_cap),
            ("price_divisor", self.price_divisor),
            ("kind_exact", self.kind_exact),
            ("kind_contains", self.kind_contains),
            ("distance_bonus_cap", self.distance_bonus_cap),
            ("distance_penalty_per_km", self.distance_penalty_per_km),
        ]
    }

    /// Points for a product name matched at `tier`.
    #[must_use]
    pub const fn name_score(&self, tier: MatchTier) -> f64 {
        match tier {
            MatchTier::Exact => self.name_exact,
            MatchTier::StartsWith => self.name_starts_with,
            MatchTier::Contains => self.name_contains,
            MatchTier::Token => self.name_token,
        }
    }

    /// Bonus for a product priced at `price`; cheaper scores higher, never
    /// below zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the price bonus decays linearly with price"
    )]
    pub fn price_bonus(&self, price: f64) -> f64 {
        (self.price_bonus_cap - price / self.price_divisor).max(0.0)
    }

    /// Bonus for a store `km` kilometres away; closer scores higher, never
    /// below zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the distance bonus decays linearly with distance"
    )]
    pub fn distance_bonus(&self, km: f64) -> f64 {
        (self.distance_bonus_cap - km * self.distance_penalty_per_km).max(0.0)
    }
}
