//! Relative weighting of price, distance, and promotion.
#![forbid(unsafe_code)]

use thiserror::Error;

const SUM_TOLERANCE: f64 = 1e-6;

/// Share of the best-price score carried by each factor.
///
/// Every factor is normalised into `0.0..=1.0` with lower meaning better, so
/// the weighted sum is a "lower is better" score. Weights must be finite,
/// non-negative, and sum to one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BestPriceWeights {
    /// Weight of the price relative to the most expensive offer.
    pub price: f64,
    /// Weight of the distance relative to the furthest offer.
    pub distance: f64,
    /// Weight of the missing-promotion penalty.
    pub promotion: f64,
}

impl Default for BestPriceWeights {
    fn default() -> Self {
        Self {
            price: 0.5,
            distance: 0.3,
            promotion: 0.2,
        }
    }
}

/// Errors raised when validating [`BestPriceWeights`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightsError {
    /// A weight was `NaN` or infinite.
    #[error("best-price weights must be finite")]
    NonFinite,
    /// A weight was below zero.
    #[error("best-price weights must not be negative")]
    Negative,
    /// The weights did not add up to one.
    #[error("best-price weights must sum to 1.0, got {sum}")]
    InvalidSum {
        /// Actual sum of the weights.
        sum: f64,
    },
}

impl BestPriceWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-finite or negative, or
    /// the weights do not sum to one.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the weights"
    )]
    pub fn validate(self) -> Result<Self, WeightsError> {
        if !self.has_finite_values() {
            return Err(WeightsError::NonFinite);
        }
        if !self.has_non_negative_values() {
            return Err(WeightsError::Negative);
        }
        let sum = self.price + self.distance + self.promotion;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::InvalidSum { sum });
        }
        Ok(self)
    }

    const fn has_finite_values(self) -> bool {
        self.price.is_finite() && self.distance.is_finite() && self.promotion.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.price >= 0.0 && self.distance >= 0.0 && self.promotion >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a weighted sum of normalised factors"
    )]
    pub(crate) fn blend(self, price: f64, distance: f64, promotion: f64) -> f64 {
        self.price * price + self.distance * distance + self.promotion * promotion
    }
}
