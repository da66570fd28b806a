//! Type-safe price representation using decimal arithmetic.
//!
//! All money flows through [`Price`]; raw floats are never used for
//! amounts. Every derived amount (percentage adjustments, variant
//! rescaling) is rounded through the single [`Price::round2`] function so
//! rounding behavior stays consistent across the whole store.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Direction of a percentage-based price adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceAdjustment {
    Increase,
    Decrease,
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Round to 2 decimal places, half away from zero.
    ///
    /// This is the only rounding point for money in the workspace.
    #[must_use]
    pub fn round2(self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            currency_code: self.currency_code,
        }
    }

    /// Multiply the amount by `ratio` and round to 2 decimal places.
    #[must_use]
    pub fn rescale(self, ratio: Decimal) -> Self {
        Self {
            amount: self.amount * ratio,
            currency_code: self.currency_code,
        }
        .round2()
    }

    /// Apply a percentage adjustment and round to 2 decimal places.
    ///
    /// `percentage` is expressed in whole percent (`10` means 10%).
    #[must_use]
    pub fn apply_percentage(self, percentage: Decimal, adjustment: PriceAdjustment) -> Self {
        let delta = percentage / Decimal::ONE_HUNDRED;
        let multiplier = match adjustment {
            PriceAdjustment::Increase => Decimal::ONE + delta,
            PriceAdjustment::Decrease => Decimal::ONE - delta,
        };
        self.rescale(multiplier)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }
}
