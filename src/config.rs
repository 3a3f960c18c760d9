use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlanError, Result};

/// plan configuration
///
/// Everything here was an implicit constant in the original sales sheet:
/// the list price used for the discount display, the prices and rounding
/// steps offered to the buyer, and the hard business ceilings. Callers
/// normally use `PlanConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// list price per unit area, used only for the discount baseline
    pub reference_price_per_unit_area: Decimal,
    /// negotiated prices offered in the sales form
    pub offered_prices: Vec<Money>,
    /// rounding granularities offered in the sales form; zero disables rounding
    pub rounding_options: Vec<Money>,
    /// financing horizon ceiling in months
    pub max_financing_months: u32,
    /// hard business ceiling on the balloon percentage
    pub max_balloon_percent: Decimal,
    /// area clamp bounds
    pub min_area: Decimal,
    pub max_area: Decimal,
    /// price-per-unit-area clamp ceiling
    pub max_price_per_unit_area: Decimal,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            reference_price_per_unit_area: dec!(280_000),
            offered_prices: vec![
                Money::from_major(220_000),
                Money::from_major(250_000),
                Money::from_major(280_000),
            ],
            rounding_options: vec![
                Money::ZERO,
                Money::from_major(10_000),
                Money::from_major(50_000),
                Money::from_major(100_000),
            ],
            max_financing_months: 240,
            max_balloon_percent: dec!(90),
            min_area: Decimal::ONE,
            max_area: dec!(1_000_000),
            max_price_per_unit_area: dec!(100_000_000),
        }
    }
}

impl PlanConfig {
    /// check that the configured bounds are coherent
    pub fn validate(&self) -> Result<()> {
        if self.min_area <= Decimal::ZERO || self.min_area > self.max_area {
            return Err(PlanError::InvalidConfiguration {
                message: format!("area bounds [{}, {}] are inverted or non-positive", self.min_area, self.max_area),
            });
        }
        if self.max_financing_months == 0 {
            return Err(PlanError::InvalidConfiguration {
                message: "max_financing_months must be positive".to_string(),
            });
        }
        if self.max_balloon_percent < Decimal::ZERO || self.max_balloon_percent > dec!(100) {
            return Err(PlanError::InvalidConfiguration {
                message: format!("max_balloon_percent {} outside [0, 100]", self.max_balloon_percent),
            });
        }
        if self.max_price_per_unit_area < Decimal::ZERO {
            return Err(PlanError::InvalidConfiguration {
                message: "max_price_per_unit_area must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}
