use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PlanConfig;
use crate::decimal::Money;
use crate::types::PlanInputs;

/// derived pricing values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// list-price baseline, only used for the discount display
    pub full_price: Money,
    /// negotiated contract price, fully allocated across the schedule
    pub net_price: Money,
    pub discount: Money,
    /// balloon payment before rounding reconciliation
    pub balloon_target: Money,
    /// initial payment capped into [0, net_price]
    pub capped_initial: Money,
    /// balloon percentage after the business-ceiling clamp
    pub balloon_percent: Decimal,
}

impl Pricing {
    /// derive pricing from the raw inputs
    ///
    /// Never fails: pathological inputs are clamped into the configured
    /// bounds so a degenerate schedule is still displayable.
    pub fn derive(inputs: &PlanInputs, config: &PlanConfig) -> Self {
        let area = inputs.area.clamp(config.min_area, config.max_area);
        let price = inputs
            .price_per_unit_area
            .clamp(Decimal::ZERO, config.max_price_per_unit_area);
        // hard business ceiling, not a display-only restriction
        let balloon_percent = inputs
            .balloon_percent
            .clamp(Decimal::ZERO, config.max_balloon_percent);

        let full_price = Money::from_decimal(area * config.reference_price_per_unit_area);
        let net_price = Money::from_decimal(area * price);
        let discount = (full_price - net_price).max(Money::ZERO);
        let balloon_target = net_price.percentage(balloon_percent);
        let capped_initial = inputs.initial_payment.clamp(Money::ZERO, net_price);

        Self {
            full_price,
            net_price,
            discount,
            balloon_target,
            capped_initial,
            balloon_percent,
        }
    }
}
