use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::schedule::dates::YearMonth;

/// unique identifier for a payment plan
pub type PlanId = Uuid;

/// lump sum due in a specific financing month, replacing that month's
/// regular installment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPayment {
    /// financing month the payment falls in, 1-based
    pub month: u32,
    pub amount: Money,
}

impl ExtraPayment {
    pub fn new(month: u32, amount: Money) -> Self {
        Self { month, amount }
    }
}

/// caller-supplied plan inputs, immutable per computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInputs {
    /// lot area in unit area (m2)
    pub area: Decimal,
    /// negotiated price per unit area
    pub price_per_unit_area: Decimal,
    /// months the financed balance is spread over
    pub financing_months: u32,
    /// share of the net price deferred to the final balloon payment
    pub balloon_percent: Decimal,
    pub initial_payment: Money,
    /// every regular installment must be a multiple of this; zero disables
    pub rounding_granularity: Money,
    pub extras: Vec<ExtraPayment>,
    /// calendar anchor; month 1 of the schedule is one month after this
    pub plan_start: YearMonth,
}

/// row category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Initial,
    Monthly,
    Extra,
    Balloon,
}

impl RowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Initial => "initial",
            RowKind::Monthly => "monthly",
            RowKind::Extra => "extra",
            RowKind::Balloon => "balloon",
        }
    }
}

/// one entry of the payment calendar
///
/// `month` is 0 for the initial payment, 1..=N for financing months and
/// N+1 for the balloon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub kind: RowKind,
    pub month: u32,
    pub label: String,
    pub amount: Money,
    /// calendar month label, filled in by date projection
    pub date: String,
}

/// per-category totals over the assembled rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScheduleTotals {
    pub initial: Money,
    pub monthly_total: Money,
    pub extras_total: Money,
    pub balloon: Money,
    pub grand_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_kind_labels() {
        assert_eq!(RowKind::Initial.as_str(), "initial");
        assert_eq!(RowKind::Balloon.as_str(), "balloon");
    }

    #[test]
    fn test_inputs_json_round_trip() {
        let inputs = PlanInputs {
            area: dec!(700),
            price_per_unit_area: dec!(250_000),
            financing_months: 36,
            balloon_percent: dec!(25),
            initial_payment: Money::from_major(20_000_000),
            rounding_granularity: Money::from_major(50_000),
            extras: vec![ExtraPayment::new(12, Money::from_major(20_000_000))],
            plan_start: YearMonth::new(2025, 1),
        };

        let json = serde_json::to_string(&inputs).unwrap();
        let back: PlanInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back.financing_months, 36);
        assert_eq!(back.extras, inputs.extras);
        assert_eq!(back.plan_start, inputs.plan_start);
    }
}
