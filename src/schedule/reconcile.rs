use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{ceil_to_multiple, floor_to_multiple, Money};
use crate::types::ExtraPayment;

/// outcome of the installment/balloon reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// uniform amount of every regular installment
    pub monthly_installment: Money,
    /// balloon after absorbing the rounding surplus or shortfall
    pub adjusted_balloon: Money,
    /// months that carry a regular installment
    pub num_monthly_payments: u32,
    pub extras_sum: Money,
    /// residual balance spread across the regular installments
    pub base_for_monthly: Money,
    /// true when rounding up would have driven the balloon negative
    pub rounded_down: bool,
}

/// compute the uniform installment and the adjusted balloon
///
/// The preferred branch rounds the installment up to the granularity so
/// the buyer pays convenient amounts, shrinking the balloon by the
/// resulting surplus. When that would push the balloon below zero the
/// installment is rounded down instead and the balloon grows by the
/// shortfall. Either way the schedule still sums to the net price.
pub fn reconcile(
    net_price: Money,
    capped_initial: Money,
    balloon_target: Money,
    financing_months: u32,
    valid_extras: &[ExtraPayment],
    granularity: Money,
) -> Reconciliation {
    let extras_sum = valid_extras
        .iter()
        .fold(Money::ZERO, |acc, e| acc + e.amount);

    // a month with several extras still only consumes one installment slot
    let consumed_months = valid_extras
        .iter()
        .map(|e| e.month)
        .collect::<BTreeSet<_>>()
        .len() as u32;

    let base_for_monthly =
        (net_price - capped_initial - balloon_target - extras_sum).max(Money::ZERO);
    let num_monthly_payments = financing_months.saturating_sub(consumed_months);

    if num_monthly_payments == 0 {
        return Reconciliation {
            monthly_installment: Money::ZERO,
            adjusted_balloon: balloon_target,
            num_monthly_payments,
            extras_sum,
            base_for_monthly,
            rounded_down: false,
        };
    }

    let slots = Decimal::from(num_monthly_payments);
    let raw = base_for_monthly.as_decimal() / slots;
    let step = granularity.as_decimal();

    let candidate_up = Money::from_decimal(ceil_to_multiple(raw, step));
    let surplus = candidate_up * slots - base_for_monthly;
    let balloon_after_up = balloon_target - surplus;

    if !balloon_after_up.is_negative() {
        debug!(
            months = num_monthly_payments,
            installment = %candidate_up,
            balloon = %balloon_after_up,
            "reconciled with round-up branch"
        );
        return Reconciliation {
            monthly_installment: candidate_up,
            adjusted_balloon: balloon_after_up,
            num_monthly_payments,
            extras_sum,
            base_for_monthly,
            rounded_down: false,
        };
    }

    let candidate_down = Money::from_decimal(floor_to_multiple(raw, step)).max(Money::ZERO);
    let shortfall = base_for_monthly - candidate_down * slots;
    let adjusted_balloon = (balloon_target + shortfall).max(Money::ZERO);

    debug!(
        months = num_monthly_payments,
        installment = %candidate_down,
        balloon = %adjusted_balloon,
        "reconciled with round-down branch"
    );
    Reconciliation {
        monthly_installment: candidate_down,
        adjusted_balloon,
        num_monthly_payments,
        extras_sum,
        base_for_monthly,
        rounded_down: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(v: i64) -> Money {
        Money::from_major(v)
    }

    #[test]
    fn test_ceil_to_unit_without_granularity() {
        // net 175M, initial 20M, balloon 25%, 36 months, no extras
        let rec = reconcile(m(175_000_000), m(20_000_000), m(43_750_000), 36, &[], Money::ZERO);

        assert_eq!(rec.base_for_monthly, m(111_250_000));
        assert_eq!(rec.monthly_installment, m(3_090_278));
        // 36 x 3,090,278 overshoots by 8, absorbed by the balloon
        assert_eq!(rec.adjusted_balloon, m(43_749_992));
        assert!(!rec.rounded_down);
    }

    #[test]
    fn test_round_up_to_granularity() {
        let rec = reconcile(
            m(175_000_000),
            m(20_000_000),
            m(43_750_000),
            36,
            &[],
            m(50_000),
        );

        assert_eq!(rec.monthly_installment, m(3_100_000));
        // surplus 36 x 3,100,000 - 111,250,000 = 350,000
        assert_eq!(rec.adjusted_balloon, m(43_400_000));
        assert!(!rec.rounded_down);
        // conservation
        let total = m(20_000_000) + rec.monthly_installment * Decimal::from(36) + rec.adjusted_balloon;
        assert_eq!(total, m(175_000_000));
    }

    #[test]
    fn test_round_down_when_balloon_would_underflow() {
        // zero balloon target cannot absorb any surplus
        let rec = reconcile(m(175_000_000), m(20_000_000), Money::ZERO, 36, &[], m(50_000));

        assert!(rec.rounded_down);
        assert_eq!(rec.monthly_installment, m(4_300_000));
        // shortfall 155,000,000 - 36 x 4,300,000 = 200,000 grows the balloon
        assert_eq!(rec.adjusted_balloon, m(200_000));
        // conservation
        let total = m(20_000_000) + rec.monthly_installment * Decimal::from(36) + rec.adjusted_balloon;
        assert_eq!(total, m(175_000_000));
    }

    #[test]
    fn test_extras_reduce_base_and_slots() {
        let extras = vec![ExtraPayment::new(12, m(20_000_000))];
        let rec = reconcile(m(175_000_000), m(20_000_000), m(43_750_000), 36, &extras, Money::ZERO);

        assert_eq!(rec.extras_sum, m(20_000_000));
        assert_eq!(rec.num_monthly_payments, 35);
        assert_eq!(rec.base_for_monthly, m(91_250_000));
    }

    #[test]
    fn test_two_extras_in_one_month_consume_one_slot() {
        let extras = vec![
            ExtraPayment::new(12, m(10_000_000)),
            ExtraPayment::new(12, m(10_000_000)),
        ];
        let rec = reconcile(m(175_000_000), m(20_000_000), m(43_750_000), 36, &extras, Money::ZERO);

        assert_eq!(rec.extras_sum, m(20_000_000));
        // month 12 is consumed once, not twice
        assert_eq!(rec.num_monthly_payments, 35);
    }

    #[test]
    fn test_no_monthly_slots_left() {
        let extras: Vec<ExtraPayment> = (1..=6).map(|i| ExtraPayment::new(i, m(1_000))).collect();
        let rec = reconcile(m(100_000), m(0), m(10_000), 6, &extras, Money::ZERO);

        assert_eq!(rec.num_monthly_payments, 0);
        assert_eq!(rec.monthly_installment, Money::ZERO);
        assert_eq!(rec.adjusted_balloon, m(10_000));
    }

    #[test]
    fn test_extras_exceed_balance() {
        // base clamps at zero instead of going negative
        let extras = vec![ExtraPayment::new(1, m(200_000_000))];
        let rec = reconcile(m(175_000_000), m(20_000_000), m(43_750_000), 36, &extras, Money::ZERO);

        assert_eq!(rec.base_for_monthly, Money::ZERO);
        assert_eq!(rec.monthly_installment, Money::ZERO);
        assert_eq!(rec.adjusted_balloon, m(43_750_000));
    }

    #[test]
    fn test_balloon_never_negative_across_granularities() {
        for step in [0i64, 1_000, 10_000, 50_000, 100_000, 500_000, 1_000_000] {
            let rec = reconcile(
                m(175_000_000),
                m(20_000_000),
                m(1_000_000),
                36,
                &[],
                m(step),
            );
            assert!(
                !rec.adjusted_balloon.is_negative(),
                "negative balloon at granularity {step}"
            );
            // conservation holds in whichever branch was taken
            let total = m(20_000_000)
                + rec.monthly_installment * Decimal::from(36)
                + rec.adjusted_balloon;
            assert_eq!(total, m(175_000_000), "conservation broken at granularity {step}");
        }
    }
}
