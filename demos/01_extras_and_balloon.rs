/// extraordinary payments and the round-down fallback
use lot_plan_rs::{ExtraPayment, Money, PaymentSchedule, PlanConfig, PlanInputs, RowKind, Uuid, YearMonth};
use rust_decimal_macros::dec;

fn main() {
    let config = PlanConfig::default();

    // a lump sum at month 12 replaces that month's installment
    let inputs = PlanInputs {
        area: dec!(700),
        price_per_unit_area: dec!(250_000),
        financing_months: 36,
        balloon_percent: dec!(25),
        initial_payment: Money::from_major(20_000_000),
        rounding_granularity: config.rounding_options[2],
        extras: vec![ExtraPayment::new(12, Money::from_major(20_000_000))],
        plan_start: YearMonth::new(2025, 1),
    };
    let schedule = PaymentSchedule::generate(Uuid::new_v4(), &inputs, &config);

    println!(
        "{} monthly installments of {}, extras total {}",
        schedule.rows_of(RowKind::Monthly).count(),
        schedule.monthly_installment,
        schedule.totals.extras_total,
    );

    // with no balloon to absorb the surplus, installments round down and
    // the shortfall becomes a small final payment
    let no_balloon = PlanInputs {
        balloon_percent: dec!(0),
        extras: Vec::new(),
        ..inputs
    };
    let schedule = PaymentSchedule::generate(Uuid::new_v4(), &no_balloon, &config);

    println!(
        "no balloon: monthly {} with final payment {}",
        schedule.monthly_installment, schedule.totals.balloon,
    );
}
