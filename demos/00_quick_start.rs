/// quick start - compute a payment schedule with default settings
use lot_plan_rs::{Money, PaymentSchedule, PlanConfig, PlanInputs, Uuid, YearMonth};
use rust_decimal_macros::dec;

fn main() {
    let config = PlanConfig::default();

    // 700 m2 lot at the middle offered price, 25% balloon over 36 months
    let inputs = PlanInputs {
        area: dec!(700),
        price_per_unit_area: config.offered_prices[1].as_decimal(),
        financing_months: 36,
        balloon_percent: dec!(25),
        initial_payment: Money::from_major(20_000_000),
        rounding_granularity: Money::from_major(50_000),
        extras: Vec::new(),
        plan_start: YearMonth::new(2025, 1),
    };

    let schedule = PaymentSchedule::generate(Uuid::new_v4(), &inputs, &config);

    println!("net price:  {}", schedule.pricing.net_price);
    println!("discount:   {}", schedule.pricing.discount);
    println!("monthly:    {}", schedule.monthly_installment);
    println!("balloon:    {}", schedule.totals.balloon);
    println!("grand total {}", schedule.totals.grand_total);

    for row in &schedule.rows {
        println!("{:<8} {:>3}  {:<15} {:<30} {}", row.kind.as_str(), row.month, row.date, row.label, row.amount);
    }
}
