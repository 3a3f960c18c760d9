/// export - CSV, JSON state and a WhatsApp share link
use lot_plan_rs::{share_text, to_csv, whatsapp_link};
use lot_plan_rs::{Money, PaymentSchedule, PlanConfig, PlanInputs, Uuid, YearMonth};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let inputs = PlanInputs {
        area: dec!(700),
        price_per_unit_area: dec!(250_000),
        financing_months: 12,
        balloon_percent: dec!(10),
        initial_payment: Money::from_major(35_000_000),
        rounding_granularity: Money::from_major(100_000),
        extras: Vec::new(),
        plan_start: YearMonth::new(2025, 6),
    };
    let schedule = PaymentSchedule::generate(Uuid::new_v4(), &inputs, &PlanConfig::default());

    println!("{}", to_csv(&schedule)?);
    println!("{}", serde_json::to_string_pretty(&schedule.totals)?);

    let text = share_text(&schedule);
    println!("{text}");
    println!("{}", whatsapp_link(&text));

    Ok(())
}
