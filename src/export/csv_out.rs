use crate::errors::{PlanError, Result};
use crate::schedule::PaymentSchedule;

/// serialize the schedule as CSV, one record per row in schedule order
///
/// Columns are `Type, Month, Date, Label, Amount`; amounts are plain
/// numbers without currency formatting.
pub fn to_csv(schedule: &PaymentSchedule) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["Type", "Month", "Date", "Label", "Amount"])?;
    for row in &schedule.rows {
        wtr.write_record([
            row.kind.as_str(),
            &row.month.to_string(),
            &row.date,
            &row.label,
            &row.amount.to_string(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| PlanError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanConfig;
    use crate::decimal::Money;
    use crate::schedule::YearMonth;
    use crate::types::{ExtraPayment, PlanInputs};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_schedule() -> PaymentSchedule {
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
        PaymentSchedule::generate(Uuid::new_v4(), &inputs, &PlanConfig::default())
    }

    #[test]
    fn test_header_and_record_count() {
        let schedule = sample_schedule();
        let csv = to_csv(&schedule).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Type,Month,Date,Label,Amount");
        assert_eq!(lines.len(), schedule.rows.len() + 1);
    }

    #[test]
    fn test_rows_in_schedule_order() {
        let schedule = sample_schedule();
        let csv = to_csv(&schedule).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert!(lines[1].starts_with("initial,0,enero 2025,Cuota inicial,20000000"));
        assert!(lines.last().unwrap().starts_with("balloon,37,"));

        let extra_line = lines
            .iter()
            .find(|l| l.starts_with("extra,"))
            .expect("extra row present");
        assert!(extra_line.contains("Abono extraordinario mes 12"));
        assert!(extra_line.contains("20000000"));
    }

    #[test]
    fn test_amounts_are_plain_numbers() {
        let schedule = sample_schedule();
        let csv = to_csv(&schedule).unwrap();
        assert!(!csv.contains('$'));
        // reconciled installment over the 35 non-extra months
        assert!(csv.contains("2650000"));
    }
}
