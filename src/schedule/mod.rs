pub mod dates;
pub mod extras;
pub mod reconcile;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlanConfig;
use crate::decimal::Money;
use crate::pricing::Pricing;
use crate::types::{PlanId, PlanInputs, RowKind, ScheduleRow, ScheduleTotals};

pub use dates::{project_dates, YearMonth};
pub use extras::{by_month, normalize_extras, within_horizon};
pub use reconcile::{reconcile, Reconciliation};

/// fully assembled payment calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub plan_id: PlanId,
    pub pricing: Pricing,
    /// financing horizon after the [1, ceiling] clamp
    pub financing_months: u32,
    pub monthly_installment: Money,
    pub rows: Vec<ScheduleRow>,
    pub totals: ScheduleTotals,
}

impl PaymentSchedule {
    /// compute the schedule for a set of plan inputs
    ///
    /// Pure and infallible: every recomputation starts from scratch and
    /// out-of-range inputs are clamped rather than rejected.
    pub fn generate(plan_id: PlanId, inputs: &PlanInputs, config: &PlanConfig) -> Self {
        let financing_months = inputs
            .financing_months
            .clamp(1, config.max_financing_months.max(1));
        let pricing = Pricing::derive(inputs, config);

        let normalized = normalize_extras(&inputs.extras);
        let valid = within_horizon(&normalized, financing_months);
        let grouped = by_month(&valid);

        let rec = reconcile(
            pricing.net_price,
            pricing.capped_initial,
            pricing.balloon_target,
            financing_months,
            &valid,
            inputs.rounding_granularity,
        );

        let mut rows = Vec::with_capacity(financing_months as usize + 2);
        rows.push(ScheduleRow {
            kind: RowKind::Initial,
            month: 0,
            label: "Cuota inicial".to_string(),
            amount: pricing.capped_initial,
            date: String::new(),
        });

        for month in 1..=financing_months {
            match grouped.get(&month) {
                // an extraordinary month carries no regular installment
                Some(entries) => {
                    for extra in entries {
                        rows.push(ScheduleRow {
                            kind: RowKind::Extra,
                            month,
                            label: format!("Abono extraordinario mes {month}"),
                            amount: extra.amount,
                            date: String::new(),
                        });
                    }
                }
                None => {
                    rows.push(ScheduleRow {
                        kind: RowKind::Monthly,
                        month,
                        label: format!("Cuota mes {month}"),
                        amount: rec.monthly_installment,
                        date: String::new(),
                    });
                }
            }
        }

        rows.push(ScheduleRow {
            kind: RowKind::Balloon,
            month: financing_months + 1,
            label: "Pago final".to_string(),
            amount: rec.adjusted_balloon,
            date: String::new(),
        });

        project_dates(&mut rows, inputs.plan_start, financing_months);

        let totals = ScheduleTotals {
            initial: pricing.capped_initial,
            monthly_total: sum_kind(&rows, RowKind::Monthly),
            extras_total: sum_kind(&rows, RowKind::Extra),
            balloon: rec.adjusted_balloon,
            grand_total: rows.iter().fold(Money::ZERO, |acc, r| acc + r.amount),
        };

        debug!(
            %plan_id,
            months = financing_months,
            rows = rows.len(),
            grand_total = %totals.grand_total,
            "generated payment schedule"
        );

        Self {
            plan_id,
            pricing,
            financing_months,
            monthly_installment: rec.monthly_installment,
            rows,
            totals,
        }
    }

    /// rows of a given kind, in schedule order
    pub fn rows_of(&self, kind: RowKind) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }
}

fn sum_kind(rows: &[ScheduleRow], kind: RowKind) -> Money {
    rows.iter()
        .filter(|r| r.kind == kind)
        .fold(Money::ZERO, |acc, r| acc + r.amount)
}
