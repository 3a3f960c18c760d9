use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::ScheduleRow;

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// calendar year-month anchor for the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    /// create an anchor; out-of-range months are clamped into 1..=12
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// shift forward by a number of calendar months
    pub fn plus_months(self, offset: u32) -> Self {
        let anchor = NaiveDate::from_ymd_opt(self.year, self.month.clamp(1, 12), 1)
            .unwrap_or(NaiveDate::MIN);
        let shifted = anchor
            .checked_add_months(Months::new(offset))
            .unwrap_or(anchor);
        Self {
            year: shifted.year(),
            month: shifted.month(),
        }
    }

    /// locale label, "enero 2025"
    pub fn label(&self) -> String {
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        format!("{} {}", MONTH_NAMES[idx], self.year)
    }
}

/// attach a calendar label to every row
///
/// The initial row (month 0) is dated at the anchor itself and financing
/// month `m` lands `m` calendar months after it. The balloon row at
/// `financing_months + 1` is capped to the final installment's offset: it
/// is due alongside the last financing month, not one month after it.
pub fn project_dates(rows: &mut [ScheduleRow], start: YearMonth, financing_months: u32) {
    for row in rows.iter_mut() {
        let offset = row.month.min(financing_months);
        row.date = start.plus_months(offset).label();
    }
}
