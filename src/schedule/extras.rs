use std::collections::BTreeMap;

use crate::types::ExtraPayment;

/// drop unusable entries and order the rest by month
///
/// Entries with a non-positive amount or a month below 1 are discarded.
/// The sort is stable so entries sharing a month keep their input order.
/// Entries beyond the financing horizon survive this step; they are
/// filtered by `within_horizon` at consumption time, so shortening the
/// horizon never mutates the caller's list.
pub fn normalize_extras(extras: &[ExtraPayment]) -> Vec<ExtraPayment> {
    let mut kept: Vec<ExtraPayment> = extras
        .iter()
        .filter(|e| e.month >= 1 && !e.amount.is_zero() && !e.amount.is_negative())
        .copied()
        .collect();
    kept.sort_by_key(|e| e.month);
    kept
}

/// keep only entries that fall inside the financing horizon
pub fn within_horizon(normalized: &[ExtraPayment], financing_months: u32) -> Vec<ExtraPayment> {
    normalized
        .iter()
        .filter(|e| e.month <= financing_months)
        .copied()
        .collect()
}

/// group entries by their month, built once per computation
pub fn by_month(valid: &[ExtraPayment]) -> BTreeMap<u32, Vec<ExtraPayment>> {
    let mut grouped: BTreeMap<u32, Vec<ExtraPayment>> = BTreeMap::new();
    for extra in valid {
        grouped.entry(extra.month).or_default().push(*extra);
    }
    grouped
}
