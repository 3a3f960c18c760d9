use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::format::currency;
use crate::schedule::PaymentSchedule;
use crate::types::RowKind;

/// human-readable plan summary for messaging
pub fn share_text(schedule: &PaymentSchedule) -> String {
    let pricing = &schedule.pricing;
    let monthly_count = schedule.rows_of(RowKind::Monthly).count();
    let extras_count = schedule.rows_of(RowKind::Extra).count();

    let mut text = String::new();
    text.push_str("Plan de pagos del lote\n");
    text.push_str(&format!("Precio de lista: {}\n", currency(pricing.full_price)));
    text.push_str(&format!("Precio negociado: {}\n", currency(pricing.net_price)));
    if !pricing.discount.is_zero() {
        text.push_str(&format!("Descuento: {}\n", currency(pricing.discount)));
    }
    text.push_str(&format!("Cuota inicial: {}\n", currency(pricing.capped_initial)));
    text.push_str(&format!(
        "{} cuotas mensuales de {}\n",
        monthly_count,
        currency(schedule.monthly_installment)
    ));
    if extras_count > 0 {
        text.push_str(&format!(
            "{} abonos extraordinarios por {}\n",
            extras_count,
            currency(schedule.totals.extras_total)
        ));
    }
    text.push_str(&format!("Pago final: {}\n", currency(schedule.totals.balloon)));
    text.push_str(&format!("Total: {}", currency(schedule.totals.grand_total)));
    text
}

/// WhatsApp deep link carrying the summary text
pub fn whatsapp_link(text: &str) -> String {
    format!(
        "https://wa.me/?text={}",
        utf8_percent_encode(text, NON_ALPHANUMERIC)
    )
}
