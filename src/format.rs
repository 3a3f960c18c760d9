use crate::decimal::Money;

/// format an amount as displayed in the sales sheet, "$ 175.000.000"
///
/// Amounts are shown in whole currency units with dot thousands
/// separators. Negative values keep their sign ahead of the digits.
pub fn currency(amount: Money) -> String {
    let rounded = amount.round_dp(0).as_decimal();
    let raw = rounded.abs().to_string();
    let digits = raw.split('.').next().unwrap_or(&raw);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("$ {sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(currency(Money::from_major(175_000_000)), "$ 175.000.000");
        assert_eq!(currency(Money::from_major(3_100_000)), "$ 3.100.000");
        assert_eq!(currency(Money::from_major(950)), "$ 950");
        assert_eq!(currency(Money::from_major(1_000)), "$ 1.000");
        assert_eq!(currency(Money::ZERO), "$ 0");
    }

    #[test]
    fn test_fractions_round_to_whole_units() {
        assert_eq!(currency(Money::from_str_exact("1250.75").unwrap()), "$ 1.251");
    }
}
