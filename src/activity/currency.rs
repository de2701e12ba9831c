use crate::entity::Currency;

/// Format an amount as `"{symbol} {grouped integer}{decimal}{fraction}"`
pub fn format_currency(amount: f64, currency: &Currency) -> String {
    let fixed = format!("{:.*}", currency.decimals, amount.abs());
    // No minus on amounts that round to zero
    let sign = if amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(currency.thousands_separator);
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!(
            "{}{} {}{}{}",
            sign, currency.symbol, grouped, currency.decimal_separator, fraction
        ),
        None => format!("{}{} {}", sign, currency.symbol, grouped),
    }
}
