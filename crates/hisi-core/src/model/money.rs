// ── Currency formatting ──

/// Format an amount in Naira with thousands separators and no minor
/// units: `89000.0` becomes `₦89,000`.
pub fn format_naira(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.round());
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}₦{grouped}")
}
