//! Presentation helpers for amounts shown to investors

/// Format a currency amount as `$12,345.67`
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// Format an amount the way form messages show it: `$5,000`, `$5,000.5`
///
/// Trailing zero cents are dropped.
pub fn format_amount(value: f64) -> String {
    let formatted = format_currency(value);
    match formatted.split_once('.') {
        Some((whole, cents)) => {
            let cents = cents.trim_end_matches('0');
            if cents.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, cents)
            }
        }
        None => formatted,
    }
}

/// Format a percentage as `74.90%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
