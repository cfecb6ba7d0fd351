//! # Display Formatting
//!
//! Fixed-locale (en-US, USD) currency and percentage rendering, plus the
//! jurisdiction-configurable daily-amount rounding. Formatting converts
//! to integer cents before rendering so the displayed rounding is exact —
//! no float-to-string precision surprises.

/// Format a dollar amount for display.
///
/// With `show_cents`: `$1,234.56`. Without: `$1,235` (rounded to the
/// nearest dollar). Negative amounts render as `-$…`, matching the
/// conventional en-US accounting style used across the stack's output.
pub fn format_currency(amount: f64, show_cents: bool) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    if show_cents {
        let cents = (abs * 100.0).round() as i64;
        format!(
            "{sign}${}.{:02}",
            group_thousands(cents / 100),
            cents % 100
        )
    } else {
        let dollars = abs.round() as i64;
        format!("{sign}${}", group_thousands(dollars))
    }
}

/// Format a percentage value with the given number of decimal places
/// (e.g., `format_percentage(12.345, 1)` → `"12.3%"`).
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Round an amount to the nearest multiple of `rounding`.
///
/// Supports jurisdiction-specific display granularity: a small township
/// rounding daily figures to the nearest quarter, a large city to the
/// nearest cent. Half-way values round up (`round_daily(12.375, 0.25)` →
/// `12.5`).
///
/// A non-positive `rounding` is a data error; the amount is returned
/// unchanged with a warning rather than producing NaN.
pub fn round_daily(amount: f64, rounding: f64) -> f64 {
    if rounding <= 0.0 {
        tracing::warn!(rounding, "non-positive daily rounding step — returning amount unrounded");
        return amount;
    }
    (amount / rounding).round() * rounding
}

/// Insert comma thousands separators into a non-negative integer.
pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
