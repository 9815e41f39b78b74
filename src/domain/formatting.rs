//! Value → display string conversions for every figure on the dashboard.
//!
//! Every function is total: `None`, NaN and infinities render the
//! zero-equivalent string of that format. Grouping follows es-MX
//! (`1,234.56`: comma thousands, point decimals).

use chrono::{Datelike, NaiveDate};

/// es-MX short month names as produced by `Intl.DateTimeFormat`.
const SHORT_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

pub const CURRENCY_MARKER: &str = "$";
pub const WEIGHT_UNIT: &str = "kg";
pub const BOX_UNIT: &str = "cajas";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Round half away from zero to `decimals` places, folding `-0` into `0`.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    // Too large to carry fractional digits anyway.
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn grouped_fixed(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as i32);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let text = format!("{:.*}", decimals, rounded.abs());
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}{}.{}", sign, group_thousands(int_part), frac_part),
        None => format!("{}{}", sign, group_thousands(&text)),
    }
}

/// `$1,234.56`; negative amounts keep the marker first (`$-50.00`).
pub fn format_currency(value: Option<f64>) -> String {
    let amount = finite(value).unwrap_or(0.0);
    format!("{}{}", CURRENCY_MARKER, grouped_fixed(amount, 2))
}

/// Grouped integer without decimals.
pub fn format_count(value: Option<f64>) -> String {
    grouped_fixed(finite(value).unwrap_or(0.0), 0)
}

pub fn format_weight(value: Option<f64>) -> String {
    format!("{} {}", format_count(value), WEIGHT_UNIT)
}

pub fn format_boxes(value: Option<f64>) -> String {
    format!("{} {}", format_count(value), BOX_UNIT)
}

/// One decimal plus `%`. The sign prefix for growth figures is the caller's job.
pub fn format_percent(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{:.1}%", round_to(v, 1)),
        None => "0%".to_string(),
    }
}

/// `+12.5%` for non-negative growth, `-3.0%` otherwise. The sign follows the
/// raw value, so `-0.04` reads `-0.0%`; absent or invalid growth is a bare `0%`.
pub fn format_signed_percent(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return format_percent(None);
    };
    let body = format_percent(Some(v));
    if v >= 0.0 {
        format!("+{}", body)
    } else if body.starts_with('-') {
        body
    } else {
        format!("-{}", body)
    }
}

/// `05 ene`
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{:02} {}", date.day(), SHORT_MONTHS[date.month0() as usize])
}

/// `05 ene 2024`
pub fn format_day_month_year(date: NaiveDate) -> String {
    format!("{} {}", format_day_month(date), date.year())
}
