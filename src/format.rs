// src/format.rs
use chrono::{Datelike, NaiveDateTime};

/// Shown for cells with no value.
pub const PLACEHOLDER: &str = "-";

/// Offset between the Buddhist era used on Thai dates and the Gregorian year.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Number with thousands separators and at most three decimals, trailing
/// zeros dropped: `1234.5` -> `1,234.5`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn format_optional_amount(value: Option<f64>) -> String {
    value
        .map(format_amount)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `dd/mm/yyyy` with the year in the Buddhist era.
pub fn format_thai_date(value: &NaiveDateTime) -> String {
    format!(
        "{:02}/{:02}/{}",
        value.day(),
        value.month(),
        value.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Value of a text cell, or the placeholder.
pub fn text_or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}
