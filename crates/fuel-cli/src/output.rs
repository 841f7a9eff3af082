use anyhow::Result;
use chrono::DateTime;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn tree_prefix(index: usize, count: usize) -> &'static str {
    if index + 1 == count {
        "└──"
    } else {
        "├──"
    }
}

pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.round().max(0.0) as i64;
    let hours = total / 60;
    let remaining = total % 60;

    if hours > 0 {
        format!("{}h {:02}min", hours, remaining)
    } else {
        format!("{}min", remaining)
    }
}

/// RFC 3339 timestamps as `YYYY-MM-DD HH:MM` in their own offset. Anything
/// else is printed as received.
pub fn format_timestamp(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| value.to_string())
}

pub fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(number) => format!("{} {}", format_number(number), unit),
        None => "-".to_string(),
    }
}

/// Whole numbers without a trailing `.0`, others with one decimal.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
