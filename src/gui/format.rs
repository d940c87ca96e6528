//! Display formatting for currency amounts, metric counts and dates.

use chrono::{DateTime, NaiveDate};

/// Format an amount as US dollars, e.g. `$1,234.56`.
pub fn currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format a metric count with thousands separators, keeping at most one
/// decimal, e.g. `12,500` or `62.5`.
pub fn count(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let whole = rounded.trunc() as u64;
    let tenths = ((rounded - rounded.trunc()) * 10.0).round() as u64;
    let grouped = group_thousands(whole);
    if tenths == 0 {
        grouped
    } else {
        format!("{}.{}", grouped, tenths)
    }
}

/// Percentage with two decimals, e.g. `5.00%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Render a server timestamp as a short date. The string is echoed back
/// verbatim when it is in a format this client does not know.
pub fn date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%b %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

fn group_thousands(value: u64) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_pads_cents() {
        assert_eq!(currency(1234.5), "$1,234.50");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn count_drops_trailing_zero_fraction() {
        assert_eq!(count(12_500.0), "12,500");
        assert_eq!(count(62.5), "62.5");
        assert_eq!(count(0.0), "0");
    }

    #[test]
    fn dates_fall_back_to_the_raw_string() {
        assert_eq!(date("2024-03-01T10:30:00Z"), "Mar 1, 2024");
        assert_eq!(date("2024-03-01"), "Mar 1, 2024");
        assert_eq!(date("last tuesday"), "last tuesday");
    }
}
