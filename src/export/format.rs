//! Display formatting for tables, summaries and chart axes
//!
//! Formatting is fixed to US-style grouping (`1,234,567.89`).

/// Format a dollar amount with thousands separators and at most two decimals
///
/// Trailing zero cents are dropped: `110000.0` -> `$110,000`, `1050.5` -> `$1,050.5`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, frac)
    }
}

/// Compact label for chart value axes: `$1.2M`, `$15.0K`, `$950`
pub fn format_axis_tick(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${}", value)
    }
}

/// Percentage with two decimals, e.g. `114.31%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(110_000.0), "$110,000");
        assert_eq!(format_currency(1_050.5), "$1,050.5");
        assert_eq!(format_currency(1_234_567.89), "$1,234,567.89");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-2_500.25), "-$2,500.25");
    }

    #[test]
    fn test_format_axis_tick() {
        assert_eq!(format_axis_tick(1_610_510.0), "$1.6M");
        assert_eq!(format_axis_tick(161_051.0), "$161.1K");
        assert_eq!(format_axis_tick(1_000.0), "$1.0K");
        assert_eq!(format_axis_tick(950.0), "$950");
        assert_eq!(format_axis_tick(12.5), "$12.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(114.31), "114.31%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
