/// Insert thousands separators into a non-negative integer string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a quantity with thousands separators and `decimals` places
pub fn format_quantity(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut result = group_thousands(whole);
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    if value < 0.0 && result.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    result
}

/// Format a signed whole-number percentage (e.g., +60%, -12%, 0%)
pub fn format_growth(percent: i64) -> String {
    if percent > 0 {
        format!("+{percent}%")
    } else {
        format!("{percent}%")
    }
}

/// Format a value in compact form (e.g., 8.3K, 1.2M, 450)
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{:.1}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(8320.0, 0), "8,320");
        assert_eq!(format_quantity(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_quantity(12.4, 1), "12.4");
        assert_eq!(format_quantity(-5200.0, 0), "-5,200");
        assert_eq!(format_quantity(0.0, 0), "0");
        assert_eq!(format_quantity(-0.0001, 1), "0.0");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(60), "+60%");
        assert_eq!(format_growth(-12), "-12%");
        assert_eq!(format_growth(0), "0%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(8320.0), "8.3K");
        assert_eq!(format_compact(2_100_000.0), "2.1M");
        assert_eq!(format_compact(450.0), "450");
        assert_eq!(format_compact(-1500.0), "-1.5K");
    }
}
