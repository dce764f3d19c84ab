//! Display formatting for chart values

/// Insert `,` between groups of three digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Integer count with thousands separators, e.g. `12,345`
pub fn count(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Fixed-precision number with thousands separators
///
/// Non-finite values render as `-`.
pub fn number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    let is_zero = text.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Currency amount, always two decimals
pub fn money(value: f64) -> String {
    number(value, 2)
}

/// Percentage with one decimal, e.g. `12.5%`
pub fn percent(share: f64) -> String {
    format!("{}%", number(share, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(1_000), "1,000");
        assert_eq!(count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(1234.5, 2), "1,234.50");
        assert_eq!(number(-98765.432, 1), "-98,765.4");
        assert_eq!(number(-0.001, 2), "0.00");
        assert_eq!(number(f64::NAN, 2), "-");
        assert_eq!(number(42.0, 0), "42");
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(money(1_000_000.0), "1,000,000.00");
        assert_eq!(percent(33.333), "33.3%");
    }
}
