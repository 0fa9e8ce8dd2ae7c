/// Format an amount as Vietnamese đồng, e.g. `178200.0` -> `"178.200 ₫"`.
///
/// Amounts are rounded to whole đồng since the currency has no minor unit.
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round();
    let digits = (rounded.abs() as u64).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd_groups_thousands() {
        assert_eq!(format_vnd(178200.0), "178.200 ₫");
        assert_eq!(format_vnd(1_234_567.0), "1.234.567 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
    }

    #[test]
    fn test_format_vnd_rounds_and_signs() {
        assert_eq!(format_vnd(13200.000000000002), "13.200 ₫");
        assert_eq!(format_vnd(1499.6), "1.500 ₫");
        assert_eq!(format_vnd(-25000.0), "-25.000 ₫");
        // Rounds to zero, so no sign
        assert_eq!(format_vnd(-0.2), "0 ₫");
    }
}
