//! GBP display formatting — whole pounds with thousands separators, plus the
//! compact notation used for axis tick labels.

/// Format a whole-pound amount as `£1,234,567` (zero decimal places).
pub fn format_gbp(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('£');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact axis notation: `£0` under a thousand, `£200K` under a million,
/// `£1.5M` above (tenths shown only when they are nonzero).
pub fn format_gbp_compact(amount: u64) -> String {
    if amount < 1_000 {
        return format!("£{amount}");
    }
    let thousands = (amount + 500) / 1_000;
    if thousands < 1_000 {
        return format!("£{thousands}K");
    }
    let tenths_of_millions = (amount + 50_000) / 100_000;
    if tenths_of_millions % 10 == 0 {
        format!("£{}M", tenths_of_millions / 10)
    } else {
        format!("£{}.{}M", tenths_of_millions / 10, tenths_of_millions % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_format_groups_thousands() {
        assert_eq!(format_gbp(0), "£0");
        assert_eq!(format_gbp(999), "£999");
        assert_eq!(format_gbp(1_234), "£1,234");
        assert_eq!(format_gbp(20_000), "£20,000");
        assert_eq!(format_gbp(113_456), "£113,456");
        assert_eq!(format_gbp(1_000_000), "£1,000,000");
    }

    #[test]
    fn compact_format_rounds_to_units() {
        assert_eq!(format_gbp_compact(0), "£0");
        assert_eq!(format_gbp_compact(999), "£999");
        assert_eq!(format_gbp_compact(50_000), "£50K");
        assert_eq!(format_gbp_compact(200_000), "£200K");
        assert_eq!(format_gbp_compact(273_000), "£273K");
        assert_eq!(format_gbp_compact(999_499), "£999K");
        assert_eq!(format_gbp_compact(1_000_000), "£1M");
        assert_eq!(format_gbp_compact(1_500_000), "£1.5M");
        assert_eq!(format_gbp_compact(2_000_000), "£2M");
    }
}
