use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats an amount as Naira with thousands separators and at most two
/// decimal places; trailing fractional zeros are dropped.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::report::format_naira;
///
/// assert_eq!(format_naira(dec!(1500000)), "₦1,500,000");
/// assert_eq!(format_naira(dec!(0.15)), "₦0.15");
/// assert_eq!(format_naira(dec!(1234.567)), "₦1,234.57");
/// ```
pub fn format_naira(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₦{}", group_thousands(rounded.abs()))
}

/// Formats a percentage figure (already multiplied by 100) with at most two
/// decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::report::format_percent;
///
/// assert_eq!(format_percent(dec!(7.5)), "7.5%");
/// assert_eq!(format_percent(dec!(15.00)), "15%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", round_half_up(value).normalize())
}

fn group_thousands(value: Decimal) -> String {
    let plain = value.normalize().to_string();
    let (whole, fraction) = match plain.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_naira_groups_thousands() {
        assert_eq!(format_naira(dec!(1350000)), "₦1,350,000");
        assert_eq!(format_naira(dec!(100)), "₦100");
        assert_eq!(format_naira(dec!(123456789.1)), "₦123,456,789.1");
    }

    #[test]
    fn format_naira_drops_trailing_zeros() {
        assert_eq!(format_naira(dec!(50000.00)), "₦50,000");
        assert_eq!(format_naira(dec!(12.50)), "₦12.5");
    }

    #[test]
    fn format_naira_rounds_to_two_places() {
        assert_eq!(format_naira(dec!(166666.666666)), "₦166,666.67");
        assert_eq!(format_naira(dec!(0.004)), "₦0");
    }

    #[test]
    fn format_naira_marks_negative_amounts() {
        assert_eq!(format_naira(dec!(-2500)), "-₦2,500");
    }

    #[test]
    fn format_percent_trims_and_rounds() {
        assert_eq!(format_percent(dec!(0)), "0%");
        assert_eq!(format_percent(dec!(33.3333)), "33.33%");
        assert_eq!(format_percent(dec!(20)), "20%");
    }
}
