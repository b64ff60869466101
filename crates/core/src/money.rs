//! Locale-style currency formatting for rendered amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats amounts as `1 234,50 Kč`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    pub label: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self { label: "Kč".into(), thousands_separator: ' ', decimal_separator: ',' }
    }
}

impl CurrencyFormatter {
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut out = String::with_capacity(plain.len() + self.label.len() + 4);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.thousands_separator));
        out.push(self.decimal_separator);
        out.push_str(frac_part);
        if !self.label.is_empty() {
            out.push(' ');
            out.push_str(&self.label);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fmt(s: &str) -> String {
        CurrencyFormatter::default().format(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_format_small() {
        assert_eq!(fmt("0"), "0,00 Kč");
        assert_eq!(fmt("5.5"), "5,50 Kč");
        assert_eq!(fmt("999.999"), "1 000,00 Kč");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(fmt("1234.5"), "1 234,50 Kč");
        assert_eq!(fmt("1234567.891"), "1 234 567,89 Kč");
        assert_eq!(fmt("123456"), "123 456,00 Kč");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(fmt("-1500"), "-1 500,00 Kč");
        assert_eq!(fmt("-0.001"), "0,00 Kč");
    }

    #[test]
    fn test_custom_separators_and_label() {
        let f = CurrencyFormatter {
            label: "EUR".into(),
            thousands_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(f.format(Decimal::from(12000)), "12.000,00 EUR");

        let bare = CurrencyFormatter { label: String::new(), ..CurrencyFormatter::default() };
        assert_eq!(bare.format(Decimal::from(7)), "7,00");
    }
}
