//! Item block lines and amount handling.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

/// Currency suffix accepted after an item amount.
pub const CURRENCY_SUFFIX: &str = "Kč";

/// Characters used as thousands separators in authored amounts.
const GROUPING_CHARS: [char; 3] = [' ', '\u{a0}', '\u{202f}'];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid amount '{text}'")]
pub struct AmountError {
    pub text: String,
}

/// A line of the item block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemLine {
    Priced { name: String, amount: Decimal },
    Note { text: String },
}

impl ItemLine {
    /// Parse an item line. Lines containing `=` must carry a valid amount.
    pub fn parse(line: &str) -> Result<Self, AmountError> {
        match line.split_once('=') {
            Some((name, amount)) => Ok(ItemLine::Priced {
                name: name.trim().to_string(),
                amount: parse_amount(amount)?,
            }),
            None => Ok(ItemLine::Note { text: line.to_string() }),
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            ItemLine::Priced { amount, .. } => Some(*amount),
            ItemLine::Note { .. } => None,
        }
    }
}

/// Parse an authored amount such as `1 234,50 Kč`.
///
/// Grouping spaces and the currency suffix are dropped and a decimal comma
/// becomes a period before parsing.
pub fn parse_amount(text: &str) -> Result<Decimal, AmountError> {
    let normalized: String = text
        .trim()
        .replace(CURRENCY_SUFFIX, "")
        .chars()
        .filter(|c| !GROUPING_CHARS.contains(c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(&normalized).map_err(|_| AmountError { text: text.trim().to_string() })
}

/// Render an amount with two decimals and a period, e.g. `150.50`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
