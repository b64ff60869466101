//! Date-arithmetic expression parser and evaluator.
//!
//! Supports expressions of the form `DD.MM.YYYY+N`:
//! - `01.01.2024+31` -> `01.02.2024`
//! - `28.02.2024+1` -> `29.02.2024`
//!
//! The expression may appear anywhere in a line, inside or outside `${...}`.

use std::sync::LazyLock;

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate};
use regex::{Captures, Regex};
use thiserror::Error;

/// Output format of an evaluated expression.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Years representable as four unsigned digits.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

static DATE_SHIFT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2})\.([0-9]{2})\.([0-9]{4})\+([0-9]+)").expect("valid regex")
});

/// Error type for date-arithmetic parsing and evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateMathError {
    #[error("malformed date in expression: {expr}")]
    Malformed { expr: String },

    #[error("date expression out of range: {expr}")]
    OutOfRange { expr: String },
}

/// A parsed `DD.MM.YYYY+N` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateShift {
    pub base: NaiveDate,
    pub days: u64,
}

/// Parse a single expression like `31.12.2023+14`.
///
/// The whole input must be the expression; use [`resolve_date_shifts`] to
/// rewrite expressions embedded in a longer line.
pub fn parse_date_shift(input: &str) -> Result<DateShift, DateMathError> {
    let input = input.trim();
    match DATE_SHIFT_RE.captures(input) {
        Some(caps) if caps[0].len() == input.len() => shift_from_captures(&caps),
        _ => Err(DateMathError::Malformed { expr: input.to_string() }),
    }
}

fn shift_from_captures(caps: &Captures<'_>) -> Result<DateShift, DateMathError> {
    let expr = &caps[0];
    let malformed = || DateMathError::Malformed { expr: expr.to_string() };

    // The regex guarantees ASCII digits of bounded width for the date parts.
    let day: u32 = caps[1].parse().map_err(|_| malformed())?;
    let month: u32 = caps[2].parse().map_err(|_| malformed())?;
    let year: i32 = caps[3].parse().map_err(|_| malformed())?;
    let base = NaiveDate::from_ymd_opt(year, month, day)
        .filter(|d| YEAR_RANGE.contains(&d.year()))
        .ok_or_else(malformed)?;

    let days: u64 = caps[4]
        .parse()
        .map_err(|_| DateMathError::OutOfRange { expr: expr.to_string() })?;

    Ok(DateShift { base, days })
}

/// Evaluate a parsed expression to the shifted calendar date.
///
/// The result must stay within [`YEAR_RANGE`] so it still formats as `DD.MM.YYYY`.
pub fn evaluate_date_shift(shift: &DateShift) -> Result<NaiveDate, DateMathError> {
    shift
        .base
        .checked_add_days(Days::new(shift.days))
        .filter(|d| YEAR_RANGE.contains(&d.year()))
        .ok_or_else(|| DateMathError::OutOfRange {
            expr: format!("{}+{}", shift.base.format(DATE_FORMAT), shift.days),
        })
}

/// Replace every `DD.MM.YYYY+N` occurrence in `line` with the resulting date.
///
/// Fails on the first expression that is not a valid calendar date; the line
/// is never partially rewritten.
pub fn resolve_date_shifts(line: &str) -> Result<String, DateMathError> {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    for caps in DATE_SHIFT_RE.captures_iter(line) {
        let whole = caps.get(0).expect("group 0 always present");
        let shifted = evaluate_date_shift(&shift_from_captures(&caps)?)?;

        out.push_str(&line[last..whole.start()]);
        out.push_str(&shifted.format(DATE_FORMAT).to_string());
        last = whole.end();
    }

    out.push_str(&line[last..]);
    Ok(out)
}
