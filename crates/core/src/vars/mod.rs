//! Date inputs for template resolution.
//!
//! This module defines:
//! - The injectable [`Clock`] that supplies "today" to the resolver
//! - Date-arithmetic expressions of the form `DD.MM.YYYY+N`
//!
//! Nothing here reads global process state except [`SystemClock`].

pub mod clock;
pub mod datemath;

pub use clock::{Clock, FixedClock, SystemClock};
pub use datemath::{
    DATE_FORMAT, DateMathError, DateShift, YEAR_RANGE, evaluate_date_shift,
    parse_date_shift, resolve_date_shifts,
};
