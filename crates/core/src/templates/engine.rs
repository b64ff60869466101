use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::trace;

use crate::vars::clock::{Clock, SystemClock};
use crate::vars::datemath::{DateMathError, resolve_date_shifts};

static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(.*?)\}").expect("valid regex"));

/// Tokens substituted inside `${...}`, applied in this order.
pub const DATE_TOKENS: [DateToken; 3] =
    [DateToken::Year, DateToken::Month, DateToken::Day];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    /// `RRRR`, four-digit year
    Year,
    /// `MM`, zero-padded month
    Month,
    /// `DD`, zero-padded day
    Day,
}

impl DateToken {
    pub fn literal(self) -> &'static str {
        match self {
            DateToken::Year => "RRRR",
            DateToken::Month => "MM",
            DateToken::Day => "DD",
        }
    }

    pub fn value(self, date: NaiveDate) -> String {
        match self {
            DateToken::Year => format!("{:04}", date.year()),
            DateToken::Month => format!("{:02}", date.month()),
            DateToken::Day => format!("{:02}", date.day()),
        }
    }
}

/// Check whether a line contains at least one `${...}` expression.
pub fn has_variables(line: &str) -> bool {
    VARIABLE_RE.is_match(line)
}

/// Resolves `${...}` variables and `DD.MM.YYYY+N` expressions in template lines.
///
/// Each call to [`TemplateResolver::resolve_line`] is independent; the only
/// input besides the line is the injected clock.
#[derive(Debug, Clone)]
pub struct TemplateResolver<C = SystemClock> {
    clock: C,
}

impl TemplateResolver<SystemClock> {
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for TemplateResolver<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> TemplateResolver<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Resolve one line of template text.
    ///
    /// Pass 1 substitutes the date tokens inside every `${...}` and drops the
    /// delimiters. Pass 2 evaluates every `DD.MM.YYYY+N` in the result,
    /// whether or not it came from a variable.
    pub fn resolve_line(&self, line: &str) -> Result<String, DateMathError> {
        let substituted = self.substitute_variables(line);
        let resolved = resolve_date_shifts(&substituted)?;
        trace!(input = line, output = %resolved, "resolved template line");
        Ok(resolved)
    }

    /// Pass 1 only.
    pub fn substitute_variables(&self, line: &str) -> String {
        if !has_variables(line) {
            return line.to_string();
        }

        let today = self.clock.today();
        let replacements: Vec<(&str, String)> =
            DATE_TOKENS.iter().map(|t| (t.literal(), t.value(today))).collect();

        VARIABLE_RE
            .replace_all(line, |caps: &regex::Captures<'_>| {
                let mut content = caps[1].to_string();
                for (token, value) in &replacements {
                    content = content.replace(token, value);
                }
                content
            })
            .into_owned()
    }
}
