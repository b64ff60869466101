//! Two-column header pairing.
//!
//! The header block is split into a supplier column and a customer column which
//! are walked side by side by index. This module only builds the rows; drawing
//! them is left to the renderers.

use serde::Serialize;

/// Row index rendered with emphasis (the party name under each label).
pub const EMPHASIZED_ROW: usize = 2;

/// One side of a header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderCell {
    /// `key = value`, both trimmed.
    Field { key: String, value: String },
    /// A label, plain text, or padding.
    Text { text: String },
}

impl HeaderCell {
    /// Split on the first `=`; lines without one are plain text.
    pub fn parse(line: &str) -> Self {
        match line.split_once('=') {
            Some((key, value)) => HeaderCell::Field {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => HeaderCell::Text { text: line.to_string() },
        }
    }

    pub fn empty() -> Self {
        HeaderCell::Text { text: String::new() }
    }

    /// Value of a field whose key equals `key` exactly.
    pub fn field_value(&self, key: &str) -> Option<&str> {
        match self {
            HeaderCell::Field { key: k, value } if k == key => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRow {
    pub index: usize,
    pub left: HeaderCell,
    pub right: HeaderCell,
    pub emphasized: bool,
}

/// Pair the supplier and customer columns row by row.
///
/// The shorter column is padded with empty text cells.
pub fn pair_columns<L, R>(left: &[L], right: &[R]) -> Vec<HeaderRow>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let rows = left.len().max(right.len());
    let cell = |line: Option<&str>| line.map_or_else(HeaderCell::empty, HeaderCell::parse);

    (0..rows)
        .map(|index| HeaderRow {
            index,
            left: cell(left.get(index).map(|l| l.as_ref())),
            right: cell(right.get(index).map(|r| r.as_ref())),
            emphasized: index == EMPHASIZED_ROW,
        })
        .collect()
}
