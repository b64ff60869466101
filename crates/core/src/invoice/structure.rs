use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::header::{HeaderRow, pair_columns};
use super::items::ItemLine;
use super::payment::{PaymentFields, PaymentRequest};
use crate::templates::InvoiceDocument;

/// Line separating header, items and footer.
pub const SEPARATOR: &str = "---";
/// Prefix of the trailing output-name line.
pub const OUTPUT_MARKER: &str = "=>";
/// Label opening the supplier column.
pub const SUPPLIER_LABEL: &str = "DODAVATEL";
/// Label opening the customer column.
pub const CUSTOMER_LABEL: &str = "ODBĚRATEL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("template is empty")]
    Empty,

    #[error("last line must start with '=>' followed by the output name")]
    MissingOutputName,

    #[error("output name after '=>' is empty")]
    EmptyOutputName,

    #[error("template has no title line")]
    MissingTitle,

    #[error("missing {ordinal} '---' separator line")]
    MissingSeparator { ordinal: &'static str },

    #[error("header block has no '{label}' label")]
    MissingLabel { label: &'static str },

    #[error("'DODAVATEL' must come before 'ODBĚRATEL' in the header")]
    LabelOrder,

    #[error("item block is empty")]
    EmptyItems,

    #[error("template has no footer line after the item block")]
    MissingFooter,

    #[error("line {line}: invalid amount '{text}'")]
    InvalidAmount { line: usize, text: String },

    #[error("line {line}: item total exceeds the representable amount")]
    TotalOverflow { line: usize },
}

/// An invoice split into its sections, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredInvoice {
    pub output_name: String,
    pub title: String,
    pub header: Vec<HeaderRow>,
    pub items: Vec<ItemLine>,
    pub total: Decimal,
    pub payment: PaymentFields,
    pub footer: String,
}

impl StructuredInvoice {
    /// Split a resolved document into title, header, items and footer.
    pub fn from_document(doc: InvoiceDocument) -> Result<Self, StructuralError> {
        let mut lines = doc.into_lines();

        let output_name = parse_output_name(&lines.pop().ok_or(StructuralError::Empty)?)?;

        let title = lines.first().ok_or(StructuralError::MissingTitle)?;
        if title.trim_start().starts_with(OUTPUT_MARKER) {
            return Err(StructuralError::MissingTitle);
        }

        let first_sep = find_separator(&lines, 1)
            .ok_or(StructuralError::MissingSeparator { ordinal: "first" })?;
        let second_sep = find_separator(&lines, first_sep + 1)
            .ok_or(StructuralError::MissingSeparator { ordinal: "second" })?;

        let header = build_header(&lines[1..first_sep])?;
        let payment = PaymentFields::extract(&header);

        let item_lines = &lines[first_sep + 1..second_sep];
        if item_lines.is_empty() {
            return Err(StructuralError::EmptyItems);
        }
        let items = item_lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                ItemLine::parse(line).map_err(|e| StructuralError::InvalidAmount {
                    // 1-based, counting the title line
                    line: first_sep + i + 2,
                    text: e.text,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total = sum_amounts(&items, first_sep + 2)?;

        if lines.len() <= second_sep + 1 {
            return Err(StructuralError::MissingFooter);
        }
        let footer = lines.last().cloned().unwrap_or_default();

        debug!(
            output = %output_name,
            header_rows = header.len(),
            items = items.len(),
            %total,
            "invoice structured"
        );

        Ok(Self {
            output_name,
            title: lines[0].clone(),
            header,
            items,
            total,
            payment,
            footer,
        })
    }

    /// Data for a payment QR code. `None` when the supplier has no bank account.
    pub fn payment_request(&self) -> Option<PaymentRequest> {
        let account = self.payment.account.clone()?;
        Some(PaymentRequest {
            account,
            amount: self.total,
            variable_symbol: self.payment.variable_symbol.clone(),
            message: self.title.clone(),
            due_date: self.payment.due_date.clone(),
        })
    }
}

/// Strip the `=>` marker and surrounding whitespace from the output-name line.
pub fn parse_output_name(line: &str) -> Result<String, StructuralError> {
    let name = line
        .trim_start()
        .strip_prefix(OUTPUT_MARKER)
        .ok_or(StructuralError::MissingOutputName)?
        .trim();

    if name.is_empty() {
        return Err(StructuralError::EmptyOutputName);
    }
    Ok(name.to_string())
}

/// In-order sum of priced items. `first_line` is the 1-based line of `items[0]`.
fn sum_amounts(items: &[ItemLine], first_line: usize) -> Result<Decimal, StructuralError> {
    items.iter().enumerate().try_fold(Decimal::ZERO, |acc, (i, item)| match item.amount() {
        Some(amount) => acc
            .checked_add(amount)
            .ok_or(StructuralError::TotalOverflow { line: first_line + i }),
        None => Ok(acc),
    })
}

fn find_separator(lines: &[String], from: usize) -> Option<usize> {
    lines.get(from..)?.iter().position(|l| l == SEPARATOR).map(|p| p + from)
}

fn build_header(block: &[String]) -> Result<Vec<HeaderRow>, StructuralError> {
    let position = |label: &'static str| {
        block
            .iter()
            .position(|l| l == label)
            .ok_or(StructuralError::MissingLabel { label })
    };
    let supplier = position(SUPPLIER_LABEL)?;
    let customer = position(CUSTOMER_LABEL)?;
    if customer < supplier {
        return Err(StructuralError::LabelOrder);
    }

    Ok(pair_columns(&block[supplier..customer], &block[customer..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_name() {
        assert_eq!(parse_output_name("=> faktura.pdf  ").unwrap(), "faktura.pdf");
        assert_eq!(parse_output_name("=>a b.pdf").unwrap(), "a b.pdf");
        assert_eq!(parse_output_name("=>").unwrap_err(), StructuralError::EmptyOutputName);
        assert_eq!(
            parse_output_name("faktura.pdf").unwrap_err(),
            StructuralError::MissingOutputName
        );
    }

    #[test]
    fn test_sum_amounts_skips_notes() {
        let items = [
            ItemLine::Priced { name: "A".into(), amount: Decimal::new(10050, 2) },
            ItemLine::Note { text: "x".into() },
            ItemLine::Priced { name: "B".into(), amount: Decimal::new(-50, 2) },
        ];
        assert_eq!(sum_amounts(&items, 5).unwrap(), Decimal::new(10000, 2));
        assert_eq!(sum_amounts(&[], 5).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_sum_amounts_overflow_reports_line() {
        let items = [
            ItemLine::Priced { name: "A".into(), amount: Decimal::MAX },
            ItemLine::Note { text: "x".into() },
            ItemLine::Priced { name: "B".into(), amount: Decimal::ONE },
        ];
        assert_eq!(
            sum_amounts(&items, 5).unwrap_err(),
            StructuralError::TotalOverflow { line: 7 }
        );
    }

    #[test]
    fn test_find_separator_from_offset() {
        let lines: Vec<String> =
            ["---", "a", "---", "b", "---"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_separator(&lines, 1), Some(2));
        assert_eq!(find_separator(&lines, 3), Some(4));
        assert_eq!(find_separator(&lines, 5), None);
        assert_eq!(find_separator(&lines, 9), None);
    }

    #[test]
    fn test_separator_must_match_exactly() {
        let lines: Vec<String> = ["x", " ---", "----"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_separator(&lines, 0), None);
    }
}
