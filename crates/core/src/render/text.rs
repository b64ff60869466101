//! Plain-text invoice layout.
//!
//! Mirrors the page structure of the printed invoice: right-aligned title,
//! the two header columns side by side, a priced item list with a total, the
//! payment block, and the footer.

use std::fmt::Write;

use crate::invoice::{HeaderCell, HeaderRow, ItemLine, StructuredInvoice};
use crate::money::CurrencyFormatter;

const PAGE_WIDTH: usize = 96;
const HALF_CELL: usize = 45;
const GUTTER: usize = 6;
const AMOUNT_WIDTH: usize = 30;

pub fn render_text(invoice: &StructuredInvoice, currency: &CurrencyFormatter) -> String {
    let mut out = String::new();

    push_line(&mut out, &format!("{:>PAGE_WIDTH$}", invoice.title));
    push_line(&mut out, &format!("{:>PAGE_WIDTH$}", "=".repeat(invoice.title.chars().count())));
    out.push('\n');

    for row in &invoice.header {
        push_line(&mut out, &header_row(row));
    }
    out.push('\n');

    push_line(&mut out, &format!("{:>PAGE_WIDTH$}", "CENA"));
    push_line(&mut out, &"-".repeat(PAGE_WIDTH));
    for item in &invoice.items {
        push_line(&mut out, &item_row(item, currency));
    }
    push_line(&mut out, &"-".repeat(PAGE_WIDTH));
    push_line(&mut out, &format!("{:>PAGE_WIDTH$}", currency.format(invoice.total)));

    if let Some(req) = invoice.payment_request() {
        out.push('\n');
        push_line(&mut out, &format!("Účet: {}", req.account));
        if let Some(vs) = &req.variable_symbol {
            push_line(&mut out, &format!("VS: {vs}"));
        }
        if let Some(due) = &req.due_date {
            push_line(&mut out, &format!("Splatnost: {due}"));
        }
        push_line(&mut out, &format!("Částka: {}", currency.format(req.amount)));
    }

    out.push('\n');
    push_line(&mut out, &invoice.footer);
    out
}

fn push_line(out: &mut String, line: &str) {
    // Infallible for String
    let _ = writeln!(out, "{}", line.trim_end());
}

fn header_row(row: &HeaderRow) -> String {
    let cell = |c: &HeaderCell| match c {
        HeaderCell::Field { key, value } => format!("{key:<HALF_CELL$}{value:>HALF_CELL$}"),
        HeaderCell::Text { text } => format!("{text:<width$}", width = HALF_CELL * 2),
    };
    let left = cell(&row.left);
    let right = cell(&row.right);
    let line = format!("{left}{:GUTTER$}{right}", "");
    if row.emphasized { line.to_uppercase() } else { line }
}

fn item_row(item: &ItemLine, currency: &CurrencyFormatter) -> String {
    match item {
        ItemLine::Priced { name, amount } => {
            let width = PAGE_WIDTH - AMOUNT_WIDTH;
            format!("{name:<width$}{:>AMOUNT_WIDTH$}", currency.format(*amount))
        }
        ItemLine::Note { text } => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::pair_columns;
    use crate::invoice::PaymentFields;
    use rust_decimal::Decimal;

    fn sample() -> StructuredInvoice {
        let header = pair_columns(
            &["DODAVATEL", "", "Firma s.r.o.", "Bankovní účet = 123/0100"],
            &["ODBĚRATEL", "", "Zákazník a.s."],
        );
        let payment = PaymentFields::extract(&header);
        StructuredInvoice {
            output_name: "faktura.pdf".into(),
            title: "FAKTURA 2024001".into(),
            header,
            items: vec![
                ItemLine::Priced { name: "Vývoj".into(), amount: Decimal::from(12000) },
                ItemLine::Note { text: "  hodinová sazba".into() },
            ],
            total: Decimal::from(12000),
            payment,
            footer: "Nejsem plátce DPH.".into(),
        }
    }

    #[test]
    fn test_title_is_right_aligned() {
        let out = render_text(&sample(), &CurrencyFormatter::default());
        let first = out.lines().next().unwrap();
        assert_eq!(first.chars().count(), PAGE_WIDTH);
        assert!(first.ends_with("FAKTURA 2024001"));
    }

    #[test]
    fn test_field_rows_align_values() {
        let out = render_text(&sample(), &CurrencyFormatter::default());
        let account = out.lines().find(|l| l.starts_with("Bankovní účet")).unwrap();
        assert!(account.ends_with("123/0100"));
        assert_eq!(account.chars().count(), HALF_CELL * 2);
    }

    #[test]
    fn test_emphasized_row_is_uppercased() {
        let out = render_text(&sample(), &CurrencyFormatter::default());
        assert!(out.contains("FIRMA S.R.O."));
        assert!(out.contains("ZÁKAZNÍK A.S."));
    }

    #[test]
    fn test_items_total_and_footer() {
        let out = render_text(&sample(), &CurrencyFormatter::default());
        assert!(out.lines().any(|l| l.starts_with("Vývoj") && l.ends_with("12 000,00 Kč")));
        assert!(out.lines().any(|l| l == "  hodinová sazba"));
        assert!(out.contains("Účet: 123/0100"));
        assert!(!out.contains("VS:"));
        assert_eq!(out.lines().last(), Some("Nejsem plátce DPH."));
    }
}
