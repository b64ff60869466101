//! Structured invoice model built from a resolved [`InvoiceDocument`].
//!
//! The template grammar is:
//!
//! ```text
//! <title>
//! <header lines with DODAVATEL and ODBĚRATEL labels>
//! ---
//! <items: "name = amount Kč" or plain text>
//! ---
//! <footer>
//! =><output name>
//! ```
//!
//! [`InvoiceDocument`]: crate::templates::InvoiceDocument

pub mod header;
pub mod items;
pub mod payment;
pub mod structure;

pub use header::{EMPHASIZED_ROW, HeaderCell, HeaderRow, pair_columns};
pub use items::{AmountError, ItemLine, format_amount, parse_amount};
pub use payment::{PaymentFields, PaymentRequest};
pub use structure::{
    CUSTOMER_LABEL, OUTPUT_MARKER, SEPARATOR, SUPPLIER_LABEL, StructuralError,
    StructuredInvoice,
};
