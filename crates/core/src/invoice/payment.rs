use rust_decimal::Decimal;
use serde::Serialize;

use super::header::HeaderRow;

/// Supplier column key holding the bank account.
pub const ACCOUNT_KEY: &str = "Bankovní účet";
/// Supplier column key holding the variable symbol.
pub const VARIABLE_SYMBOL_KEY: &str = "Variabilní symbol";
/// Customer column key holding the due date.
pub const DUE_DATE_KEY: &str = "Datum splatnosti";

/// Payment details derived from the header block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentFields {
    pub account: Option<String>,
    pub variable_symbol: Option<String>,
    pub due_date: Option<String>,
}

impl PaymentFields {
    /// Scan header rows in order. A later match replaces an earlier one.
    ///
    /// Fields whose keys match none of the payment keys are display-only.
    pub fn extract(rows: &[HeaderRow]) -> Self {
        let mut fields = Self::default();
        for row in rows {
            if let Some(v) = row.left.field_value(ACCOUNT_KEY) {
                fields.account = Some(v.to_string());
            } else if let Some(v) = row.left.field_value(VARIABLE_SYMBOL_KEY) {
                fields.variable_symbol = Some(v.to_string());
            }
            if let Some(v) = row.right.field_value(DUE_DATE_KEY) {
                fields.due_date = Some(v.to_string());
            }
        }
        fields
    }
}

/// Everything a payment QR generator needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub account: String,
    pub amount: Decimal,
    pub variable_symbol: Option<String>,
    pub message: String,
    pub due_date: Option<String>,
}
