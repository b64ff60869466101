use serde::Serialize;

use crate::invoice::{PaymentRequest, StructuredInvoice};

#[derive(Serialize)]
struct JsonInvoice<'a> {
    #[serde(flatten)]
    invoice: &'a StructuredInvoice,
    payment_request: Option<PaymentRequest>,
}

/// Pretty-printed JSON of the invoice model plus its payment request.
pub fn render_json(invoice: &StructuredInvoice) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonInvoice {
        invoice,
        payment_request: invoice.payment_request(),
    })
}
