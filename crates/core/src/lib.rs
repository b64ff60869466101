//! Invoice template resolution and structured document model.
//!
//! A template is resolved line by line ([`templates::TemplateResolver`]),
//! collected into an [`templates::InvoiceDocument`], and split into an
//! [`invoice::StructuredInvoice`] that renderers consume.

pub mod config;
pub mod invoice;
pub mod money;
pub mod render;
pub mod templates;
pub mod vars;

use std::path::Path;

use thiserror::Error;

use crate::invoice::{StructuralError, StructuredInvoice};
use crate::templates::{InvoiceDocument, LoadError, TemplateResolver};
use crate::vars::Clock;

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Structure(#[from] StructuralError),
}

/// Load, resolve and structure the template at `path`.
pub fn generate<C: Clock>(
    path: &Path,
    resolver: &TemplateResolver<C>,
) -> Result<StructuredInvoice, InvoiceError> {
    let doc = InvoiceDocument::load(path, resolver)?;
    Ok(StructuredInvoice::from_document(doc)?)
}
