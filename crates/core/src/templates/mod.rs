pub mod engine;
pub mod repository;

pub use engine::{DATE_TOKENS, DateToken, TemplateResolver, has_variables};
pub use repository::{InvoiceDocument, LoadError};
