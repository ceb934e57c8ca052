//! Record types, status derivation, and the error taxonomy.
//!
//! This module provides the canonical output shape of the extraction
//! engine: one [`InvoiceRecord`] per input document, every unresolved
//! field explicitly null.

mod error;
mod types;

pub use error::*;
pub use types::*;
