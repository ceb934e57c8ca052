//! # beejak
//!
//! Invoice text extraction library: converts the already-extracted text of a
//! vendor-formatted invoice's first page into a structured [`InvoiceRecord`]
//! of named fields plus a single line-item entry.
//!
//! The engine is a set of anchored pattern rules with ordered fallback
//! strategies per field, and a counting heuristic that disambiguates
//! description, unit price, quantity and net amount inside the line-item
//! table. It is a pure function of the input text: no I/O, no shared mutable
//! state, and it never fails — fields that cannot be matched come back as
//! `None`, and the record's [`Status`] depends only on whether the invoice
//! number was found.
//!
//! ## Quick Start
//!
//! ```rust
//! let text = "\
//! Sold By :
//! Acme Traders
//! Shop 45-A, MG Road
//! IN
//! PAN No: AALCR3173P
//! GST Registration No:27AALCR3173P1ZN
//! Order Number:407-2126009-5587507
//! Order Date:10.06.2025
//! Invoice Number :BOM7-556301
//! Invoice Date :10.06.2025
//! Billing Address :
//! Ravi Kumar
//! Flat 4B, Lake Road, Mumbai
//! State/UT Code:27
//! 1 USB-C Cable 1m ₹380.00 2 PCS ₹760.00
//! TOTAL:
//! ₹760.00 Amount in Words:
//! Seven Hundred Sixty only
//! ";
//!
//! let record = beejak::extract(text, "invoice_1.pdf");
//! assert_eq!(record.order_number.as_deref(), Some("407-2126009-5587507"));
//! assert_eq!(record.seller_name.as_deref(), Some("Acme Traders"));
//! assert_eq!(record.seller_address.as_deref(), Some("Shop 45-A, MG Road"));
//! assert_eq!(record.unit_prices, vec!["₹380.00"]);
//! assert_eq!(record.net_amounts, vec!["₹760.00"]);
//! assert_eq!(record.qtys, vec!["2"]);
//! assert_eq!(record.status, beejak::Status::Success);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Record types, status derivation, error taxonomy |
//! | `extract` (default) | The extraction engine |
//! | `sheet` | Fixed-column CSV rows for the spreadsheet consumer |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extract")]
pub mod extract;

#[cfg(feature = "sheet")]
pub mod sheet;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "extract")]
pub use crate::extract::extract;
