//! Property-based tests for the extraction engine.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "extract")]

use beejak::extract::text::collapse_whitespace;
use beejak::{Status, extract};
use proptest::prelude::*;

proptest! {
    /// Collapsing whitespace twice yields the same string as once.
    #[test]
    fn whitespace_collapse_is_idempotent(s in "\\PC*") {
        let once = collapse_whitespace(&s);
        prop_assert_eq!(collapse_whitespace(&once), once);
    }

    /// Same input, same record — the engine has no hidden state.
    #[test]
    fn extraction_is_deterministic(s in "\\PC*") {
        prop_assert_eq!(extract(&s, "doc.pdf"), extract(&s, "doc.pdf"));
    }

    /// The engine is total: arbitrary input never panics and always
    /// produces a record carrying the supplied filename.
    #[test]
    fn extraction_never_panics(s in "\\PC*", name in "[a-z_]{1,12}\\.pdf") {
        let record = extract(&s, &name);
        prop_assert_eq!(record.filename, name);
    }

    /// Text that cannot contain any anchor literal yields an all-null
    /// record with empty sequences.
    #[test]
    fn anchorless_text_yields_null_record(s in "[a-z ]*") {
        let record = extract(&s, "doc.pdf");
        prop_assert_eq!(record.order_number, None);
        prop_assert_eq!(record.invoice_number, None);
        prop_assert_eq!(record.gst_registration_no, None);
        prop_assert_eq!(record.seller_name, None);
        prop_assert_eq!(record.billing_address, None);
        prop_assert_eq!(record.total_amount, None);
        prop_assert!(record.descriptions.is_empty());
        prop_assert!(record.unit_prices.is_empty());
        prop_assert!(record.qtys.is_empty());
        prop_assert!(record.net_amounts.is_empty());
        prop_assert_eq!(record.status, Status::Failed);
    }

    /// `status` tracks `invoice_number` and nothing else.
    #[test]
    fn status_tracks_invoice_number(s in "\\PC*") {
        let record = extract(&s, "doc.pdf");
        prop_assert_eq!(
            record.status == Status::Success,
            record.invoice_number.is_some()
        );
    }

    /// Extracted address fields never carry newlines or edge whitespace.
    #[test]
    fn addresses_are_always_collapsed(s in "\\PC*") {
        let record = extract(&s, "doc.pdf");
        for field in [
            record.seller_address,
            record.billing_address,
            record.shipping_address,
        ].into_iter().flatten() {
            prop_assert!(!field.contains('\n'));
            prop_assert!(field.trim() == field);
        }
    }
}
