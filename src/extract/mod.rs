//! The extraction engine.
//!
//! Three independent passes over the raw text — anchored scalar fields,
//! address blocks, and the line-item table — merged into one
//! [`InvoiceRecord`]. All passes are pure functions of the input; none
//! depends on another's output, so a miss in one never affects the rest.

mod address;
mod fields;
mod rules;
mod table;
pub mod text;

use crate::core::{InvoiceRecord, Status};

/// Extract a structured record from the first-page text of an invoice.
///
/// Total and deterministic: repeated calls on the same input yield the
/// same record, partial or garbage input yields a record with null fields
/// rather than an error, and no call can affect any other. `filename` is
/// the caller-supplied document identifier and is copied through verbatim.
pub fn extract(text: &str, filename: &str) -> InvoiceRecord {
    let fields = fields::scalar_fields(text);
    let addresses = address::address_blocks(text);
    let items = table::line_items(text);

    let status = if fields.invoice_number.is_some() {
        Status::Success
    } else {
        Status::Failed
    };

    InvoiceRecord {
        filename: filename.to_string(),
        order_number: fields.order_number,
        order_date: fields.order_date,
        invoice_number: fields.invoice_number,
        invoice_details: fields.invoice_details,
        invoice_date: fields.invoice_date,
        gst_registration_no: fields.gst_registration_no,
        state_ut_code: fields.state_ut_code,
        place_of_supply: fields.place_of_supply,
        place_of_delivery: fields.place_of_delivery,
        seller_name: addresses.seller_name,
        seller_address: addresses.seller_address,
        billing_address: addresses.billing_address,
        shipping_address: addresses.shipping_address,
        total_amount: fields.total_amount,
        descriptions: items.descriptions,
        unit_prices: items.unit_prices,
        qtys: items.qtys,
        net_amounts: items.net_amounts,
        status,
        error: None,
    }
}
