//! Fixed-column rows for the spreadsheet-writing consumer.
//!
//! The core owns no file format; this module only maps records onto the
//! column order the sheet writer expects and renders them as quoted CSV
//! with CRLF line endings. Null fields become empty cells; the line-item
//! sequences join their entries with "; " (at most one entry in scope).

use crate::core::InvoiceRecord;

/// Column order expected by the spreadsheet writer.
pub const COLUMNS: [&str; 20] = [
    "filename",
    "order_number",
    "order_date",
    "invoice_number",
    "invoice_details",
    "invoice_date",
    "gst_registration_no",
    "state_ut_code",
    "place_of_supply",
    "place_of_delivery",
    "seller_name",
    "seller_address",
    "billing_address",
    "shipping_address",
    "total_amount",
    "descriptions",
    "unit_prices",
    "qtys",
    "net_amounts",
    "status",
];

/// One record rendered as its 20 cells, in [`COLUMNS`] order.
pub fn record_cells(record: &InvoiceRecord) -> [String; 20] {
    [
        record.filename.clone(),
        cell(&record.order_number),
        cell(&record.order_date),
        cell(&record.invoice_number),
        cell(&record.invoice_details),
        cell(&record.invoice_date),
        cell(&record.gst_registration_no),
        cell(&record.state_ut_code),
        cell(&record.place_of_supply),
        cell(&record.place_of_delivery),
        cell(&record.seller_name),
        cell(&record.seller_address),
        cell(&record.billing_address),
        cell(&record.shipping_address),
        cell(&record.total_amount),
        record.descriptions.join("; "),
        record.unit_prices.join("; "),
        record.qtys.join("; "),
        record.net_amounts.join("; "),
        record.status.as_str().to_string(),
    ]
}

/// Render records as a CSV sheet with a header row.
pub fn to_csv(records: &[InvoiceRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, COLUMNS.iter().copied());
    for record in records {
        let cells = record_cells(record);
        write_row(&mut out, cells.iter().map(String::as_str));
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(',');
        }
        csv_field(out, cell);
    }
    out.push_str("\r\n");
}

fn csv_field(out: &mut String, value: &str) {
    out.push('"');
    // Escape internal double quotes
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
