//! Anchored scalar field rules.
//!
//! One pattern per field, each keyed on a fixed literal anchor in the
//! source text. A field whose anchor is absent or whose value is
//! malformed comes back `None`; the other fields are unaffected.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::rules::capture;

static ORDER_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Order Number:(\d{3}-\d{7}-\d{7})").expect("valid order number regex")
});

static ORDER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Order Date:(\d{2}\.\d{2}\.\d{4})").expect("valid order date regex")
});

static INVOICE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Invoice Number :([A-Z0-9]+-[A-Z0-9]+)").expect("valid invoice number regex")
});

static INVOICE_DETAILS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Invoice Details :([A-Z]{2}-[A-Z0-9]+-\d+-\d+|[A-Z0-9-]+)")
        .expect("valid invoice details regex")
});

static INVOICE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Invoice Date :(\d{2}\.\d{2}\.\d{4})").expect("valid invoice date regex")
});

static GST_REGISTRATION_NO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"GST Registration No:([A-Z0-9]{15})").expect("valid GST regex")
});

static STATE_UT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"State/UT Code:(\d{2})").expect("valid state code regex"));

static PLACE_OF_SUPPLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Place of supply:([A-Z]+)").expect("valid supply regex"));

static PLACE_OF_DELIVERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Place of delivery:([A-Z]+)").expect("valid delivery regex"));

/// Total is the currency amount immediately preceding "Amount in Words:".
static TOTAL_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"₹([\d,]+\.\d{2})\s*Amount in Words:").expect("valid total amount regex")
});

/// The ten scalar fields matched by a single anchored pattern each.
/// Addresses and the seller name live in the address extractor.
#[derive(Debug, Default)]
pub(crate) struct ScalarFields {
    pub order_number: Option<String>,
    pub order_date: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_details: Option<String>,
    pub invoice_date: Option<String>,
    pub gst_registration_no: Option<String>,
    pub state_ut_code: Option<String>,
    pub place_of_supply: Option<String>,
    pub place_of_delivery: Option<String>,
    pub total_amount: Option<String>,
}

pub(crate) fn scalar_fields(text: &str) -> ScalarFields {
    ScalarFields {
        order_number: capture(&ORDER_NUMBER, text),
        order_date: capture(&ORDER_DATE, text).and_then(valid_date),
        invoice_number: capture(&INVOICE_NUMBER, text),
        invoice_details: capture(&INVOICE_DETAILS, text),
        invoice_date: capture(&INVOICE_DATE, text).and_then(valid_date),
        gst_registration_no: capture(&GST_REGISTRATION_NO, text),
        state_ut_code: capture(&STATE_UT_CODE, text),
        place_of_supply: capture(&PLACE_OF_SUPPLY, text),
        place_of_delivery: capture(&PLACE_OF_DELIVERY, text),
        total_amount: capture(&TOTAL_AMOUNT, text).map(|amount| format!("₹{amount}")),
    }
}

/// A token can match `DD.MM.YYYY` and still name no real calendar day
/// ("99.99.2025"); those are malformed values, dropped to null.
fn valid_date(token: String) -> Option<String> {
    NaiveDate::parse_from_str(&token, "%d.%m.%Y")
        .ok()
        .map(|_| token)
}
