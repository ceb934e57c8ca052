use serde::{Deserialize, Serialize};

/// Outcome of one extraction run.
///
/// `Success` iff the invoice number was found; every other field is
/// irrelevant to the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The invoice number was extracted.
    Success,
    /// No invoice number, or the document text could not be obtained.
    #[default]
    Failed,
}

impl Status {
    /// Lowercase wire form, as serialized ("success" / "failed").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Structured record extracted from one invoice document.
///
/// Scalar fields are nullable: `None` means the field's anchor was absent
/// or its value malformed, never that extraction aborted. The four
/// line-item sequences are parallel and have length 0 or 1 — the table
/// heuristic supports a single line item per invoice.
///
/// Invariants upheld by the engine:
/// - money values are a currency symbol followed by a two-decimal numeral,
/// - dates are `DD.MM.YYYY`,
/// - address fields contain no newlines and no doubled or edge whitespace,
/// - `status == Success` iff `invoice_number` is non-null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Caller-supplied document identifier (e.g. the source file name).
    pub filename: String,
    /// Digits grouped 3-7-7 after "Order Number:".
    pub order_number: Option<String>,
    /// `DD.MM.YYYY` after "Order Date:".
    pub order_date: Option<String>,
    /// Alphanumeric-hyphen token after "Invoice Number :".
    pub invoice_number: Option<String>,
    /// Two-letter prefix plus numeric segments after "Invoice Details :".
    pub invoice_details: Option<String>,
    /// `DD.MM.YYYY` after "Invoice Date :".
    pub invoice_date: Option<String>,
    /// 15 alphanumeric characters after "GST Registration No:".
    pub gst_registration_no: Option<String>,
    /// Two digits after "State/UT Code:".
    pub state_ut_code: Option<String>,
    /// Uppercase token after "Place of supply:".
    pub place_of_supply: Option<String>,
    /// Uppercase token after "Place of delivery:".
    pub place_of_delivery: Option<String>,
    /// First line of the "Sold By :" block.
    pub seller_name: Option<String>,
    /// Remaining lines of the "Sold By :" block, joined with single spaces.
    pub seller_address: Option<String>,
    /// Text between "Billing Address :" and "State/UT Code:", collapsed.
    pub billing_address: Option<String>,
    /// Text between "Shipping Address :" and "State/UT Code:", collapsed.
    pub shipping_address: Option<String>,
    /// Currency amount immediately preceding "Amount in Words:".
    pub total_amount: Option<String>,
    /// Line-item description (whitespace-collapsed).
    pub descriptions: Vec<String>,
    /// Line-item unit price, symbol-prefixed.
    pub unit_prices: Vec<String>,
    /// Line-item quantity; "1" when the table carries no quantity token.
    pub qtys: Vec<String>,
    /// Line-item net amount, symbol-prefixed.
    pub net_amounts: Vec<String>,
    /// Success iff `invoice_number` is non-null.
    pub status: Status,
    /// Upstream acquisition error message; only set on failure records
    /// built by [`InvoiceRecord::failure`].
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl InvoiceRecord {
    /// Record for a document whose text could not be obtained upstream.
    ///
    /// The engine is never invoked for such documents: every extraction
    /// field stays null, `status` is `Failed`, and the acquisition error
    /// message is attached.
    pub fn failure(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            error: Some(message.into()),
            ..Self::default()
        }
    }
}
