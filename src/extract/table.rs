//! Line-item table heuristics.
//!
//! Isolates the product segment — from the line-item index to "TOTAL:" —
//! then derives description, unit price, quantity and net amount by
//! counting currency tokens. The heuristic assumes a single line item per
//! invoice; it is not a general row-boundary table parser, so every
//! output sequence has length 0 or 1.

use std::sync::LazyLock;

use regex::Regex;

use super::text::collapse_whitespace;

/// Start of the product segment: a line-item index (leading integer) at
/// the start of a line.
static SEGMENT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^\s*\d+\s+(.*)").expect("valid segment regex"));

/// A currency-amount token: the symbol, then digits with optional
/// thousands separators and exactly two decimal places.
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹\s*([\d,]+\.\d{2})").expect("valid amount regex"));

/// A standalone integer token, optionally carrying a unit-of-measure
/// suffix. Matched against whole whitespace-delimited tokens, so the
/// digits inside a currency amount never qualify.
static QTY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:PCS|QTY|NOS|UNIT)?\.?$").expect("valid quantity regex"));

const SEGMENT_END: &str = "TOTAL:";

/// The four parallel line-item sequences.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct LineItems {
    pub descriptions: Vec<String>,
    pub unit_prices: Vec<String>,
    pub qtys: Vec<String>,
    pub net_amounts: Vec<String>,
}

pub(crate) fn line_items(text: &str) -> LineItems {
    let mut items = LineItems::default();

    let Some(caps) = SEGMENT_START.captures(text) else {
        return items;
    };
    let segment = caps.get(1).map_or("", |m| m.as_str());
    let segment = match segment.find(SEGMENT_END) {
        Some(end) => &segment[..end],
        None => segment,
    };

    // Description: everything before the first currency symbol. No
    // currency symbol in the segment leaves the sequence empty.
    if let Some(pos) = segment.find('₹') {
        items.descriptions.push(collapse_whitespace(&segment[..pos]));
    }

    let amounts: Vec<String> = AMOUNT
        .captures_iter(segment)
        .map(|caps| format!("₹{}", &caps[1]))
        .collect();
    match amounts.len() {
        0 => {}
        // A single amount doubles as both unit price and net amount.
        1 => {
            items.unit_prices.push(amounts[0].clone());
            items.net_amounts.push(amounts[0].clone());
        }
        _ => {
            items.unit_prices.push(amounts[0].clone());
            items.net_amounts.push(amounts[1].clone());
        }
    }

    items.qtys.push(quantity(segment));
    items
}

/// First standalone integer token in the segment, defaulting to "1".
fn quantity(segment: &str) -> String {
    segment
        .split_whitespace()
        .find_map(|token| QTY_TOKEN.captures(token).map(|caps| caps[1].to_string()))
        .unwrap_or_else(|| "1".to_string())
}
