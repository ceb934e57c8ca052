//! Multi-line address block extraction.
//!
//! The seller block has a primary strategy (the text between "Sold By :"
//! and the first standalone "IN" or "*") and a marker-based fallback,
//! tried in order. Billing and shipping addresses are single anchored
//! spans. Every returned string is whitespace-collapsed: no newlines, no
//! doubled spaces, no edge whitespace.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{self, Matcher, capture};
use super::text::collapse_whitespace;

/// Primary seller block: everything after "Sold By :" up to the first
/// standalone "IN" token or "*". Word boundaries keep the "in" inside
/// words like "Main" from terminating the block early.
static SELLER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Sold By :\s*(.*?)(?:\s*\bIN\b|\s*\*)").expect("valid seller block regex")
});

/// Fallback seller name: a bounded alphabetic-plus-punctuation run
/// ending at "*" or "IN".
static SELLER_NAME_BOUNDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Sold By :\s*([A-Za-z][A-Za-z\s&.,()]+?)(?:\s*\*|\s*\bIN\b)")
        .expect("valid seller name regex")
});

/// Fallback seller address: text between the "*"/"IN" marker and "PAN No:".
static SELLER_ADDRESS_TO_PAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:\*|\bIN\b)\s*(.*?)\s*PAN No:").expect("valid seller address regex")
});

static BILLING_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Billing Address :\s*(.*?)\s*State/UT Code:")
        .expect("valid billing address regex")
});

static SHIPPING_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Shipping Address :\s*(.*?)\s*State/UT Code:")
        .expect("valid shipping address regex")
});

/// The four fields owned by this extractor.
#[derive(Debug, Default)]
pub(crate) struct AddressBlocks {
    pub seller_name: Option<String>,
    pub seller_address: Option<String>,
    pub billing_address: Option<String>,
    pub shipping_address: Option<String>,
}

/// Seller name/address as resolved by one strategy.
#[derive(Debug)]
struct SellerBlock {
    name: Option<String>,
    address: Option<String>,
}

pub(crate) fn address_blocks(text: &str) -> AddressBlocks {
    const SELLER_CHAIN: &[Matcher<SellerBlock>] = &[seller_from_block, seller_from_markers];

    let seller = rules::first_match(text, SELLER_CHAIN).unwrap_or(SellerBlock {
        name: None,
        address: None,
    });

    AddressBlocks {
        seller_name: seller.name,
        seller_address: seller.address,
        billing_address: capture(&BILLING_ADDRESS, text).map(|s| collapse_whitespace(&s)),
        shipping_address: capture(&SHIPPING_ADDRESS, text).map(|s| collapse_whitespace(&s)),
    }
}

/// Primary strategy: split the block into non-empty lines; the first line
/// is the seller name, the remaining lines joined with single spaces form
/// the address. Locating the block counts as success even when it holds a
/// single line (the address is then null); the fallback only runs when
/// the block itself is absent.
fn seller_from_block(text: &str) -> Option<SellerBlock> {
    let block = capture(&SELLER_BLOCK, text)?;
    let mut lines = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let name = lines.next().map(collapse_whitespace);
    let rest: Vec<&str> = lines.collect();
    let address = if rest.is_empty() {
        None
    } else {
        Some(collapse_whitespace(&rest.join(" ")))
    };

    Some(SellerBlock { name, address })
}

/// Fallback strategy: bounded name run before the "*"/"IN" marker, and
/// address between the marker and "PAN No:".
fn seller_from_markers(text: &str) -> Option<SellerBlock> {
    let name = capture(&SELLER_NAME_BOUNDED, text).map(|s| collapse_whitespace(&s));
    let address = capture(&SELLER_ADDRESS_TO_PAN, text).map(|s| collapse_whitespace(&s));

    if name.is_none() && address.is_none() {
        return None;
    }
    Some(SellerBlock { name, address })
}
