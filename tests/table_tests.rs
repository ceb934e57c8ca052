use beejak::extract;

// --- Currency token counting ---

#[test]
fn two_tokens_map_to_unit_price_and_net_amount() {
    let record = extract("1 Cable 2 PCS ₹100.00 ₹100.00\nTOTAL:", "doc");
    assert_eq!(record.unit_prices, vec!["₹100.00"]);
    assert_eq!(record.net_amounts, vec!["₹100.00"]);
    assert_eq!(record.qtys, vec!["2"]);
}

#[test]
fn first_two_of_many_tokens_win() {
    let record = extract("1 Cable ₹647.46 ₹647.46 ₹58.27 ₹764.00\nTOTAL:", "doc");
    assert_eq!(record.unit_prices, vec!["₹647.46"]);
    assert_eq!(record.net_amounts, vec!["₹647.46"]);
}

#[test]
fn single_token_is_both_unit_price_and_net_amount() {
    let record = extract("1 Cable ₹99.00\nTOTAL:", "doc");
    assert_eq!(record.unit_prices, vec!["₹99.00"]);
    assert_eq!(record.net_amounts, vec!["₹99.00"]);
}

#[test]
fn no_tokens_leave_price_sequences_empty() {
    let record = extract("1 Cable with no price\nTOTAL:", "doc");
    assert!(record.unit_prices.is_empty());
    assert!(record.net_amounts.is_empty());
    assert!(record.descriptions.is_empty());
    // The segment exists, so quantity still defaults.
    assert_eq!(record.qtys, vec!["1"]);
}

#[test]
fn no_segment_leaves_all_sequences_empty() {
    let record = extract("Invoice Number :BOM7-556301", "doc");
    assert!(record.descriptions.is_empty());
    assert!(record.unit_prices.is_empty());
    assert!(record.qtys.is_empty());
    assert!(record.net_amounts.is_empty());
}

// --- Description ---

#[test]
fn description_is_text_before_first_currency_token() {
    let record = extract("1 Boat Type C\nA325 Cable ₹647.46 ₹764.00\nTOTAL:", "doc");
    assert_eq!(record.descriptions, vec!["Boat Type C A325 Cable"]);
}

#[test]
fn thousands_separators_are_preserved() {
    let record = extract("1 Laptop Stand ₹1,299.00 ₹1,299.00\nTOTAL:", "doc");
    assert_eq!(record.unit_prices, vec!["₹1,299.00"]);
}

// --- Quantity ---

#[test]
fn quantity_defaults_to_one_without_a_token() {
    let record = extract("1 Cable ₹50.00 ₹50.00\nTOTAL:", "doc");
    assert_eq!(record.qtys, vec!["1"]);
}

#[test]
fn quantity_reads_uom_marked_tokens() {
    for (text, expected) in [
        ("1 Cable 2 PCS ₹10.00\nTOTAL:", "2"),
        ("1 Cable 4 QTY ₹10.00\nTOTAL:", "4"),
        ("1 Cable 6NOS ₹10.00\nTOTAL:", "6"),
        ("1 Cable 3UNIT. ₹10.00\nTOTAL:", "3"),
    ] {
        let record = extract(text, "doc");
        assert_eq!(record.qtys, vec![expected], "text: {text:?}");
    }
}

#[test]
fn digits_inside_amounts_are_not_quantities() {
    let record = extract("1 Cable ₹100.00 ₹100.00 2 PCS\nTOTAL:", "doc");
    assert_eq!(record.qtys, vec!["2"]);
}

#[test]
fn segment_ends_at_total_marker() {
    let record = extract("1 Cable ₹50.00 ₹75.00\nTOTAL:\n₹764.00 Amount in Words:", "doc");
    assert_eq!(record.unit_prices, vec!["₹50.00"]);
    assert_eq!(record.net_amounts, vec!["₹75.00"]);
    // The grand total belongs to the scalar extractor, not the table.
    assert_eq!(record.total_amount.as_deref(), Some("₹764.00"));
}
