// src/tests/search_tests/report_tests.rs

use crate::search::models::Listing;
use crate::search::report::{format_price, format_report};

fn listing(address: &str, price: f64) -> Listing {
    serde_json::from_value(serde_json::json!({
        "formattedAddress": address,
        "price": price,
        "bedrooms": 3,
        "bathrooms": 2.5,
        "propertyType": "Single Family",
        "status": "Active",
        "daysOnMarket": 12
    }))
    .unwrap()
}

#[test]
fn prices_are_grouped_without_decimals() {
    assert_eq!(format_price(Some(0.0)), "$0");
    assert_eq!(format_price(Some(999.0)), "$999");
    assert_eq!(format_price(Some(1000.0)), "$1,000");
    assert_eq!(format_price(Some(425_000.0)), "$425,000");
    assert_eq!(format_price(Some(1_234_567.4)), "$1,234,567");
    assert_eq!(format_price(Some(1_999.6)), "$2,000");
    assert_eq!(format_price(None), "N/A");
}

#[test]
fn report_renders_every_field() {
    let report = format_report(&[listing("12 Oak Ln, Austin, TX 78704", 425_000.0)], None);

    assert_eq!(
        report,
        "Found the following properties for sale:\n\
         --- Property 1 ---\n\
         Address: 12 Oak Ln, Austin, TX 78704\n\
         Price: $425,000\n\
         Beds: 3, Baths: 2.5\n\
         Type: Single Family\n\
         Status: Active\n\
         Days on Market: 12\n"
    );
}

#[test]
fn missing_fields_render_as_na_independently() {
    let sparse: Listing =
        serde_json::from_value(serde_json::json!({ "bedrooms": 2, "price": null })).unwrap();

    let report = format_report(&[sparse], None);

    assert!(report.contains("Address: N/A\n"));
    assert!(report.contains("Price: N/A\n"));
    assert!(report.contains("Beds: 2, Baths: N/A\n"));
    assert!(report.contains("Type: N/A\n"));
    assert!(report.contains("Status: N/A\n"));
    assert!(report.contains("Days on Market: N/A\n"));
}

#[test]
fn only_the_first_three_are_listed_in_order() {
    let listings: Vec<Listing> = (1..=5)
        .map(|i| listing(&format!("{i} Elm St"), 100_000.0 * i as f64))
        .collect();

    let report = format_report(&listings, None);

    assert_eq!(report.matches("--- Property").count(), 3);
    let first = report.find("1 Elm St").unwrap();
    let second = report.find("2 Elm St").unwrap();
    let third = report.find("3 Elm St").unwrap();
    assert!(first < second && second < third);
    assert!(!report.contains("4 Elm St"));
}

#[test]
fn fallback_report_says_so() {
    let report = format_report(&[listing("9 Pine Rd", 1.0)], Some("Austin, TX"));

    assert!(report.starts_with("Note: No specific location provided. Using default Austin, TX"));
    assert!(report.contains("--- Property 1 ---"));
}
