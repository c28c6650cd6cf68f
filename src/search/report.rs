use crate::config::REPORT_SIZE;
use crate::search::models::Listing;
use std::fmt::Display;

const MISSING: &str = "N/A";

/// Renders the first few listings as a numbered list, in API order.
///
/// `fallback` is the default location's label when no location was given.
pub fn format_report(listings: &[Listing], fallback: Option<&str>) -> String {
    let mut out = String::new();

    if let Some(label) = fallback {
        out.push_str(&format!(
            "Note: No specific location provided. Using default {label} location for search.\n"
        ));
    }

    out.push_str("Found the following properties for sale:\n");

    for (i, listing) in listings.iter().take(REPORT_SIZE).enumerate() {
        out.push_str(&format!("--- Property {} ---\n", i + 1));
        out.push_str(&format!(
            "Address: {}\n",
            or_missing(listing.formatted_address.as_ref())
        ));
        out.push_str(&format!("Price: {}\n", format_price(listing.price)));
        out.push_str(&format!(
            "Beds: {}, Baths: {}\n",
            or_missing(listing.bedrooms.as_ref()),
            or_missing(listing.bathrooms.as_ref())
        ));
        out.push_str(&format!(
            "Type: {}\n",
            or_missing(listing.property_type.as_ref())
        ));
        out.push_str(&format!("Status: {}\n", or_missing(listing.status.as_ref())));
        out.push_str(&format!(
            "Days on Market: {}\n",
            or_missing(listing.days_on_market.as_ref())
        ));
    }

    out
}

/// `$1,234,567`, rounded to whole dollars.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => {
            let rounded = p.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{sign}${}", group_thousands(rounded.abs() as u64))
        }
        _ => MISSING.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

fn or_missing<T: Display>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}
