use serde::Deserialize;
use serde_json::Number;

// One record from the sale-listings endpoint. Only the fields we
// render are kept; the rest of the payload is ignored.
//
// listing
//  ├── formattedAddress
//  ├── price
//  ├── bedrooms
//  ├── bathrooms
//  ├── propertyType
//  ├── status
//  └── daysOnMarket

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub formatted_address: Option<String>,
    pub price: Option<f64>,
    // Numbers are kept as sent so "2.5" baths stays "2.5".
    pub bedrooms: Option<Number>,
    pub bathrooms: Option<Number>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub days_on_market: Option<Number>,
}
