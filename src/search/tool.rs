use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::search::client::ListingsClient;
use crate::search::criteria::SearchCriteria;
use crate::search::query::ListingsQuery;
use crate::search::report::format_report;
use serde_json::{json, Value};

pub const TOOL_NAME: &str = "Property Sale Listings Search Tool";

pub const TOOL_DESCRIPTION: &str = "Searches for real estate properties FOR SALE. Can search by: \
     1. Full address (Street, City, State, Zip). \
     2. City, State, or Zip Code. \
     3. Geographic coordinates (latitude, longitude, radius in miles). \
     Also accepts optional criteria like min/max price, beds, baths, property type and status. \
     Returns a list of properties for sale.";

/// The search entry point a conversational loop calls once per turn.
pub struct PropertySearchTool {
    config: SearchConfig,
}

impl PropertySearchTool {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Runs one search and always returns text: the report, or a message
    /// describing why there is none.
    pub fn search(&self, criteria: &SearchCriteria) -> String {
        match self.try_search(criteria) {
            Ok(report) => report,
            Err(err) => {
                match &err {
                    SearchError::NoResults { .. } => tracing::info!("no listings matched"),
                    other => tracing::error!(kind = other.kind(), "listings search failed: {other}"),
                }
                err.to_string()
            }
        }
    }

    pub fn try_search(&self, criteria: &SearchCriteria) -> Result<String, SearchError> {
        // Key is resolved per call, before anything touches the network.
        let client = ListingsClient::new(&self.config)?;

        let query = ListingsQuery::from_criteria(criteria, &self.config.default_location);
        let fallback = query.location.fallback_label().map(str::to_string);

        tracing::info!(
            mode = query.location.mode(),
            filters = query.filters.len(),
            "searching sale listings"
        );
        if query.is_fallback() {
            tracing::warn!(
                "no specific location provided, using default {} location",
                self.config.default_location.label
            );
        }

        let listings = client.fetch(&query)?;

        if listings.is_empty() {
            return Err(SearchError::NoResults { fallback });
        }

        Ok(format_report(&listings, fallback.as_deref()))
    }

    /// Function-calling definition for registering this tool with an agent.
    pub fn descriptor() -> Value {
        json!({
            "type": "function",
            "function": {
                "name": TOOL_NAME,
                "description": TOOL_DESCRIPTION,
                "parameters": {
                    "type": "object",
                    "properties": {
                        "address": { "type": "string", "description": "Full address of the property." },
                        "city": { "type": "string", "description": "City to search in." },
                        "state": { "type": "string", "description": "2-character state abbreviation, e.g. 'TX'." },
                        "zip_code": { "type": "string", "description": "5-digit zip code." },
                        "latitude": { "type": "number", "description": "Latitude of the search center." },
                        "longitude": { "type": "number", "description": "Longitude of the search center." },
                        "radius": { "type": "integer", "description": "Search radius in miles." },
                        "min_price": { "type": "integer", "description": "Minimum price in USD." },
                        "max_price": { "type": "integer", "description": "Maximum price in USD." },
                        "beds": { "type": "integer", "description": "Number of bedrooms." },
                        "baths": { "type": "integer", "description": "Number of bathrooms." },
                        "property_type": { "type": "string", "description": "Property type, e.g. 'Single Family' or 'Condo'." },
                        "status": { "type": "string", "description": "Listing status, e.g. 'Active'." }
                    },
                    "required": []
                }
            }
        })
    }
}
