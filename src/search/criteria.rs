use serde::{Deserialize, Serialize};

/// What a caller asks for in one turn.
///
/// Every recognised field is declared here; anything else in a JSON
/// criteria object is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Full street address, e.g. "123 Main St, Austin, TX 78704".
    pub address: Option<String>,
    pub city: Option<String>,
    /// Two-letter state code.
    pub state: Option<String>,
    pub zip_code: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Miles.
    pub radius: Option<u32>,

    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    /// e.g. "Single Family", "Condo".
    pub property_type: Option<String>,
    /// e.g. "Active".
    pub status: Option<String>,
}

impl SearchCriteria {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
