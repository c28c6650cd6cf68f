use crate::config::{DefaultLocation, RESULT_LIMIT};
use crate::search::criteria::SearchCriteria;
use crate::search::location::{select_location, LocationSpec};

/// A normalized request for the listings endpoint: one location plus
/// whichever filters were given.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingsQuery {
    pub location: LocationSpec,
    pub filters: Vec<(&'static str, String)>,
    pub limit: u32,
}

impl ListingsQuery {
    pub fn from_criteria(criteria: &SearchCriteria, default: &DefaultLocation) -> Self {
        Self {
            location: select_location(criteria, default),
            filters: filter_params(criteria),
            limit: RESULT_LIMIT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.location.is_fallback()
    }

    /// Full parameter list: location, filters, then `limit`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.location.params();
        params.extend(self.filters.iter().cloned());
        params.push(("limit", self.limit.to_string()));
        params
    }
}

fn filter_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    let mut filters = Vec::new();

    if let Some(v) = criteria.min_price {
        filters.push(("minPrice", v.to_string()));
    }
    if let Some(v) = criteria.max_price {
        filters.push(("maxPrice", v.to_string()));
    }
    if let Some(v) = criteria.beds {
        filters.push(("bedrooms", v.to_string()));
    }
    if let Some(v) = criteria.baths {
        filters.push(("bathrooms", v.to_string()));
    }
    if let Some(v) = &criteria.property_type {
        filters.push(("propertyType", v.clone()));
    }
    if let Some(v) = &criteria.status {
        filters.push(("status", v.clone()));
    }

    filters
}
