// src/config.rs

use crate::errors::SearchError;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const API_KEY_VAR: &str = "RENTCAST_API_KEY";

pub const DEFAULT_ENDPOINT: &str = "https://api.rentcast.io/v1/listings/sale";

/// Records requested from the endpoint, regardless of filters.
pub const RESULT_LIMIT: u32 = 10;

/// Entries rendered in a report.
pub const REPORT_SIZE: usize = 3;

/// Blocking reqwest's own default.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location searched when a query names no usable location.
/// Stands in for a geocoding step.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultLocation {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
}

impl Default for DefaultLocation {
    fn default() -> Self {
        Self {
            label: "Austin, TX".to_string(),
            latitude: 30.2672,
            longitude: -97.7431,
            radius: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Explicit credential. When unset, `api_key_var` is read on every search.
    pub api_key: Option<String>,
    pub api_key_var: String,
    pub endpoint: Url,
    pub timeout: Duration,
    pub default_location: DefaultLocation,
}

impl SearchConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            api_key: None,
            api_key_var: API_KEY_VAR.to_string(),
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_location: DefaultLocation::default(),
        }
    }

    /// Reads `RENTCAST_BASE_URL`, `HOME_SEARCH_TIMEOUT_SECS` and the
    /// `HOME_SEARCH_DEFAULT_*` overrides.
    ///
    /// The credential is not read here; see [`SearchConfig::resolve_api_key`].
    pub fn from_env() -> Result<Self, SearchError> {
        let endpoint = match env::var("RENTCAST_BASE_URL") {
            Ok(raw) if !raw.trim().is_empty() => Url::parse(raw.trim()).map_err(|e| {
                SearchError::Configuration(format!("RENTCAST_BASE_URL is not a valid URL: {e}"))
            })?,
            _ => Url::parse(DEFAULT_ENDPOINT)
                .map_err(|e| SearchError::Configuration(e.to_string()))?,
        };

        let timeout_secs = parse_env::<u64>("HOME_SEARCH_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(SearchError::Configuration(
                "HOME_SEARCH_TIMEOUT_SECS must be a positive number of seconds".to_string(),
            ));
        }

        let base = DefaultLocation::default();
        let default_location = DefaultLocation {
            label: env::var("HOME_SEARCH_DEFAULT_LABEL")
                .ok()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or(base.label),
            latitude: parse_env("HOME_SEARCH_DEFAULT_LATITUDE")?.unwrap_or(base.latitude),
            longitude: parse_env("HOME_SEARCH_DEFAULT_LONGITUDE")?.unwrap_or(base.longitude),
            radius: parse_env("HOME_SEARCH_DEFAULT_RADIUS")?.unwrap_or(base.radius),
        };

        Ok(Self::new(endpoint)
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_default_location(default_location))
    }

    /// The explicit key, else whatever `api_key_var` holds right now.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(&self.api_key_var).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_default_location(mut self, location: DefaultLocation) -> Self {
        self.default_location = location;
        self
    }
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, SearchError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map(Some).map_err(|_| {
            SearchError::Configuration(format!("{name} has an invalid value: {raw:?}"))
        }),
        _ => Ok(None),
    }
}
