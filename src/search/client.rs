// client.rs
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::search::models::Listing;
use crate::search::query::ListingsQuery;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use url::Url;

const API_KEY_HEADER: &str = "x-api-key";

pub struct ListingsClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ListingsClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(SearchError::missing_api_key)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Unexpected(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }

    /// One GET against the listings endpoint. No retries.
    pub fn fetch(&self, query: &ListingsQuery) -> Result<Vec<Listing>, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.api_key).map_err(|_| {
                SearchError::Configuration("RentCast API key contains invalid characters.".into())
            })?,
        );

        let params = query.params();
        tracing::debug!(endpoint = %self.endpoint, ?params, "requesting listings");

        let resp = self
            .client
            .get(self.endpoint.clone())
            .headers(headers)
            .query(&params)
            .send()
            .map_err(classify_transport_error)?;

        let status = resp.status();
        let text = resp.text().map_err(classify_transport_error)?;

        if !status.is_success() {
            let body = if text.trim().is_empty() {
                "(no body)".to_string()
            } else {
                text
            };
            return Err(SearchError::HttpStatus {
                status: status.to_string(),
                body,
            });
        }

        // A `null` body means nothing matched, same as `[]`.
        let listings: Vec<Listing> = serde_json::from_str::<Option<Vec<Listing>>>(&text)
            .map_err(|e| {
                SearchError::Unexpected(format!("could not parse listings response: {e}"))
            })?
            .unwrap_or_default();

        tracing::debug!(count = listings.len(), "listings received");
        Ok(listings)
    }
}

fn classify_transport_error(e: reqwest::Error) -> SearchError {
    // A connect that times out reports both; it is a timeout.
    if e.is_timeout() {
        SearchError::Timeout(e.to_string())
    } else if e.is_connect() {
        SearchError::Connection(e.to_string())
    } else {
        SearchError::Unexpected(e.to_string())
    }
}
