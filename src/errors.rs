// errors.rs
use thiserror::Error;

/// Every way a listings search can end without a report.
///
/// The `Display` text is what the caller shows the user; `search` never
/// hands these out as structured errors.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Error: {0}")]
    Configuration(String),

    #[error("Error Connecting: {0} - Check your internet connection.")]
    Connection(String),

    #[error("Timeout Error: {0} - Request took too long.")]
    Timeout(String),

    #[error("HTTP Error: {status} - {body}. Check API key or request parameters.")]
    HttpStatus { status: String, body: String },

    #[error("{}", no_results_message(.fallback))]
    NoResults { fallback: Option<String> },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl SearchError {
    pub fn missing_api_key() -> Self {
        SearchError::Configuration(
            "RentCast API key not found. Please set RENTCAST_API_KEY in your environment or .env file."
                .to_string(),
        )
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Configuration(_) => "configuration",
            SearchError::Connection(_) => "connection",
            SearchError::Timeout(_) => "timeout",
            SearchError::HttpStatus { .. } => "http_status",
            SearchError::NoResults { .. } => "no_results",
            SearchError::Unexpected(_) => "unexpected",
        }
    }
}

fn no_results_message(fallback: &Option<String>) -> String {
    match fallback {
        Some(label) => format!(
            "No properties found matching your criteria using default {label} location. \
             Try a more specific query or different criteria."
        ),
        None => "No properties found matching your criteria.".to_string(),
    }
}
