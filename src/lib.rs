//! Listing Harvester: a paginated product-listing scraper
//!
//! This crate fetches every listing page of one category on a product site,
//! extracts title, price and image reference from each item, and writes the
//! aggregated records to a JSON file.

pub mod config;
pub mod harvester;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "URL checking failed, url {url} returned HTTP {status}. This is most likely due to \
         the provided category not being valid or the servers are not responding."
    )]
    Reachability { url: String, status: u16 },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Malformed listing page {url}: {message}")]
    MalformedPage { url: String, message: String },

    #[error("Missing '{selector}' node in listing item on {url}")]
    MissingNode { url: String, selector: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvester::{Harvester, HttpTransport, ListingPage, Record, Transport};
pub use output::{JsonFileSink, RecordSink};
