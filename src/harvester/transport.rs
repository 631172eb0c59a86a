//! Network transport used by the fetcher and the pre-flight check
//!
//! The harvester only ever issues plain GET requests, so the seam is a single
//! method. Production code uses [`HttpTransport`]; tests substitute scripted
//! transports.

use crate::config::HttpConfig;
use crate::HarvestError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// A received HTTP response, with the body already read
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body
    pub body: String,
}

/// Issues GET requests on behalf of the harvester
pub trait Transport {
    /// Sends one GET request and reads the full body
    ///
    /// Any HTTP status is a successful response. Only network-level failures
    /// (DNS, refused connection, timeout, broken body) are errors, reported as
    /// [`HarvestError::Fetch`].
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, HarvestError>> + Send;
}

/// Builds the HTTP client used for every request of a run
///
/// No custom headers are sent. A timeout is only applied when configured.
///
/// # Example
///
/// ```no_run
/// use listing_harvester::config::HttpConfig;
/// use listing_harvester::harvester::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// [`Transport`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a client built from `config`
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, HarvestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| network_error(url, e))?;

        Ok(HttpResponse { status, body })
    }
}

/// Classifies a reqwest failure into a fetch error
fn network_error(url: &str, error: reqwest::Error) -> HarvestError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    };

    HarvestError::Fetch {
        url: url.to_string(),
        message,
    }
}
