//! Listing page fetcher
//!
//! Fetches one listing page per call. The HTTP status is recorded on the page
//! but does not gate extraction; only the pre-flight check acts on status codes.

use crate::harvester::transport::Transport;
use crate::harvester::types::ListingPage;
use crate::HarvestError;

/// Fetches listing pages through a shared transport
pub struct PageFetcher<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> PageFetcher<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Fetches a single listing page
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the listing page
    ///
    /// # Returns
    ///
    /// * `Ok(ListingPage)` - Any HTTP response, including non-2xx
    /// * `Err(HarvestError::Fetch)` - Network-level failure
    pub async fn fetch(&self, url: &str) -> Result<ListingPage, HarvestError> {
        tracing::debug!("GET {}", url);
        let response = self.transport.get(url).await?;

        if !(200..300).contains(&response.status) {
            tracing::warn!(
                "Listing page {} responded with status {}",
                url,
                response.status
            );
        }

        Ok(ListingPage {
            url: url.to_string(),
            status: response.status,
            body: response.body,
        })
    }
}
