//! Pre-flight reachability check for the category URL

use crate::harvester::transport::Transport;
use crate::HarvestError;

/// Checks that a category URL answers with a success status
pub struct UrlValidator<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> UrlValidator<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Issues one GET against `url`
    ///
    /// # Returns
    ///
    /// * `Ok(u16)` - The status code, always 2xx
    /// * `Err(HarvestError::Reachability)` - Any other final status (redirects are followed)
    /// * `Err(HarvestError::Fetch)` - Network failure, passed through unchanged
    pub async fn check(&self, url: &str) -> Result<u16, HarvestError> {
        tracing::info!("Checking URL {}", url);
        let response = self.transport.get(url).await?;

        if !(200..300).contains(&response.status) {
            return Err(HarvestError::Reachability {
                url: url.to_string(),
                status: response.status,
            });
        }

        tracing::info!("Server responded with status code {}", response.status);
        Ok(response.status)
    }
}
