//! Harvester module for listing page fetching and extraction
//!
//! This module contains the core harvesting logic:
//! - Pre-flight reachability check of the category URL
//! - Listing page fetching through a pluggable transport
//! - Record and page count extraction
//! - Sequential pagination across the whole category

mod driver;
mod extractor;
mod fetcher;
#[cfg(test)]
pub(crate) mod testing;
mod transport;
mod types;
mod validator;

pub use driver::PaginationDriver;
pub use extractor::RecordExtractor;
pub use fetcher::PageFetcher;
pub use transport::{build_http_client, HttpResponse, HttpTransport, Transport};
pub use types::{Extraction, HarvestReport, HarvestedListing, ListingPage, Record};
pub use validator::UrlValidator;

use crate::config::Config;
use crate::output::{JsonFileSink, RecordSink};
use crate::url::category_url;
use crate::HarvestError;
use std::path::Path;

/// Runs a complete harvest over HTTP
///
/// This is the main entry point for harvesting a category. It will:
/// 1. Check that the category URL is reachable
/// 2. Fetch the first listing page and read the page count
/// 3. Fetch and extract every remaining page in order
/// 4. Write all records to `output` as JSON
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `category` - Category path, already stripped of leading slashes
/// * `output` - Path of the JSON file to write
pub async fn harvest(
    config: Config,
    category: &str,
    output: &Path,
) -> Result<HarvestReport, HarvestError> {
    let harvester = Harvester::from_config(config)?;
    harvester.run(category, &JsonFileSink::new(output)).await
}

/// One harvest run: configuration, compiled selectors and a transport
///
/// The transport is shared by the pre-flight check and every page fetch.
pub struct Harvester<T: Transport> {
    config: Config,
    extractor: RecordExtractor,
    transport: T,
}

impl Harvester<HttpTransport> {
    /// Creates a harvester that talks HTTP with a client built from `config`
    pub fn from_config(config: Config) -> Result<Self, HarvestError> {
        let transport = HttpTransport::new(&config.http)?;
        Self::new(config, transport)
    }
}

impl<T: Transport> Harvester<T> {
    /// Creates a harvester with an injected transport
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Selectors compiled
    /// * `Err(HarvestError::Config)` - A selector failed to parse
    pub fn new(config: Config, transport: T) -> Result<Self, HarvestError> {
        let extractor = RecordExtractor::from_config(&config.selectors)?;
        Ok(Self {
            config,
            extractor,
            transport,
        })
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Harvests one category and hands the records to `sink`
    ///
    /// The sink is only called once every page has been harvested, so a
    /// failed run never touches the destination.
    ///
    /// # Arguments
    ///
    /// * `category` - Category path, already stripped of leading slashes
    /// * `sink` - Destination for the final record collection
    pub async fn run(
        &self,
        category: &str,
        sink: &dyn RecordSink,
    ) -> Result<HarvestReport, HarvestError> {
        let url = category_url(&self.config.site.base_url, category)?;

        UrlValidator::new(&self.transport).check(&url).await?;

        let listing = PaginationDriver::new(
            &self.transport,
            &self.extractor,
            &self.config.pagination,
        )
        .drive(&url)
        .await?;

        tracing::info!("Writing results to {}...", sink.destination());
        sink.write(&listing.records)?;
        tracing::info!("Harvest results successfully written");

        Ok(HarvestReport {
            url,
            pages: listing.pages_fetched,
            records: listing.records.len(),
        })
    }
}
