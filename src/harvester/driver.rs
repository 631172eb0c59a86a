//! Pagination driver
//!
//! Walks every listing page of a category in order. Page 1 is the category
//! URL itself and supplies the page count; pages 2..=count are addressed by
//! appending the page suffix and number. The first error ends the walk and
//! the records gathered so far are dropped with it.

use crate::config::PaginationConfig;
use crate::harvester::extractor::RecordExtractor;
use crate::harvester::fetcher::PageFetcher;
use crate::harvester::transport::Transport;
use crate::harvester::types::HarvestedListing;
use crate::url::page_url;
use crate::HarvestError;

/// Drives fetch and extraction across all pages of one category
pub struct PaginationDriver<'a, T: Transport> {
    fetcher: PageFetcher<'a, T>,
    extractor: &'a RecordExtractor,
    pagination: &'a PaginationConfig,
}

impl<'a, T: Transport> PaginationDriver<'a, T> {
    pub fn new(
        transport: &'a T,
        extractor: &'a RecordExtractor,
        pagination: &'a PaginationConfig,
    ) -> Self {
        Self {
            fetcher: PageFetcher::new(transport),
            extractor,
            pagination,
        }
    }

    /// Harvests every page of the category at `base_url`
    ///
    /// # Returns
    ///
    /// * `Ok(HarvestedListing)` - Records of all pages, page order then in-page order
    /// * `Err(HarvestError)` - The first fetch or extraction failure
    pub async fn drive(&self, base_url: &str) -> Result<HarvestedListing, HarvestError> {
        tracing::info!("Harvesting category at url: {}", base_url);

        let entry = self.fetcher.fetch(base_url).await?;
        let first = self.extractor.extract(&entry, true)?;
        let page_count = first.page_count.unwrap_or(1);

        tracing::info!(
            "Category has roughly {} products: {} pages with {} products per page",
            u64::from(page_count) * u64::from(self.pagination.items_per_page),
            page_count,
            self.pagination.items_per_page
        );
        tracing::info!("Harvested page 1 ({} records)", first.records.len());

        let mut records = first.records;
        let mut pages_fetched = 1;

        for index in 2..=page_count {
            tracing::info!("Harvesting page {}...", index);
            let url = page_url(base_url, &self.pagination.page_suffix, index);
            let page = self.fetcher.fetch(&url).await?;
            let extraction = self.extractor.extract(&page, false)?;

            tracing::debug!("Page {} yielded {} records", index, extraction.records.len());
            records.extend(extraction.records);
            pages_fetched += 1;
        }

        tracing::info!("Harvesting done, products harvested: {}", records.len());

        Ok(HarvestedListing {
            pages_fetched,
            records,
        })
    }
}
