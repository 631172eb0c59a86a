//! Record extraction from listing markup
//!
//! The real listing is found by position: all containers matching the list
//! selector are collected in document order and the one at `list-index` is
//! used. Nothing checks that it is the right one; if the site adds another
//! matching container earlier in the document, extraction quietly returns the
//! wrong items.
//!
//! Inside an item every expected node must be present. A missing node fails
//! the page with [`HarvestError::MissingNode`]; a present node lacking the
//! expected attribute yields `None` for that field.

use crate::config::{validate_selector, SelectorConfig};
use crate::harvester::types::{Extraction, ListingPage, Record};
use crate::{ConfigError, HarvestError};
use scraper::{ElementRef, Html, Selector};

/// A compiled selector paired with its source text for error messages
#[derive(Debug, Clone)]
struct Compiled {
    source: String,
    selector: Selector,
}

impl Compiled {
    fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            source: source.to_string(),
            selector: validate_selector(source)?,
        })
    }
}

/// Extracts records and the page count from listing pages
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    list: Compiled,
    list_index: usize,
    item: Compiled,
    title: Compiled,
    title_attr: String,
    price: Compiled,
    image_container: Compiled,
    image_anchor: Compiled,
    image_attr: String,
    page_count: Compiled,
}

impl RecordExtractor {
    /// Compiles every selector of the configuration
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            list: Compiled::parse(&config.list)?,
            list_index: config.list_index,
            item: Compiled::parse(&config.item)?,
            title: Compiled::parse(&config.title)?,
            title_attr: config.title_attr.clone(),
            price: Compiled::parse(&config.price)?,
            image_container: Compiled::parse(&config.image_container)?,
            image_anchor: Compiled::parse(&config.image_anchor)?,
            image_attr: config.image_attr.clone(),
            page_count: Compiled::parse(&config.page_count)?,
        })
    }

    /// Extracts records, and the page count when `first_page` is set
    pub fn extract(&self, page: &ListingPage, first_page: bool) -> Result<Extraction, HarvestError> {
        let document = Html::parse_document(&page.body);

        let page_count = if first_page {
            Some(self.page_count_in(&document, &page.url)?)
        } else {
            None
        };

        Ok(Extraction {
            records: self.records_in(&document, &page.url)?,
            page_count,
        })
    }

    /// Extracts every record of the listing container, in document order
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Record>)` - Possibly empty if the container has no items
    /// * `Err(HarvestError::MalformedPage)` - Fewer containers than `list-index + 1`
    /// * `Err(HarvestError::MissingNode)` - An item lacks one of its nodes
    pub fn extract_records(&self, page: &ListingPage) -> Result<Vec<Record>, HarvestError> {
        let document = Html::parse_document(&page.body);
        self.records_in(&document, &page.url)
    }

    /// Reads the total page count from a listing page
    ///
    /// Only meaningful on the first page. The node must exist and hold an
    /// integer; otherwise the page is malformed.
    pub fn extract_page_count(&self, page: &ListingPage) -> Result<u32, HarvestError> {
        let document = Html::parse_document(&page.body);
        self.page_count_in(&document, &page.url)
    }

    fn records_in(&self, document: &Html, url: &str) -> Result<Vec<Record>, HarvestError> {
        let container = document
            .select(&self.list.selector)
            .nth(self.list_index)
            .ok_or_else(|| HarvestError::MalformedPage {
                url: url.to_string(),
                message: format!(
                    "expected at least {} '{}' containers",
                    self.list_index + 1,
                    self.list.source
                ),
            })?;

        container
            .select(&self.item.selector)
            .map(|item| self.record_from(item, url))
            .collect()
    }

    fn record_from(&self, item: ElementRef<'_>, url: &str) -> Result<Record, HarvestError> {
        let title = required(item, &self.title, url)?
            .value()
            .attr(&self.title_attr)
            .map(str::to_string);

        let price = required(item, &self.price, url)?.text().collect::<String>();

        let image = required(item, &self.image_container, url)?;
        let img_href = required(image, &self.image_anchor, url)?
            .value()
            .attr(&self.image_attr)
            .map(str::to_string);

        Ok(Record {
            title,
            price,
            img_href,
        })
    }

    fn page_count_in(&self, document: &Html, url: &str) -> Result<u32, HarvestError> {
        let node = document
            .select(&self.page_count.selector)
            .next()
            .ok_or_else(|| HarvestError::MalformedPage {
                url: url.to_string(),
                message: format!("no '{}' node", self.page_count.source),
            })?;

        let text = node.text().collect::<String>();
        text.trim()
            .parse::<u32>()
            .map_err(|_| HarvestError::MalformedPage {
                url: url.to_string(),
                message: format!("page count '{}' is not a number", text.trim()),
            })
    }
}

/// First descendant of `parent` matching `compiled`, or a missing-node error
fn required<'a>(
    parent: ElementRef<'a>,
    compiled: &Compiled,
    url: &str,
) -> Result<ElementRef<'a>, HarvestError> {
    parent
        .select(&compiled.selector)
        .next()
        .ok_or_else(|| HarvestError::MissingNode {
            url: url.to_string(),
            selector: compiled.source.clone(),
        })
}
